mod cli;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

use sieve_rules::config::paths;
use sieve_rules::model::settings::AccountSettings;
use sieve_rules::sieve::render_rule_file_to;
use sieve_rules::simulation::apply_rule_files;
use sieve_rules::store::{load_email, load_settings};
use sieve_rules::{Error, Result};

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = match cli.settings {
        Some(path) => path,
        None => paths::default_settings_path().ok_or(Error::NoConfigDir)?,
    };
    let settings = load_validated(&settings_path)?;

    match cli.command {
        Command::Validate => {
            println!(
                "{}: {} rule files, {} folders, {} tags",
                settings_path.display(),
                settings.rule_files.len(),
                settings.folders.len(),
                settings.tags.len()
            );
        }
        Command::Render { output_dir } => render(&settings, &output_dir)?,
        Command::Simulate { email, trace } => {
            let email = load_email(&email)?;
            let simulation = apply_rule_files(&email, &settings.rule_files);
            if trace {
                println!("{simulation}");
            }
            let state = &simulation.final_state().email_state;
            println!("folder: {}", state.current_folder);
            println!(
                "tags: {}",
                state.tags.iter().cloned().collect::<Vec<_>>().join(", ")
            );
            println!("read: {}", state.is_read);
        }
    }
    Ok(())
}

fn load_validated(path: &Path) -> Result<AccountSettings> {
    let settings = load_settings(path)?;
    settings.validate()?;
    Ok(settings)
}

fn render(settings: &AccountSettings, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let written: Vec<PathBuf> = settings
        .rule_files
        .iter()
        .map(|rule_file| render_rule_file_to(rule_file, output_dir))
        .collect::<Result<_>>()?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
