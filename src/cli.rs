use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// Email filter rules as code
#[derive(Debug, Parser)]
#[command(name = "sieve-rules")]
#[command(about = "Simulate email filter rules and compile them to SIEVE")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (defaults to settings.json in the config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write one SIEVE script per rule file
    Render {
        /// Directory the scripts are written to
        #[arg(long)]
        output_dir: PathBuf,
    },
    /// Run the rules against an email and print where it ends up
    Simulate {
        /// Email as JSON: {"from": .., "to": [..], "subject": ..}
        #[arg(long)]
        email: PathBuf,

        /// Print every step, not just the final state
        #[arg(long)]
        trace: bool,
    },
    /// Check folders, tags and actions in the settings
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "sieve-rules",
            "simulate",
            "--email",
            "mail.json",
            "--trace",
            "--settings",
            "s.json",
        ])
        .unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("s.json")));
        assert!(!cli.debug);
        match cli.command {
            Command::Simulate { email, trace } => {
                assert_eq!(email, PathBuf::from("mail.json"));
                assert!(trace);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_render_needs_output_dir() {
        assert!(Cli::try_parse_from(["sieve-rules", "render"]).is_err());
        let cli = Cli::try_parse_from(["sieve-rules", "--debug", "render", "--output-dir", "out"])
            .unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Render { .. }));
    }
}
