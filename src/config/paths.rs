use directories::ProjectDirs;
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sieve-rules").map(|d| d.config_dir().to_path_buf())
}

/// `settings.json` inside [`config_dir`].
pub fn default_settings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(SETTINGS_FILE))
}
