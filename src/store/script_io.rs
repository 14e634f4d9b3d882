use std::path::Path;

use crate::error::Result;

pub fn load_script(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Write `text` to `path` in a single write, truncating any previous script.
pub fn save_script(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved script");
    Ok(())
}
