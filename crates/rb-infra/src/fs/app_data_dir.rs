use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the Recipebook application data root directory.
///
/// - macOS: ~/Library/Application Support/Recipebook
/// - Windows: %APPDATA%\Recipebook
/// - Linux: $XDG_DATA_HOME/Recipebook or ~/.local/share/Recipebook
///
/// This function does not create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join("Recipebook"))
}

/// Directory of the JSON document store.
pub fn documents_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("documents"))
}
