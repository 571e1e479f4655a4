pub mod board;
pub mod config;

use std::path::PathBuf;

/// Get or create the Argand data directory (~/.local/share/argand/).
pub fn data_dir() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("argand");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Get or create the Argand config directory (~/.config/argand/).
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("argand");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
