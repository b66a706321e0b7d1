use std::path::PathBuf;

use dirs::config_dir;

/// Directory holding mazer's configuration, `None` on platforms without one.
pub fn base_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("mazer"))
}
