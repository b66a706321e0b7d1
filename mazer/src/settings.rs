use std::{
    fs, io,
    path::{Path, PathBuf},
};

use mazegen::{algorithms::Algorithm, config::Limits, svg::SvgStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::base_path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_width: i32,
    pub default_height: i32,
    pub default_algorithm: Algorithm,
    pub limits: Limits,
    pub svg: SvgStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_width: 10,
            default_height: 10,
            default_algorithm: Algorithm::default(),
            limits: Limits::default(),
            svg: SvgStyle::default(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        base_path().map(|dir| dir.join("settings.toml"))
    }

    /// Reads settings from a TOML file. A missing file means defaults, missing keys as well.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        log::debug!("Loading settings from {:?}", path);

        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites `path` with the default settings, creating missing directories.
    pub fn reset_config(path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, toml::to_string_pretty(&Self::default())?)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}
