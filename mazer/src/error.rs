use mazegen::MazeError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("could not load settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("no maze to work with, use --generate or --load")]
    NoSource,
    #[error("--generate takes either no size or both WIDTH and HEIGHT")]
    PartialSize,
    #[error("there is no config directory on this platform, use --config")]
    NoConfigDir,
}
