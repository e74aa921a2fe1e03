use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Wallpaper file not found: {}", .0.display())]
    WallpaperNotFound(PathBuf),

    #[error("Home directory could not be determined")]
    NoHomeDir,

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfResult<T> = Result<T, ConfError>;
