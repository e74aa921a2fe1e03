//! Well-known config locations under the user's home directory.

use crate::error::{ConfError, ConfResult};
use std::path::{Path, PathBuf};

pub const HYPRLAND_CONFIG: &str = ".config/hypr/hyprland.conf";
pub const HYPRPAPER_CONFIG: &str = ".config/hypr/hyprpaper.conf";
pub const FISH_CONFIG: &str = ".config/fish/config.fish";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub hyprland: PathBuf,
    pub hyprland_backup: PathBuf,
    pub hyprpaper: PathBuf,
    pub shell: PathBuf,
}

impl ConfigPaths {
    pub fn from_home<P: AsRef<Path>>(home: P) -> Self {
        let home = home.as_ref();
        Self::new(
            home.join(HYPRLAND_CONFIG),
            home.join(HYPRPAPER_CONFIG),
            home.join(FISH_CONFIG),
        )
    }

    /// Build from explicit file locations; the backup sits next to the
    /// compositor config.
    pub fn new(hyprland: PathBuf, hyprpaper: PathBuf, shell: PathBuf) -> Self {
        let hyprland_backup = backup_path_for(&hyprland);
        Self {
            hyprland,
            hyprland_backup,
            hyprpaper,
            shell,
        }
    }
}

/// The current user's home directory.
pub fn home_dir() -> ConfResult<PathBuf> {
    dirs::home_dir().ok_or(ConfError::NoHomeDir)
}

/// `hyprland.conf` -> `hyprland.conf.backup`
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".backup");
    path.with_file_name(name)
}
