use anyhow::{Context, Result};
use hyprconf_core::{paths, ConfigPaths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the location of the tool config.
pub const CONFIG_ENV: &str = "HYPRCONF_CONFIG";
const CONFIG_FILE: &str = ".config/hyprconf/config.yaml";

/// Settings for the editor itself, not to be confused with the Hyprland
/// files it edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyprland_config: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyprpaper_config: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_config: Option<PathBuf>,
    pub wallpaper_daemon: String,
    pub hyprctl: String,
    pub backup_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hyprland_config: None,
            hyprpaper_config: None,
            shell_config: None,
            wallpaper_daemon: "hyprpaper".to_string(),
            hyprctl: "hyprctl".to_string(),
            backup_on_start: true,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        Ok(paths::home_dir()?.join(CONFIG_FILE))
    }

    pub fn exists() -> bool {
        Self::path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load the tool config, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::path()?)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.wallpaper_daemon.trim().is_empty() {
            anyhow::bail!("wallpaper_daemon cannot be empty");
        }
        if self.hyprctl.trim().is_empty() {
            anyhow::bail!("hyprctl cannot be empty");
        }
        Ok(())
    }

    /// Resolve the edited files for the current user.
    pub fn discover_paths(&self) -> Result<ConfigPaths> {
        let home = paths::home_dir().context("Failed to locate config files")?;
        Ok(self.resolve_paths(&home))
    }

    /// Resolve the edited files, applying overrides on top of the defaults
    /// under `home`.
    pub fn resolve_paths(&self, home: &Path) -> ConfigPaths {
        let defaults = ConfigPaths::from_home(home);
        let pick = |custom: &Option<PathBuf>, default: PathBuf| {
            custom
                .as_deref()
                .map(|p| expand_home(p, home))
                .unwrap_or(default)
        };

        ConfigPaths::new(
            pick(&self.hyprland_config, defaults.hyprland),
            pick(&self.hyprpaper_config, defaults.hyprpaper),
            pick(&self.shell_config, defaults.shell),
        )
    }
}

// `~/x` and relative paths both land under `home`.
fn expand_home(path: &Path, home: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        return home.join(rest);
    }
    if path.is_relative() {
        return home.join(path);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/user");
        assert_eq!(
            expand_home(Path::new("~/dots/hyprland.conf"), home),
            PathBuf::from("/home/user/dots/hyprland.conf")
        );
        assert_eq!(
            expand_home(Path::new("dots/config.fish"), home),
            PathBuf::from("/home/user/dots/config.fish")
        );
        assert_eq!(
            expand_home(Path::new("/etc/hypr.conf"), home),
            PathBuf::from("/etc/hypr.conf")
        );
    }

    #[test]
    fn test_default_resolves_to_well_known_paths() {
        let paths = Config::default().resolve_paths(Path::new("/home/user"));
        assert_eq!(paths, ConfigPaths::from_home("/home/user"));
    }

    #[test]
    fn test_discover_paths_uses_home_dir() {
        let config = Config {
            shell_config: Some(PathBuf::from("~/dots/config.fish")),
            ..Config::default()
        };
        match paths::home_dir() {
            Ok(home) => {
                let discovered = config.discover_paths().unwrap();
                assert_eq!(discovered, config.resolve_paths(&home));
                assert_eq!(discovered.shell, home.join("dots/config.fish"));
            }
            Err(_) => assert!(config.discover_paths().is_err()),
        }
    }
}
