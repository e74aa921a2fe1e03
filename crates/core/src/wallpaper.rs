//! hyprpaper config rewriting.
//!
//! Unlike the compositor config, `preload`/`wallpaper` lines here are
//! replaced rather than appended to. Every other line passes through as is.

use crate::error::{ConfError, ConfResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_HEADER: &str = "# Hyprpaper config created by hyprconf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorTarget {
    All,
    Named(String),
}

impl MonitorTarget {
    pub fn from_name(name: &str) -> Self {
        if name == "all" {
            MonitorTarget::All
        } else {
            MonitorTarget::Named(name.to_string())
        }
    }
}

impl std::fmt::Display for MonitorTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorTarget::All => write!(f, "all monitors"),
            MonitorTarget::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Write a minimal hyprpaper config, creating parent directories as needed.
pub fn create_default_config<P: AsRef<Path>>(path: P) -> ConfResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}\n", DEFAULT_HEADER))?;
    tracing::info!("Created hyprpaper config at {:?}", path);
    Ok(())
}

/// Produce the new config text for `wallpaper` on `target`.
///
/// `MonitorTarget::All` drops every line starting with `wallpaper` or
/// `preload`. `MonitorTarget::Named` currently drops nothing: earlier lines
/// for that monitor stay in the file and the appended pair follows them.
/// hyprpaper applies the last `wallpaper` line per monitor, so the result is
/// still correct on screen, but stale `preload` lines accumulate.
pub fn rewrite_config(content: &str, wallpaper: &Path, target: &MonitorTarget) -> String {
    let mut out = String::with_capacity(content.len() + 128);

    for line in content.split_inclusive('\n') {
        if is_stale(line, target) {
            continue;
        }
        out.push_str(line);
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }

    let wallpaper = wallpaper.display();
    out.push_str(&format!("preload = {}\n", wallpaper));
    match target {
        MonitorTarget::All => out.push_str(&format!("wallpaper = ,{}\n", wallpaper)),
        MonitorTarget::Named(monitor) => {
            out.push_str(&format!("wallpaper = {},{}\n", monitor, wallpaper))
        }
    }
    out
}

fn is_stale(line: &str, target: &MonitorTarget) -> bool {
    match target {
        MonitorTarget::All => {
            let trimmed = line.trim();
            trimmed.starts_with("wallpaper") || trimmed.starts_with("preload")
        }
        // TODO: drop `wallpaper = <monitor>,...` lines and the preloads only
        // they reference once per-monitor cleanup is agreed on.
        MonitorTarget::Named(_) => false,
    }
}

/// Point hyprpaper at `wallpaper` for `target` and return the absolute
/// wallpaper path that was written.
pub fn set_wallpaper<P: AsRef<Path>, W: AsRef<Path>>(
    config: P,
    wallpaper: W,
    target: &MonitorTarget,
) -> ConfResult<PathBuf> {
    let config = config.as_ref();
    let wallpaper = wallpaper.as_ref();

    if !config.is_file() {
        return Err(ConfError::NotFound(config.to_path_buf()));
    }
    if !wallpaper.exists() {
        return Err(ConfError::WallpaperNotFound(wallpaper.to_path_buf()));
    }

    let absolute = std::path::absolute(wallpaper)?;
    let content = fs::read_to_string(config)?;
    let updated = rewrite_config(&content, &absolute, target);
    fs::write(config, updated)?;

    tracing::info!("Set wallpaper {:?} for {}", absolute, target);
    Ok(absolute)
}
