//! File and process operations behind the hyprconf editor.
//!
//! Every operation is stateless: callers pass the paths and values explicitly
//! and get a [`ConfResult`] back.

pub mod backup;
pub mod entries;
pub mod error;
pub mod hyprland;
pub mod paths;
pub mod process;
pub mod wallpaper;

pub use backup::backup;
pub use entries::{
    add_alias, add_autostart, add_bind, add_monitor, append_entry, Alias, ConfigEntry, Directive,
    MonitorSpec,
};
pub use error::{ConfError, ConfResult};
pub use hyprland::{list_monitors, parse_monitor_names};
pub use paths::ConfigPaths;
pub use process::WallpaperDaemon;
pub use wallpaper::{create_default_config, rewrite_config, set_wallpaper, MonitorTarget};
