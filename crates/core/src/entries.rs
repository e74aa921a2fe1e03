//! Append-only edits: autostart, keybind and monitor directives for the
//! compositor config, and aliases for the shell config.
//!
//! Every entry is written as two lines at the end of the target file: a
//! comment naming where it came from, then the entry itself. Nothing already
//! in the file is rewritten.

use crate::error::{ConfError, ConfResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// A managed entry that can be appended to a config file.
pub trait ConfigEntry {
    fn comment(&self) -> String;
    fn line(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSpec {
    pub name: String,
    pub resolution: String,
    pub refresh_rate: String,
    pub position: String,
}

impl MonitorSpec {
    pub fn new(
        name: impl Into<String>,
        resolution: impl Into<String>,
        refresh_rate: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resolution: resolution.into(),
            refresh_rate: refresh_rate.into(),
            position: position.into(),
        }
    }
}

/// Compositor directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Autostart { command: String },
    Bind { key_combo: String, command: String },
    Monitor(MonitorSpec),
}

impl ConfigEntry for Directive {
    fn comment(&self) -> String {
        match self {
            Directive::Autostart { command } => format!("# Autostart: {}", command),
            Directive::Bind { key_combo, command } => format!("# Bind {} {}", key_combo, command),
            Directive::Monitor(_) => "# Monitor added via HCE".to_string(),
        }
    }

    fn line(&self) -> String {
        match self {
            Directive::Autostart { command } => format!("exec-once = {}", command),
            Directive::Bind { key_combo, command } => {
                format!("bind = {}, exec, {}", key_combo, command)
            }
            // Scale is always 1.
            Directive::Monitor(spec) => format!(
                "monitor = {}, {}@{}, {}, 1",
                spec.name, spec.resolution, spec.refresh_rate, spec.position
            ),
        }
    }
}

/// Shell alias mapping `new_command` to `old_command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub old_command: String,
    pub new_command: String,
}

impl Alias {
    pub fn new(old_command: impl Into<String>, new_command: impl Into<String>) -> Self {
        Self {
            old_command: old_command.into(),
            new_command: new_command.into(),
        }
    }
}

impl ConfigEntry for Alias {
    fn comment(&self) -> String {
        "# Alias added via HCE".to_string()
    }

    fn line(&self) -> String {
        format!("alias {}=\"{}\"", self.new_command, self.old_command)
    }
}

/// Append `entry` to an existing file and return the data line written.
pub fn append_entry<P: AsRef<Path>, E: ConfigEntry + ?Sized>(
    path: P,
    entry: &E,
) -> ConfResult<String> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(ConfError::NotFound(path.to_path_buf()));
    }

    let needs_newline = !ends_with_newline(path)?;
    let line = entry.line();

    let mut file = OpenOptions::new().append(true).open(path)?;
    let mut buf = String::new();
    if needs_newline {
        buf.push('\n');
    }
    buf.push_str(&entry.comment());
    buf.push('\n');
    buf.push_str(&line);
    buf.push('\n');
    file.write_all(buf.as_bytes())?;
    file.flush()?;

    tracing::info!("Appended to {:?}: {}", path, line);
    Ok(line)
}

pub fn add_autostart<P: AsRef<Path>>(path: P, command: &str) -> ConfResult<String> {
    append_entry(
        path,
        &Directive::Autostart {
            command: command.to_string(),
        },
    )
}

pub fn add_bind<P: AsRef<Path>>(path: P, key_combo: &str, command: &str) -> ConfResult<String> {
    append_entry(
        path,
        &Directive::Bind {
            key_combo: key_combo.to_string(),
            command: command.to_string(),
        },
    )
}

pub fn add_monitor<P: AsRef<Path>>(path: P, spec: &MonitorSpec) -> ConfResult<String> {
    append_entry(path, &Directive::Monitor(spec.clone()))
}

pub fn add_alias<P: AsRef<Path>>(path: P, alias: &Alias) -> ConfResult<String> {
    append_entry(path, alias)
}

// Empty files count as terminated.
fn ends_with_newline(path: &Path) -> ConfResult<bool> {
    let content = fs::read(path)?;
    Ok(content.last().map_or(true, |b| *b == b'\n'))
}
