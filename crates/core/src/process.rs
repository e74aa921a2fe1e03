//! Wallpaper daemon restart.

use crate::error::{ConfError, ConfResult};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use sysinfo::{Signal, System};

#[derive(Debug, Clone)]
pub struct WallpaperDaemon {
    program: String,
}

impl WallpaperDaemon {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Name the running daemon shows up under: the file name of
    /// `program`, so `/usr/bin/hyprpaper` matches `hyprpaper`.
    pub fn process_name(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program)
    }

    /// Stop running instances, then launch a fresh one in the background.
    ///
    /// Stopping is best-effort. Returns how many running instances were
    /// signalled.
    pub fn reload(&self) -> ConfResult<usize> {
        let killed = self.kill_running();
        let child = self.spawn_detached()?;

        tracing::info!(
            "Restarted {} (pid {}, {} old instance(s) killed)",
            self.program,
            child.id(),
            killed
        );
        Ok(killed)
    }

    // Own process group, so Ctrl+C in the editor does not reach the daemon.
    fn spawn_detached(&self) -> ConfResult<Child> {
        let mut command = Command::new(&self.program);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        command
            .spawn()
            .map_err(|e| ConfError::CommandFailed(format!("{}: {}", self.program, e)))
    }

    fn kill_running(&self) -> usize {
        let mut system = System::new();
        system.refresh_processes();

        let name = self.process_name();
        let mut killed = 0;
        for process in system.processes_by_exact_name(name) {
            // SIGTERM lets the daemon remove its IPC socket.
            let signalled = process
                .kill_with(Signal::Term)
                .unwrap_or_else(|| process.kill());
            if signalled {
                killed += 1;
            } else {
                tracing::warn!("Could not kill {} (pid {})", name, process.pid().as_u32());
            }
        }
        killed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_name_from_path() {
        assert_eq!(
            WallpaperDaemon::new("/usr/bin/hyprpaper").process_name(),
            "hyprpaper"
        );
        assert_eq!(WallpaperDaemon::new("hyprpaper").process_name(), "hyprpaper");
    }

    #[test]
    fn test_reload_missing_program() {
        let daemon = WallpaperDaemon::new("hyprconf-test-no-such-daemon");
        let result = daemon.reload();
        assert!(matches!(result, Err(ConfError::CommandFailed(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_reload_spawns_program() {
        let daemon = WallpaperDaemon::new("true");
        assert!(daemon.reload().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_path_configured_daemon_stops_running_instance() {
        use std::os::unix::process::ExitStatusExt;

        let mut running = Command::new("sleep").arg("30").spawn().unwrap();

        // Directory differs from the real binary; only the name matters.
        let daemon = WallpaperDaemon::new("/hyprconf/test/bin/sleep");
        let killed = daemon.kill_running();
        assert!(killed >= 1);

        let status = running.wait().unwrap();
        assert_eq!(status.signal(), Some(15));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_spawned_daemon_has_own_process_group() {
        let mut child = WallpaperDaemon::new("true").spawn_detached().unwrap();
        let pid = child.id();

        // Until it is reaped the child keeps its /proc entry.
        let stat = std::fs::read_to_string(format!("/proc/{}/stat", pid)).unwrap();
        let after_comm = &stat[stat.rfind(')').unwrap() + 1..];
        let fields: Vec<&str> = after_comm.split_whitespace().collect();
        // state, ppid, pgrp
        let pgrp: u32 = fields[2].parse().unwrap();
        assert_eq!(pgrp, pid);

        child.wait().unwrap();
    }
}
