//! Monitor discovery through `hyprctl monitors`.

use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Returned whenever the monitor list cannot be obtained.
pub const FALLBACK_MONITOR: &str = "all";

fn monitor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Monitor\s+(\S+)\s*\(").expect("valid monitor pattern")
    })
}

/// Extract monitor names from `hyprctl monitors` text output, e.g.
/// `Monitor DP-1 (ID 0):` yields `DP-1`.
pub fn parse_monitor_names(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| monitor_pattern().captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Run `<hyprctl> monitors` and list the connected monitors.
///
/// Any failure to run the command yields `["all"]`.
pub fn list_monitors(hyprctl: &str) -> Vec<String> {
    let output = match Command::new(hyprctl).arg("monitors").output() {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("Failed to run {} monitors: {}", hyprctl, e);
            return vec![FALLBACK_MONITOR.to_string()];
        }
    };

    if !output.status.success() {
        tracing::warn!(
            "{} monitors exited with {}: {}",
            hyprctl,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return vec![FALLBACK_MONITOR.to_string()];
    }

    let monitors = parse_monitor_names(&String::from_utf8_lossy(&output.stdout));
    tracing::debug!("Discovered monitors: {:?}", monitors);
    monitors
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Monitor DP-1 (ID 0):
	2560x1440@143.99800 at 0x0
	description: Dell Inc. DELL S2721DGF
	focused: yes

Monitor HDMI-A-1 (ID 1):
	1920x1080@60.00000 at 2560x0
	description: Samsung Monitor (HDMI)
";

    #[test]
    fn test_parse_single_monitor() {
        assert_eq!(parse_monitor_names("Monitor DP-1 (ID 0):\n"), vec!["DP-1"]);
    }

    #[test]
    fn test_parse_multiple_monitors() {
        assert_eq!(parse_monitor_names(SAMPLE), vec!["DP-1", "HDMI-A-1"]);
    }

    #[test]
    fn test_parse_no_monitors() {
        assert!(parse_monitor_names("no monitors here\n").is_empty());
        assert!(parse_monitor_names("").is_empty());
    }

    #[test]
    fn test_parse_reuses_pattern_across_calls() {
        assert_eq!(parse_monitor_names(SAMPLE), vec!["DP-1", "HDMI-A-1"]);
        assert_eq!(
            parse_monitor_names("Monitor eDP-1 (ID 2):\n"),
            vec!["eDP-1"]
        );
        assert!(std::ptr::eq(monitor_pattern(), monitor_pattern()));
    }

    #[test]
    fn test_missing_command_falls_back() {
        let monitors = list_monitors("hyprconf-test-no-such-hyprctl");
        assert_eq!(monitors, vec!["all"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_falls_back() {
        // `false monitors` exits non-zero.
        assert_eq!(list_monitors("false"), vec!["all"]);
    }
}
