//! Menu-driven editing session.

use crate::config::Config;
use hyprconf_core::{
    backup, entries, hyprland, wallpaper, Alias, ConfError, ConfigEntry, ConfigPaths, Directive,
    MonitorSpec, MonitorTarget, WallpaperDaemon,
};
use hyprconf_interfaces::{normalize_answer, Interface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Autostart,
    Keybind,
    Wallpaper,
    Monitor,
    Alias,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Autostart),
            "2" => Some(MenuChoice::Keybind),
            "3" => Some(MenuChoice::Wallpaper),
            "4" => Some(MenuChoice::Monitor),
            "5" => Some(MenuChoice::Alias),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirmation {
    Accepted,
    Rejected,
    Closed,
}

/// Pick a wallpaper target from the secondary monitor menu.
///
/// Index `monitors.len()` means every monitor. Returns `None` for anything
/// that is not a valid index.
pub fn select_monitor(monitors: &[String], choice: &str) -> Option<MonitorTarget> {
    let index: usize = choice.trim().parse().ok()?;
    if index == monitors.len() {
        return Some(MonitorTarget::All);
    }
    monitors.get(index).map(|name| MonitorTarget::from_name(name))
}

pub struct InteractiveShell<I: Interface> {
    ui: I,
    paths: ConfigPaths,
    daemon: WallpaperDaemon,
    hyprctl: String,
    backup_on_start: bool,
}

impl<I: Interface> InteractiveShell<I> {
    pub fn new(ui: I, config: &Config, paths: ConfigPaths) -> Self {
        Self {
            ui,
            paths,
            daemon: WallpaperDaemon::new(config.wallpaper_daemon.clone()),
            hyprctl: config.hyprctl.clone(),
            backup_on_start: config.backup_on_start,
        }
    }

    pub fn interface(&self) -> &I {
        &self.ui
    }

    /// Run until the user exits or input ends.
    pub fn run(&self) {
        self.ui.send_output("🎛️  Hyprland Configurator");

        if !self.start() {
            self.wait_for_enter();
            return;
        }

        loop {
            self.print_menu();

            let Some(choice) = self.ui.prompt("\nChoice (1-6): ") else {
                tracing::debug!("Input closed, leaving menu");
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Exit) => {
                    self.ui.send_output("👋 Bye!");
                    self.wait_for_enter();
                    break;
                }
                Some(choice) => self.dispatch(choice),
                None => self.ui.send_output("❓ Unknown option, choose 1-6"),
            }
        }
    }

    pub fn dispatch(&self, choice: MenuChoice) {
        tracing::debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::Autostart => self.add_autostart(),
            MenuChoice::Keybind => self.add_bind(),
            MenuChoice::Wallpaper => self.set_wallpaper(),
            MenuChoice::Monitor => self.add_monitor(),
            MenuChoice::Alias => self.add_alias(),
            MenuChoice::Exit => {}
        }
    }

    fn start(&self) -> bool {
        if !self.paths.hyprland.is_file() {
            self.ui.send_output("❌ Hyprland config not found!");
            self.ui
                .send_output(&format!("Expected path: {}", self.paths.hyprland.display()));
            self.ui
                .send_output("❌ Cannot continue without hyprland config");
            return false;
        }
        self.ui
            .show_status(&format!("Editing {}", self.paths.hyprland.display()));

        if self.backup_on_start {
            match backup(&self.paths.hyprland, &self.paths.hyprland_backup) {
                Ok(_) => self.ui.send_output(&format!(
                    "✅ Backup created: {}",
                    self.paths.hyprland_backup.display()
                )),
                Err(e) => {
                    self.ui.send_output(&format!("❌ Error creating backup: {}", e));
                    self.ui.send_output("⚠️  Continuing without backup");
                }
            }
        }
        true
    }

    fn print_menu(&self) {
        self.ui.send_output("\nWhat do you want to change?");
        self.ui.send_output("1 - Add autostart command");
        self.ui.send_output("2 - Add keybind");
        self.ui.send_output("3 - Set wallpaper");
        self.ui.send_output("4 - Add monitor");
        self.ui.send_output("5 - Add alias to fish");
        self.ui.send_output("6 - Exit");
    }

    fn add_autostart(&self) {
        let command = self.ask("Autostart command: ");
        if command.is_empty() {
            return;
        }

        match entries::add_autostart(&self.paths.hyprland, &command) {
            Ok(_) => self
                .ui
                .send_output(&format!("✅ Added to config: {}", command)),
            Err(e) => self.report(&e),
        }
    }

    fn add_bind(&self) {
        let key_combo = self.ask("Keybind (e.g. SUPER, Y): ");
        let command = self.ask("Command: ");
        if key_combo.is_empty() || command.is_empty() {
            return;
        }

        match entries::add_bind(&self.paths.hyprland, &key_combo, &command) {
            Ok(_) => self
                .ui
                .send_output(&format!("✅ Added to config: {} -> {}", key_combo, command)),
            Err(e) => self.report(&e),
        }
    }

    fn set_wallpaper(&self) {
        let path = self.ask("Wallpaper path: ");
        if path.is_empty() {
            return;
        }

        let Some(target) = self.choose_monitor() else {
            return;
        };
        if !self.ensure_hyprpaper_config() {
            return;
        }

        match wallpaper::set_wallpaper(&self.paths.hyprpaper, &path, &target) {
            Ok(absolute) => {
                self.ui
                    .send_output(&format!("✅ Wallpaper set: {}", absolute.display()));
                self.reload_daemon();
            }
            Err(e) => self.report(&e),
        }
    }

    /// `None` when input ends before a monitor is picked.
    fn choose_monitor(&self) -> Option<MonitorTarget> {
        let monitors = hyprland::list_monitors(&self.hyprctl);
        if monitors.len() <= 1 {
            return Some(MonitorTarget::All);
        }

        self.ui.send_output("Available monitors:");
        for (i, monitor) in monitors.iter().enumerate() {
            self.ui.send_output(&format!("  {} - {}", i, monitor));
        }
        self.ui
            .send_output(&format!("  {} - All monitors", monitors.len()));

        let choice = self.ui.prompt("Choose monitor: ")?;
        let target = select_monitor(&monitors, &choice).unwrap_or_else(|| {
            self.ui.send_output("⚠️  Using all monitors");
            MonitorTarget::All
        });
        Some(target)
    }

    fn ensure_hyprpaper_config(&self) -> bool {
        if self.paths.hyprpaper.is_file() {
            return true;
        }

        self.ui.send_output("❌ Hyprpaper config not found!");
        if !self.ui.request_approval("Create new hyprpaper config?") {
            self.ui.send_output("⚠️  Returning to menu...");
            return false;
        }

        match wallpaper::create_default_config(&self.paths.hyprpaper) {
            Ok(()) => {
                self.ui.send_output("✅ Created new hyprpaper config");
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    fn reload_daemon(&self) {
        match self.daemon.reload() {
            Ok(_) => self
                .ui
                .send_output(&format!("✅ {} reloaded", self.daemon.program())),
            Err(e) => {
                tracing::warn!("Wallpaper daemon reload failed: {}", e);
                self.ui.send_output(&format!(
                    "⚠️  Failed to reload {}: {}",
                    self.daemon.program(),
                    e
                ));
            }
        }
    }

    fn add_monitor(&self) {
        loop {
            let Some(spec) = self.collect_monitor() else {
                return;
            };
            let line = Directive::Monitor(spec.clone()).line();

            match self.confirm(&format!("\n{}\nIs this correct? (y/n): ", line)) {
                Confirmation::Accepted => {
                    self.ui.send_output(&format!("📺 Adding monitor: {}", line));
                    match entries::add_monitor(&self.paths.hyprland, &spec) {
                        Ok(_) => self
                            .ui
                            .send_output("✅ Monitor configuration added successfully!"),
                        Err(e) => self.report(&e),
                    }
                    return;
                }
                Confirmation::Rejected => self.ui.send_output("↩️  Let's try again..."),
                Confirmation::Closed => return,
            }
        }
    }

    fn collect_monitor(&self) -> Option<MonitorSpec> {
        let name = self.ask("Monitor name (e.g., HDMI-A-1, DP-1): ");
        let resolution = self.ask("Resolution (e.g., 1920x1080): ");
        let refresh_rate = self.ask("Refresh rate (e.g., 144): ");
        let position = self.ask("Position (e.g., 0x0): ");

        let fields = [&name, &resolution, &refresh_rate, &position];
        if fields.iter().any(|f| f.is_empty()) {
            self.ui.send_output("❌ All fields are required!");
            return None;
        }
        Some(MonitorSpec::new(name, resolution, refresh_rate, position))
    }

    fn add_alias(&self) {
        loop {
            let old_command = self.ask("Old command: ");
            let new_command = self.ask("New command: ");
            if old_command.is_empty() || new_command.is_empty() {
                self.ui.send_output("❌ Both commands are required!");
                return;
            }
            let alias = Alias::new(old_command, new_command);
            let line = alias.line();

            match self.confirm(&format!("{}, correct? (y/n): ", line)) {
                Confirmation::Accepted => {
                    self.ui.send_output(&format!("Adding alias {}", line));
                    match entries::add_alias(&self.paths.shell, &alias) {
                        Ok(_) => self.ui.send_output("✅ Alias added successfully!"),
                        Err(e) => self.report(&e),
                    }
                    return;
                }
                Confirmation::Rejected => self.ui.send_output("↩️  Let's try again..."),
                Confirmation::Closed => return,
            }
        }
    }

    /// Ask until the answer is `y` or `n`, ignoring case.
    fn confirm(&self, question: &str) -> Confirmation {
        loop {
            let Some(answer) = self.ui.prompt(question) else {
                return Confirmation::Closed;
            };
            match normalize_answer(&answer).as_str() {
                "y" => return Confirmation::Accepted,
                "n" => return Confirmation::Rejected,
                _ => self.ui.send_output("❓ Please enter 'y' or 'n'"),
            }
        }
    }

    fn ask(&self, prompt: &str) -> String {
        self.ui
            .prompt(prompt)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    fn wait_for_enter(&self) {
        let _ = self.ui.prompt("Press Enter to exit");
    }

    fn report(&self, error: &ConfError) {
        tracing::warn!("Operation failed: {}", error);
        self.ui.send_output(&format!("❌ {}", error));
    }
}
