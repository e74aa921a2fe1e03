use anyhow::{Context, Result};
use hyprconf_app::{Config, InteractiveShell};
use hyprconf_interfaces::{Interface, TerminalInterface};
use tracing_subscriber::EnvFilter;

fn main() {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        let ui = TerminalInterface::new();
        ui.send_output(&format!("💥 Something went wrong: {:?}", e));
        let _ = ui.prompt("Press Enter");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "config" {
        return match args.get(2).map(|s| s.as_str()) {
            Some("show") => handle_config_show(),
            Some("reset") => handle_config_reset(),
            _ => anyhow::bail!("Usage: hyprconf [config show|config reset]"),
        };
    }

    println!("Hi! 🚀");

    let config = Config::load()?;
    config.validate().context("Invalid configuration")?;
    let paths = config.discover_paths()?;

    let shell = InteractiveShell::new(TerminalInterface::new(), &config, paths);
    shell.run();
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;
    let paths = config.discover_paths()?;

    let source = if Config::exists() { "" } else { " (not present, using defaults)" };
    println!("Config file:      {}{}", Config::path()?.display(), source);
    println!("Hyprland config:  {}", paths.hyprland.display());
    println!("Backup:           {}", paths.hyprland_backup.display());
    println!("Hyprpaper config: {}", paths.hyprpaper.display());
    println!("Shell config:     {}", paths.shell.display());
    println!("Wallpaper daemon: {}", config.wallpaper_daemon);
    println!("hyprctl:          {}", config.hyprctl);
    println!("Backup on start:  {}", config.backup_on_start);
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::default().save()?;
    println!("✅ Configuration reset: {}", path.display());
    Ok(())
}
