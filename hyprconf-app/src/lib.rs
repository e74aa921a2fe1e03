pub mod config;
pub mod shell;

pub use config::Config;
pub use shell::{InteractiveShell, MenuChoice};
