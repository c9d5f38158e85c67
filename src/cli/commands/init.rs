use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default values
///
/// An existing configuration file is left untouched.
/// With `--test` nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    println!("⚙️  Initializing rBusBooker…");
    println!("📄 Config file : {}", path.display());

    if cli.test {
        info("Test mode: configuration file not written.");
    } else if path.exists() {
        info("Configuration file already present, keeping it.");
    } else {
        Config::default().save_to(&path)?;
        success(format!("Config file: {}", path.display()));
    }

    println!("🎉 rBusBooker initialization completed!");
    Ok(())
}
