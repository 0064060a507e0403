//! Config command - inspect or change the configuration

use crate::{ShelfrError, cli::ConfigCommands, config::ShelfrConfig};
use colored::Colorize;

type Result<T> = std::result::Result<T, ShelfrError>;

/// Execute the config command
///
/// # Errors
/// Returns an error if the config path cannot be determined, the
/// configuration cannot be serialized, or saving fails
pub fn execute(config: &mut ShelfrConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| {
                ShelfrError::InvalidInput(format!("Failed to serialize config: {e}"))
            })?;
            print!("{rendered}");
        }
        ConfigCommands::Path => {
            println!("{}", ShelfrConfig::config_path()?.display());
        }
        ConfigCommands::SetDir { dir } => {
            if !dir.is_dir() && !quiet {
                eprintln!(
                    "{} '{}' does not exist yet",
                    "Warning:".yellow(),
                    dir.display()
                );
            }
            config.set_ebook_dir(dir.clone())?;
            if !quiet {
                println!("Library directory set to {}", dir.display());
            }
        }
    }
    Ok(())
}
