//! Configuration CLI commands.
//!
//! Provides `config path` and `config show`.

use clap::Subcommand;
use edx::config::config_file_path;
use edx::EdxConfig;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration settings
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config: &EdxConfig) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => {
            print!("{}", render(config));
            Ok(())
        }
    }
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path()?.display());
    Ok(())
}

/// Format the effective settings in INI layout.
pub fn render(config: &EdxConfig) -> String {
    let or_unset = |value: &str| {
        if value.is_empty() {
            "(not set)".to_string()
        } else {
            value.to_string()
        }
    };
    let directory = config
        .logging
        .directory
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_default();

    format!(
        concat!(
            "[general]\n",
            "  author = {}\n",
            "\n",
            "[validation]\n",
            "  strict = {}\n",
            "  validate_on_save = {}\n",
            "\n",
            "[logging]\n",
            "  level = {}\n",
            "  directory = {}\n",
        ),
        or_unset(config.author.as_str()),
        config.strict,
        config.validate_on_save,
        config.logging.level,
        or_unset(directory.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let text = render(&EdxConfig::default());
        assert!(text.contains("author = (not set)"));
        assert!(text.contains("strict = false"));
        assert!(text.contains("validate_on_save = true"));
        assert!(text.contains("level = info"));
    }

    #[test]
    fn test_render_custom() {
        let config = EdxConfig::default()
            .with_author("Jane")
            .with_log_directory("/tmp/logs");
        let text = render(&config);
        assert!(text.contains("author = Jane"));
        assert!(text.contains("directory = /tmp/logs"));
    }
}
