//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Play the terminal bell on match feedback.
    pub sound_enabled: bool,
    /// Height of the message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Log file path. Logs go to a file because stderr is owned by the TUI.
    pub log_file: PathBuf,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STATEMATCH_SOUND` - "0"/"false" disables the terminal bell
    /// - `STATEMATCH_MESSAGE_PANEL_HEIGHT` - message panel height (default: 6)
    /// - `STATEMATCH_LOG_FILE` - log file path (default: statematch.log)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(flag) = read_env::<String>("STATEMATCH_SOUND") {
            config.sound_enabled = !matches!(flag.as_str(), "0" | "false" | "off");
        }
        if let Some(height) = read_env::<u16>("STATEMATCH_MESSAGE_PANEL_HEIGHT") {
            config.message_panel_height = height.max(3);
        }
        if let Some(path) = read_env::<PathBuf>("STATEMATCH_LOG_FILE") {
            config.log_file = path;
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            message_panel_height: 6,
            log_file: PathBuf::from("statematch.log"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
