use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Editor configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Editing behaviour
    #[serde(default)]
    pub editor: EditorConfig,

    /// Raw terminal settings
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Log output
    #[serde(default)]
    pub log: LogConfig,
}

/// Editor settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EditorConfig {
    /// Render width of a tab character
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,

    /// Consecutive Ctrl-Q presses needed to quit with unsaved changes
    #[serde(default = "default_quit_times")]
    pub quit_times: u32,

    /// How long a status message stays on screen
    #[serde(default = "default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

/// Terminal settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TerminalConfig {
    /// Idle time after which a read returns empty, in tenths of a second
    #[serde(default = "default_read_timeout_deciseconds")]
    pub read_timeout_deciseconds: u8,
}

/// Log settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    /// Log file; nothing is logged when unset
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// `tracing` filter directive
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_tab_stop() -> usize {
    8
}
fn default_quit_times() -> u32 {
    3
}
fn default_message_timeout_secs() -> u64 {
    5
}
fn default_read_timeout_deciseconds() -> u8 {
    1
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            quit_times: default_quit_times(),
            message_timeout_secs: default_message_timeout_secs(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            read_timeout_deciseconds: default_read_timeout_deciseconds(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    /// The config
    config: Config,

    /// The path to the config file
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a manager for `<config_dir>/config.json`
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config: Config::default(),
            config_path: config_dir.join("config.json"),
        }
    }

    /// Manager for the per-user config directory, `<config_dir>/tilde`
    pub fn for_user() -> Self {
        let user_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tilde");
        Self::new(&user_dir)
    }

    /// Load the config file; a missing file leaves the defaults in place
    pub fn load(&mut self) -> Result<()> {
        if self.config_path.exists() {
            let config_str = fs::read_to_string(&self.config_path)
                .with_context(|| format!("failed to read {}", self.config_path.display()))?;
            self.config = serde_json::from_str(&config_str)
                .with_context(|| format!("failed to parse {}", self.config_path.display()))?;
        }

        Ok(())
    }

    /// Get the config
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Take the loaded config
    pub fn into_config(self) -> Config {
        self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "editor": { "tab_stop": 4 } }"#).unwrap();

        assert_eq!(config.editor.tab_stop, 4);
        assert_eq!(config.editor.quit_times, 3);
        assert_eq!(config.editor.message_timeout_secs, 5);
        assert_eq!(config.terminal.read_timeout_deciseconds, 1);
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = std::env::temp_dir().join("tilde-config-test-missing");
        let mut manager = ConfigManager::new(&dir);
        manager.load().unwrap();
        assert_eq!(manager.get_config(), &Config::default());
    }
}
