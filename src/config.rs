use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_PATH: &str = "Config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub show_captured: bool,
    /// Highlight destinations on the board when a hint is asked for.
    pub show_hints: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_captured: true,
            show_hints: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `Config.toml` from the working directory when it exists, then
    /// applies `JANGGI_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = if Path::new(CONFIG_PATH).exists() {
            Self::from_file(CONFIG_PATH)?
        } else {
            Self::default()
        };
        config.merge_env();
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: CONFIG_PATH.to_string(),
            source,
        })
    }

    fn merge_env(&mut self) {
        if let Some(parsed) = env_flag("JANGGI_COLOR") {
            self.display.color = parsed;
        }
        if let Some(parsed) = env_flag("JANGGI_SHOW_CAPTURED") {
            self.display.show_captured = parsed;
        }
        if let Some(parsed) = env_flag("JANGGI_SHOW_HINTS") {
            self.display.show_hints = parsed;
        }
        if let Ok(val) = std::env::var("JANGGI_LOG_LEVEL") {
            if !val.trim().is_empty() {
                self.log.level = val.trim().to_string();
            }
        }
    }

    pub fn describe(&self) {
        log::info!(
            "display: color={} captured={} hints={}; log level {}",
            self.display.color,
            self.display.show_captured,
            self.display.show_hints,
            self.log.level
        );
    }
}

fn env_flag(key: &str) -> Option<bool> {
    let val = std::env::var(key).ok()?;
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
