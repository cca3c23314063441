//! TOML-based application configuration.
//!
//! Stores the interval lengths and notification preferences.
//! Configuration is stored at `~/.config/standshift/config.toml`; a
//! default file is written on first run. Command-line flags override the
//! file, and the resulting durations are fixed for the lifetime of the
//! engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Interval lengths, written with the duration grammar of
/// [`parse_duration`] (e.g. `"30m"`, `"1h30m"`, `"90s"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalsConfig {
    #[serde(default = "default_stand")]
    pub stand: String,
    #[serde(default = "default_sit")]
    pub sit: String,
}

/// Notification delivery preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Desktop notification on interval expiry.
    #[serde(default = "default_true")]
    pub desktop: bool,
    /// Terminal bell on interval expiry.
    #[serde(default = "default_true")]
    pub sound: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/standshift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub intervals: IntervalsConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_stand() -> String {
    "30m".into()
}
fn default_sit() -> String {
    "1h".into()
}
fn default_true() -> bool {
    true
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        Self {
            stand: default_stand(),
            sit: default_sit(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            desktop: true,
            sound: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intervals: IntervalsConfig::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}

/// Returns `~/.config/standshift/`, creating it if missing.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("standshift");
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing a default file if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; same semantics as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Configured standing interval in seconds.
    pub fn stand_secs(&self) -> Result<u64, ConfigError> {
        parse_duration(&self.intervals.stand)
    }

    /// Configured sitting interval in seconds.
    pub fn sit_secs(&self) -> Result<u64, ConfigError> {
        parse_duration(&self.intervals.sit)
    }
}

/// Parse a duration string into seconds.
///
/// Accepts `h`/`m`/`s` suffixed segments in descending order ("1h30m",
/// "45m", "90s") and bare numbers, which are read as minutes. A zero
/// duration is valid and means the interval expires on its first tick.
pub fn parse_duration(value: &str) -> Result<u64, ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidDuration {
        value: value.to_string(),
        message: message.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty string"));
    }

    // Bare number: minutes.
    if let Ok(minutes) = trimmed.parse::<u64>() {
        return Ok(minutes * 60);
    }

    let mut total_secs: u64 = 0;
    let mut digits = String::new();
    let mut last_unit_secs = u64::MAX;
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let unit_secs = match ch {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid("expected digits with h/m/s suffixes")),
        };
        if digits.is_empty() {
            return Err(invalid("unit without a number"));
        }
        if unit_secs >= last_unit_secs {
            return Err(invalid("units must appear once, largest first"));
        }
        let amount: u64 = digits
            .parse()
            .map_err(|_| invalid("number out of range"))?;
        total_secs = total_secs.saturating_add(amount.saturating_mul(unit_secs));
        digits.clear();
        last_unit_secs = unit_secs;
    }
    if !digits.is_empty() {
        return Err(invalid("trailing number without a unit"));
    }
    Ok(total_secs)
}
