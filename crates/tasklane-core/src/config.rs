//! TOML-based application configuration.
//!
//! Stores:
//! - Default business hours (and break windows) used when a command does not
//!   pass its own
//! - Output preferences
//!
//! Configuration is stored at `~/.config/tasklane/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, CoreError, Result};
use crate::model::BusinessHours;

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tasklane/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub business_hours: BusinessHours,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            business_hours: BusinessHours::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Returns `~/.config/tasklane[-dev]/` based on TASKLANE_ENV.
///
/// Set TASKLANE_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKLANE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tasklane-dev")
    } else {
        base_dir.join("tasklane")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirectoryUnavailable {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                current = current.get_mut(part).ok_or_else(unknown)?;
            }
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => serde_json::Value::Number(
                value
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                    .into(),
            ),
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default config if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        match Self::path().and_then(|p| Self::load_from(&p)) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::debug!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
        let cfg: Config = toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
        Ok(cfg)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// The business hours must still validate after the change; otherwise the
    /// config is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;

        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated
            .business_hours
            .validate()
            .map_err(|e| CoreError::Config(ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }))?;

        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_office_hours() {
        let cfg = Config::default();
        assert_eq!(cfg.business_hours.start, "09:00");
        assert_eq!(cfg.business_hours.end, "18:00");
        assert!(cfg.business_hours.breaks.is_empty());
        assert!(cfg.output.pretty);
    }

    #[test]
    fn test_get_by_dotted_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("business_hours.start").as_deref(), Some("09:00"));
        assert_eq!(cfg.get("output.pretty").as_deref(), Some("true"));
        assert_eq!(cfg.get("business_hours.breaks").as_deref(), Some("[]"));
        assert_eq!(cfg.get("nope"), None);
        assert_eq!(cfg.get(""), None);
    }

    #[test]
    fn test_set_by_dotted_key() {
        let mut cfg = Config::default();
        cfg.set("business_hours.end", "17:00").unwrap();
        cfg.set("output.pretty", "false").unwrap();
        cfg.set(
            "business_hours.breaks",
            r#"[{"start":"12:00","end":"13:00"}]"#,
        )
        .unwrap();

        assert_eq!(cfg.business_hours.end, "17:00");
        assert!(!cfg.output.pretty);
        assert_eq!(cfg.business_hours.breaks.len(), 1);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("business_hours.lunch", "12:00").unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
        assert!(cfg.set("", "x").is_err());
    }

    #[test]
    fn test_set_rejects_invalid_hours_and_keeps_config() {
        let mut cfg = Config::default();
        assert!(cfg.set("business_hours.end", "08:00").is_err());
        assert!(cfg.set("business_hours.start", "9am").is_err());
        assert!(cfg.set("output.pretty", "maybe").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_roundtrips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.business_hours = BusinessHours::new("08:00", "16:00").with_break("12:00", "12:30");
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\npretty = false\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.output.pretty);
        assert_eq!(loaded.business_hours, BusinessHours::default());
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "business_hours = 12").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::LoadFailed { .. })));
    }
}
