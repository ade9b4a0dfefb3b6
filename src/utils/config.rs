use crate::core::BuildingPoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Service-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interface to bind the HTTP listener on
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Logging verbosity
    pub log_level: LogLevel,
    /// Building point applied when an anchor is set without one
    pub default_building: BuildingPoint,
}

/// Logging levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: LogLevel::Info,
            default_building: BuildingPoint::default(),
        }
    }
}

impl ServiceConfig {
    /// Load and validate configuration from a JSON file.
    /// Missing keys take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path_str,
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST` / `PORT` from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply host/port overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidParameter {
                parameter: "port".to_string(),
                value: port.clone(),
                reason: "must be an integer between 1 and 65535".to_string(),
            })?;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "host".to_string(),
                value: self.host.clone(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "port".to_string(),
                value: self.port.to_string(),
                reason: "must be between 1 and 65535".to_string(),
            });
        }

        let building = self.default_building;
        if !building.x.is_finite() || !building.z.is_finite() {
            return Err(ConfigError::InvalidParameter {
                parameter: "default_building".to_string(),
                value: format!("({}, {})", building.x, building.z),
                reason: "coordinates must be finite".to_string(),
            });
        }

        Ok(())
    }

    /// `host:port` string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("facility_directory_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_service_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.default_building, BuildingPoint::new(50.0, 44.0));
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config_file() {
        let path = temp_config_path("partial");
        fs::write(&path, r#"{"port": 9100, "log_level": "debug"}"#).unwrap();

        let config = ServiceConfig::from_file(&path).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.host, "0.0.0.0");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_invalid_config_file_rejected() {
        let path = temp_config_path("invalid");
        fs::write(&path, r#"{"port": 0}"#).unwrap();

        assert!(matches!(
            ServiceConfig::from_file(&path),
            Err(ConfigError::InvalidParameter { .. })
        ));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_malformed_config_file() {
        let path = temp_config_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(ServiceConfig::from_file(&path), Err(ConfigError::Parse { .. })));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            ServiceConfig::from_file("/nonexistent/facility.json"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_host_port_overrides() {
        let env: HashMap<&str, &str> = [("HOST", "127.0.0.1"), ("PORT", "8080")].into_iter().collect();
        let mut config = ServiceConfig::default();

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bad_port_override() {
        let mut config = ServiceConfig::default();
        let result = config.apply_overrides(|key| (key == "PORT").then(|| "http".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidParameter { .. })));
        assert_eq!(config.port, 8000);
    }
}
