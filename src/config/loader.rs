// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Config file loading with environment variable interpolation.

use super::env_interpolation;
use super::types::ServerConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] env_interpolation::InterpolationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Interpolate environment variables in `s`, then deserialize it as YAML.
pub fn from_yaml_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_yaml::from_str(&interpolated)?)
}

/// Interpolate environment variables in `s`, then deserialize it as JSON.
pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_json::from_str(&interpolated)?)
}

/// Load and validate a [`ServerConfig`] from a YAML or JSON file.
///
/// The file is interpolated first, then parsed as YAML with JSON as the
/// fallback. An empty file yields the defaults.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    let interpolated = env_interpolation::interpolate(&content)?;

    let config = if interpolated.trim().is_empty() {
        ServerConfig::default()
    } else {
        match serde_yaml::from_str::<ServerConfig>(&interpolated) {
            Ok(config) => config,
            Err(yaml_err) => match serde_json::from_str::<ServerConfig>(&interpolated) {
                Ok(config) => config,
                Err(json_err) => {
                    return Err(ConfigError::ParseError {
                        path: path_ref.display().to_string(),
                        yaml_err: yaml_err.to_string(),
                        json_err: json_err.to_string(),
                    });
                }
            },
        }
    };

    config.validate()?;

    Ok(config)
}

/// Write `config` to `path` as YAML, creating parent directories as needed.
///
/// Interpolated values are written out as-is; `${...}` references are not preserved.
pub fn save_config_file<P: AsRef<Path>>(config: &ServerConfig, path: P) -> Result<(), ConfigError> {
    let path_ref = path.as_ref();
    if let Some(parent) = path_ref.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_yaml::to_string(config)?;
    Ok(fs::write(path_ref, content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(content: &str) -> NamedTempFile {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), content).unwrap();
        temp_file
    }

    #[test]
    #[serial]
    fn test_from_yaml_str_interpolates() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct TestConfig {
            name: String,
            value: i32,
        }

        env::set_var("WIDGET_LOADER_NAME", "test");
        env::set_var("WIDGET_LOADER_VALUE", "42");

        let config: TestConfig =
            from_yaml_str("name: ${WIDGET_LOADER_NAME}\nvalue: ${WIDGET_LOADER_VALUE}\n").unwrap();

        assert_eq!(
            config,
            TestConfig {
                name: "test".to_string(),
                value: 42
            }
        );
    }

    #[test]
    #[serial]
    fn test_from_json_str_interpolates() {
        env::set_var("WIDGET_LOADER_HOST", "10.0.0.1");

        let config: ServerConfig = from_json_str(r#"{"host": "${WIDGET_LOADER_HOST}"}"#).unwrap();

        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    #[serial]
    fn test_load_yaml_with_env_vars() {
        env::set_var("WIDGET_LOADER_PORT", "9100");
        env::remove_var("WIDGET_LOADER_LEVEL");

        let temp_file = write_temp(
            "host: 0.0.0.0\nport: ${WIDGET_LOADER_PORT}\nlogLevel: ${WIDGET_LOADER_LEVEL:-debug}\n",
        );

        let config = load_config_file(temp_file.path()).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert_eq!(config.log_level, "debug");
        assert!(config.seed_data);
    }

    #[test]
    fn test_load_json_file() {
        let temp_file = write_temp(r#"{"port": 9200, "seedData": false}"#);

        let config = load_config_file(temp_file.path()).unwrap();

        assert_eq!(config.port, 9200);
        assert!(!config.seed_data);
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let temp_file = write_temp("");
        assert_eq!(
            load_config_file(temp_file.path()).unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    #[serial]
    fn test_load_missing_required_var() {
        env::remove_var("WIDGET_LOADER_REQUIRED");

        let temp_file = write_temp("host: ${WIDGET_LOADER_REQUIRED}\n");

        assert!(matches!(
            load_config_file(temp_file.path()),
            Err(ConfigError::InterpolationError(_))
        ));
    }

    #[test]
    fn test_load_unparseable_file() {
        let temp_file = write_temp("host: [unterminated\n");

        assert!(matches!(
            load_config_file(temp_file.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_invalid_values() {
        let temp_file = write_temp("port: 0\n");

        assert!(matches!(
            load_config_file(temp_file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();

        assert!(matches!(
            load_config_file(dir.path().join("absent.yaml")),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_save_and_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("server.yaml");

        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 9090,
            log_level: "warn".to_string(),
            seed_data: false,
        };
        save_config_file(&config, &path).unwrap();

        assert_eq!(load_config_file(&path).unwrap(), config);
    }
}
