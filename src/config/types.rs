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

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Log levels accepted in `logLevel`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Settings read from the server config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Populate the stores with the two sample widgets and doodads at startup.
    #[serde(default = "default_seed_data")]
    pub seed_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            seed_data: default_seed_data(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_data() -> bool {
    true
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("Invalid port: {} (cannot be 0)", self.port));
        }

        if self.host.trim().is_empty() {
            return Err(anyhow!("Host cannot be empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow!(
                "Invalid logLevel '{}': expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }

    /// The `host:port` string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "info");
        assert!(config.seed_data);
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ServerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let config: ServerConfig =
            serde_yaml::from_str("logLevel: debug\nseedData: false\n").unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(!config.seed_data);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = serde_yaml::from_str::<ServerConfig>("log_level: debug\n");
        assert!(result.is_err());
    }

    #[test_case(ServerConfig { port: 0, ..Default::default() }, "port" ; "zero port")]
    #[test_case(ServerConfig { host: " ".to_string(), ..Default::default() }, "Host" ; "blank host")]
    #[test_case(ServerConfig { log_level: "verbose".to_string(), ..Default::default() }, "logLevel" ; "unknown log level")]
    fn test_validate_rejects(config: ServerConfig, needle: &str) {
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(needle), "{err}");
    }
}
