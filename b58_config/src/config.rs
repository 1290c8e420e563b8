use log::{Level as LogLevel};
use serde::Deserialize;

use super::format::DataFormat;
use super::ConfigError;

fn default_log_level() -> LogLevel { LogLevel::Warn }

const fn default_max_input_length() -> usize { 4096 }

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    // Properties auto-populated from the environment
    #[serde(skip)]
    pub config_path: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    // Use Base58Check when encoding and decoding
    #[serde(default)]
    pub checksum: bool,

    #[serde(default)]
    pub input_format: DataFormat,

    // Conversion time grows quadratically with input length
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            checksum: false,
            input_format: DataFormat::default(),
            max_input_length: default_max_input_length(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_length == 0 {
            return Err(ConfigError::InvalidValue("max_input_length must be positive"));
        };
        Ok(())
    }
}
