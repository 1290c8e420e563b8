use std::path::Path;

use super::config::Config;
use super::ConfigError;

struct EnvConfig {
    config_path: String,
}

const DEFAULT_CONFIG_PATH: &str = "b58.yaml";

fn parse_env() -> EnvConfig {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    let config_path = std::env::var("B58_CONFIG_PATH")
        .unwrap_or(DEFAULT_CONFIG_PATH.to_string());
    EnvConfig { config_path }
}

/// Parses YAML config, returns config and a list of warnings
pub fn parse_config_str(
    config_yaml: &str,
) -> Result<(Config, Vec<String>), ConfigError> {
    if config_yaml.trim().is_empty() {
        return Ok((Config::default(), vec![]));
    };
    let mut warnings = vec![];
    let deserializer = serde_yaml::Deserializer::from_str(config_yaml);
    let config: Config = serde_ignored::deserialize(deserializer, |path| {
        warnings.push(format!("unknown config parameter: {path}"));
    })?;
    config.validate()?;
    Ok((config, warnings))
}

/// Reads config file from `B58_CONFIG_PATH` (`b58.yaml` by default).
/// Missing file is not an error.
pub fn parse_config() -> Result<(Config, Vec<String>), ConfigError> {
    let env = parse_env();
    if !Path::new(&env.config_path).exists() {
        let warning = format!(
            "config file {} not found, using defaults",
            env.config_path,
        );
        return Ok((Config::default(), vec![warning]));
    };
    let config_yaml = std::fs::read_to_string(&env.config_path)?;
    let (mut config, warnings) = parse_config_str(&config_yaml)?;
    config.config_path = Some(env.config_path);
    Ok((config, warnings))
}
