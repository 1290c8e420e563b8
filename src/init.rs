use log::Level;

use b58_config::{
    parse_config,
    Config,
    ConfigError,
    SOFTWARE_NAME,
    SOFTWARE_VERSION,
};

use crate::logger::configure_logger;

pub fn initialize_app(
    override_log_level: Option<Level>,
) -> Result<Config, ConfigError> {
    let (config, config_warnings) = parse_config()?;
    let log_level = override_log_level.unwrap_or(config.log_level);
    configure_logger(log_level);
    log::info!("{} v{}", SOFTWARE_NAME, SOFTWARE_VERSION);
    if let Some(ref config_path) = config.config_path {
        log::info!("config loaded from {}", config_path);
    };
    for warning in config_warnings {
        log::warn!("{}", warning);
    };
    Ok(config)
}
