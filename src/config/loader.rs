//! Configuration loader layering command-line overrides over built-in defaults

use super::{default_base_url, default_log_level, default_model, default_timeout, Config, LogFormat};
use crate::error::Result;

/// Values supplied on the command line; `None` keeps the default
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

/// Resolve the final configuration. Only defaults and overrides are consulted;
/// there is no file or environment source.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let config = config::Config::builder()
        .set_default("embedding.base_url", default_base_url())?
        .set_default("embedding.model", default_model())?
        .set_default("embedding.timeout_secs", default_timeout() as i64)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", LogFormat::default().as_str())?
        .set_override_option("embedding.base_url", overrides.base_url.clone())?
        .set_override_option("embedding.model", overrides.model.clone())?
        .set_override_option("embedding.timeout_secs", overrides.timeout_secs.map(|t| t as i64))?
        .set_override_option("logging.level", overrides.log_level.clone())?
        .set_override_option("logging.format", overrides.log_format.map(|f| f.as_str()))?
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    Ok(cfg)
}
