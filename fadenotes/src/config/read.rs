use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use thiserror::Error;

use crate::config::app_config::AppConfig;
use crate::config::app_config::data::AppConfigData;
use crate::lib_constants::{APP_CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILE};

/// An explicitly given config file must exist; the default location is
/// merged only when present.
pub fn read_app_config(
    config_file: Option<&Path>,
) -> Result<AppConfig, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(AppConfigData::default()));
    let figment = match config_file {
        Some(path) => figment.merge(Toml::file_exact(path)),
        None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    };
    let data: AppConfigData = figment
        .merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
        .extract()?;
    Ok(data.into())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}
