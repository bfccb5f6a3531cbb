use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::app_config::data::AppConfigData;

pub mod data;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Local,
    Remote,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub data_directory: PathBuf,
    pub backend: Backend,
    pub sweep_interval_secs: u64,
    pub default_decay_minutes: i64,
}

impl From<AppConfigData> for AppConfig {
    fn from(value: AppConfigData) -> Self {
        AppConfig {
            api_base_url: value.api_base_url,
            data_directory: value.data_directory,
            backend: value.backend,
            sweep_interval_secs: value.sweep_interval_secs,
            default_decay_minutes: value.default_decay_minutes,
        }
    }
}
