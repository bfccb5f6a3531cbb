use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::app_config::Backend;
use crate::lib_constants::{
    DEFAULT_API_BASE_URL,
    DEFAULT_DATA_DIR,
    DEFAULT_DECAY_MINUTES,
    DEFAULT_SWEEP_INTERVAL_SECS,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppConfigData {
    pub api_base_url: String,
    pub data_directory: PathBuf,
    pub backend: Backend,
    pub sweep_interval_secs: u64,
    pub default_decay_minutes: i64,
}

impl Default for AppConfigData {
    fn default() -> Self {
        AppConfigData {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            data_directory: PathBuf::from(DEFAULT_DATA_DIR),
            backend: Backend::Local,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            default_decay_minutes: DEFAULT_DECAY_MINUTES,
        }
    }
}
