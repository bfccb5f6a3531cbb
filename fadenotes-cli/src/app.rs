use std::path::PathBuf;
use std::sync::Arc;

use fadenotes::api::ApiClient;
use fadenotes::config::app_config::{AppConfig, Backend};
use fadenotes::config::read::read_app_config;
use fadenotes::error_exit;
use fadenotes::store::NoteStore;
use fadenotes::store::local::LocalNoteStore;
use fadenotes::store::remote::RemoteNoteStore;
use fadenotes::token_store::{ProductionTokenStore, TokenStore};

pub struct App {
    pub config: AppConfig,
    pub tokens: Arc<ProductionTokenStore>,
}

impl App {
    pub async fn init(config_file: Option<PathBuf>) -> App {
        if let Some(path) = &config_file {
            if !path.exists() {
                error_exit!(
                    "configuration file at {} does not exist",
                    path.display(),
                );
            }
        }
        let config = read_app_config(config_file.as_deref())
            .unwrap_or_else(|e| {
                error_exit!("finishing due to a configuration error: {e}");
            });
        let tokens = ProductionTokenStore::new(&config.data_directory)
            .await
            .unwrap_or_else(|e| {
                error_exit!("could not open the token store: {e}");
            });
        App {
            config,
            tokens: Arc::new(tokens),
        }
    }

    pub fn api_client(&self) -> Arc<ApiClient> {
        let tokens: Arc<dyn TokenStore> = self.tokens.clone();
        Arc::new(ApiClient::new(self.config.api_base_url.clone(), tokens))
    }

    // the backing implementation is picked here and nowhere else
    pub async fn note_store(&self) -> Box<dyn NoteStore> {
        match self.config.backend {
            Backend::Local => Box::new(self.local_note_store().await),
            Backend::Remote => {
                Box::new(RemoteNoteStore::new(self.api_client()))
            },
        }
    }

    pub async fn local_note_store(&self) -> LocalNoteStore {
        LocalNoteStore::new(&self.config)
            .await
            .unwrap_or_else(|e| {
                error_exit!("could not open the note store: {e}");
            })
    }
}
