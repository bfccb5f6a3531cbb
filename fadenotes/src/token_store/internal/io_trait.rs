use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, trace};
use tokio::fs;
use tokio::io::ErrorKind;

use crate::lib_constants::TOKEN_STATE_FILE;
use crate::token_store::TokenStoreError;
use crate::token_store::internal::data::TokenData;

#[async_trait]
pub trait TokenStoreIo: Send + Sync + 'static {
    async fn read_token_file(&self) -> Result<TokenData, TokenStoreError>;

    async fn write_token_file(
        &self,
        data: &TokenData,
    ) -> Result<(), TokenStoreError>;
}

pub struct ProductionTokenStoreIo {
    token_file_path: PathBuf,
}

impl ProductionTokenStoreIo {
    pub fn new(data_directory: &Path) -> Self {
        ProductionTokenStoreIo {
            token_file_path: data_directory.join(TOKEN_STATE_FILE),
        }
    }
}

#[async_trait]
impl TokenStoreIo for ProductionTokenStoreIo {
    async fn read_token_file(&self) -> Result<TokenData, TokenStoreError> {
        trace!(
            "reading token file at \"{}\"",
            self.token_file_path.display(),
        );
        let contents = match fs::read_to_string(&self.token_file_path).await {
            Ok(contents) => contents,
            // a missing file just means nobody logged in yet
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "no token file at \"{}\"",
                    self.token_file_path.display(),
                );
                return Ok(TokenData::default());
            },
            Err(e) => return Err(e.into()),
        };
        Ok(toml::de::from_str(&contents)?)
    }

    async fn write_token_file(
        &self,
        data: &TokenData,
    ) -> Result<(), TokenStoreError> {
        trace!(
            "writing token file at \"{}\"",
            self.token_file_path.display(),
        );
        let serialized = toml::to_string(data)?;
        fs::write(&self.token_file_path, serialized).await?;
        Ok(())
    }
}
