use thiserror::Error;
use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid token file contents: {0}")]
    Parsing(#[from] toml::de::Error),

    #[error("serializing the tokens failed: {0}")]
    Serialization(#[from] toml::ser::Error),
}
