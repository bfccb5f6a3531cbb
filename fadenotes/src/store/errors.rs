use thiserror::Error;
use tokio::io::Error as IoError;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("decay time must be positive")]
    InvalidDecay,

    #[error("note not found")]
    NoteNotFound,

    #[error("an answer is required")]
    AnswerRequired,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid note state file contents: {0}")]
    Parsing(#[from] serde_json::Error),

    #[error("cannot interpret timestamp")]
    Timestamp(#[from] time::error::ComponentRange),

    #[error("cannot parse server timestamp: {0}")]
    TimestampParse(#[from] time::error::Parse),

    #[error(transparent)]
    Api(#[from] ApiError),
}
