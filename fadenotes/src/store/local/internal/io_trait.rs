use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, trace};
use time::OffsetDateTime;
use tokio::fs;
use tokio::io::ErrorKind;

use crate::lib_constants::{ARCHIVE_STATE_FILE, NOTES_STATE_FILE};
use crate::store::StoreError;
use crate::store::local::internal::data::{StoredArchivedNote, StoredNote};

#[async_trait]
pub trait LocalStoreIo: Send + Sync + 'static {
    async fn read_notes(&self) -> Result<Vec<StoredNote>, StoreError>;

    async fn write_notes(
        &self,
        notes: &[StoredNote],
    ) -> Result<(), StoreError>;

    async fn read_archive(
        &self,
    ) -> Result<Vec<StoredArchivedNote>, StoreError>;

    async fn write_archive(
        &self,
        notes: &[StoredArchivedNote],
    ) -> Result<(), StoreError>;

    fn now(&self) -> OffsetDateTime;
}

pub struct ProductionLocalStoreIo {
    notes_path: PathBuf,
    archive_path: PathBuf,
}

impl ProductionLocalStoreIo {
    pub fn new(data_directory: &Path) -> Self {
        ProductionLocalStoreIo {
            notes_path: data_directory.join(NOTES_STATE_FILE),
            archive_path: data_directory.join(ARCHIVE_STATE_FILE),
        }
    }

    async fn read_entry<T: serde::de::DeserializeOwned>(
        path: &Path,
    ) -> Result<Vec<T>, StoreError> {
        trace!("reading note state at \"{}\"", path.display());
        let contents = match fs::read(path).await {
            Ok(contents) => contents,
            // nothing was saved yet
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no state entry at \"{}\"", path.display());
                return Ok(Vec::new());
            },
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&contents)?)
    }

    async fn write_entry<T: serde::Serialize>(
        path: &Path,
        values: &[T],
    ) -> Result<(), StoreError> {
        trace!("writing note state at \"{}\"", path.display());
        let serialized = serde_json::to_vec(values)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized).await?;
        if let Err(e) = fs::rename(&tmp_path, path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl LocalStoreIo for ProductionLocalStoreIo {
    async fn read_notes(&self) -> Result<Vec<StoredNote>, StoreError> {
        Self::read_entry(&self.notes_path).await
    }

    async fn write_notes(
        &self,
        notes: &[StoredNote],
    ) -> Result<(), StoreError> {
        Self::write_entry(&self.notes_path, notes).await
    }

    async fn read_archive(
        &self,
    ) -> Result<Vec<StoredArchivedNote>, StoreError> {
        Self::read_entry(&self.archive_path).await
    }

    async fn write_archive(
        &self,
        notes: &[StoredArchivedNote],
    ) -> Result<(), StoreError> {
        Self::write_entry(&self.archive_path, notes).await
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
