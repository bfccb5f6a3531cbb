use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::data::{ArchivedNote, Note, NoteId};
use crate::store::StoreError;

// the state entries hold unix-millisecond timestamps

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StoredNote {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub expires_at: i64,
    pub revised_at: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StoredArchivedNote {
    #[serde(flatten)]
    pub note: StoredNote,
    pub archived_at: i64,
}

pub fn timestamp_to_millis(timestamp: OffsetDateTime) -> i64 {
    (timestamp.unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn millis_to_timestamp(
    millis: i64,
) -> Result<OffsetDateTime, time::error::ComponentRange> {
    OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)
}

impl From<&Note> for StoredNote {
    fn from(note: &Note) -> Self {
        StoredNote {
            id: note.id.0,
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: timestamp_to_millis(note.created_at),
            expires_at: timestamp_to_millis(note.expires_at),
            revised_at: note.revised_at.map(timestamp_to_millis),
        }
    }
}

impl TryFrom<StoredNote> for Note {
    type Error = StoreError;

    fn try_from(stored: StoredNote) -> Result<Self, Self::Error> {
        Ok(
            Note {
                id: NoteId(stored.id),
                title: stored.title,
                content: stored.content,
                created_at: millis_to_timestamp(stored.created_at)?,
                expires_at: millis_to_timestamp(stored.expires_at)?,
                revised_at: stored.revised_at
                    .map(millis_to_timestamp)
                    .transpose()?,
            }
        )
    }
}

impl From<&ArchivedNote> for StoredArchivedNote {
    fn from(archived: &ArchivedNote) -> Self {
        StoredArchivedNote {
            note: (&archived.note).into(),
            archived_at: timestamp_to_millis(archived.archived_at),
        }
    }
}

impl TryFrom<StoredArchivedNote> for ArchivedNote {
    type Error = StoreError;

    fn try_from(stored: StoredArchivedNote) -> Result<Self, Self::Error> {
        Ok(
            ArchivedNote {
                archived_at: millis_to_timestamp(stored.archived_at)?,
                note: stored.note.try_into()?,
            }
        )
    }
}
