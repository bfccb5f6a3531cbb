mod errors;
pub mod local;
pub mod remote;

use async_trait::async_trait;

pub use errors::*;

use crate::data::{
    ArchivedNote,
    Note,
    NoteDraft,
    NoteId,
    QuizAnswer,
    ReviseOutcome,
    ReviveOutcome,
    Revision,
};

/// The note lifecycle manager. Two backings exist: locally persisted
/// collections with a periodic expiry sweep ([`local::LocalNoteStore`]),
/// and the remote service as the source of truth
/// ([`remote::RemoteNoteStore`]). Which one backs the client is decided
/// where the application is assembled.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError>;

    async fn list_archived(&self) -> Result<Vec<ArchivedNote>, StoreError>;

    async fn create_note(&self, draft: NoteDraft) -> Result<Note, StoreError>;

    async fn revise_note(
        &self,
        id: NoteId,
        revision: Revision,
    ) -> Result<ReviseOutcome, StoreError>;

    async fn revive_note(
        &self,
        id: NoteId,
        answer: Option<QuizAnswer>,
    ) -> Result<ReviveOutcome, StoreError>;

    async fn delete_note(&self, id: NoteId) -> Result<(), StoreError>;
}
