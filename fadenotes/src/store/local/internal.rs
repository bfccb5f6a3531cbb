use std::mem::ManuallyDrop;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use log::{error, info, trace};
use time::{Duration, OffsetDateTime};
use tokio::spawn;
use tokio::sync::{oneshot, RwLock};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::config::app_config::AppConfig;
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
use crate::lib_constants::REVIVE_EXTENSION_MINUTES;
use crate::store::{NoteStore, StoreError};
use crate::store::local::internal::data::{
    timestamp_to_millis,
    StoredArchivedNote,
    StoredNote,
};
use crate::store::local::internal::io_trait::{
    LocalStoreIo,
    ProductionLocalStoreIo,
};
use crate::util::StrExt;

mod data;
mod io_trait;

pub type LocalNoteStore = LocalNoteStoreImpl<ProductionLocalStoreIo>;

#[allow(private_bounds)]
pub struct LocalNoteStoreImpl<Io: LocalStoreIo> {
    io: Arc<Io>,
    state: Arc<RwLock<State>>,
    die_notice: ManuallyDrop<oneshot::Sender<()>>,
}

impl<Io: LocalStoreIo> Drop for LocalNoteStoreImpl<Io> {
    fn drop(&mut self) {
        trace!("local note store dropped");
        let _ = unsafe { ManuallyDrop::take(&mut self.die_notice) }
            .send(());
    }
}

#[derive(Debug, Default)]
struct State {
    notes: Vec<Note>,
    archived: Vec<ArchivedNote>,
}

impl State {
    fn is_id_taken(&self, id: NoteId) -> bool {
        self.notes.iter().any(|n| n.id == id)
            || self.archived.iter().any(|a| a.note.id == id)
    }

    // a note stays active up to and including its expiry instant
    fn sweep(&mut self, now: OffsetDateTime) -> usize {
        let mut kept = Vec::with_capacity(self.notes.len());
        let mut moved = 0;
        for note in self.notes.drain(..) {
            if note.is_expired(now) {
                self.archived.push(
                    ArchivedNote {
                        note,
                        archived_at: now,
                    }
                );
                moved += 1;
            } else {
                kept.push(note);
            }
        }
        self.notes = kept;
        moved
    }
}

impl LocalNoteStore {
    pub async fn new(
        config: &AppConfig,
    ) -> Result<LocalNoteStore, StoreError> {
        Self::new_internal(
            ProductionLocalStoreIo::new(&config.data_directory),
            StdDuration::from_secs(config.sweep_interval_secs),
        ).await
    }
}

#[allow(private_bounds)]
impl<Io: LocalStoreIo> LocalNoteStoreImpl<Io> {
    async fn new_internal(
        io: Io,
        sweep_interval: StdDuration,
    ) -> Result<LocalNoteStoreImpl<Io>, StoreError> {
        let io = Arc::new(io);
        let mut state = State {
            notes: io.read_notes()
                .await?
                .into_iter()
                .map(Note::try_from)
                .collect::<Result<_, _>>()?,
            archived: io.read_archive()
                .await?
                .into_iter()
                .map(ArchivedNote::try_from)
                .collect::<Result<_, _>>()?,
        };

        // catch up on anything that decayed while the app was closed
        let moved = state.sweep(io.now());
        if moved > 0 {
            info!("archived {moved} notes that expired while offline");
            Self::save(&io, &state).await?;
        }

        let state = Arc::new(RwLock::new(state));
        let (die_notice, die_receiver) = oneshot::channel();
        spawn(
            Self::run_sweeper(
                state.clone(),
                io.clone(),
                sweep_interval,
                die_receiver,
            )
        );
        Ok(
            LocalNoteStoreImpl {
                io,
                state,
                die_notice: ManuallyDrop::new(die_notice),
            }
        )
    }

    async fn run_sweeper(
        state: Arc<RwLock<State>>,
        io: Arc<Io>,
        sweep_interval: StdDuration,
        mut die_notice: oneshot::Receiver<()>,
    ) {
        trace!("sweeper started");
        // first tick one full interval in, startup is covered by the
        // catch-up sweep in the constructor
        let mut ticker = interval_at(
            Instant::now() + sweep_interval,
            sweep_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;
                _ = &mut die_notice => break,
                _ = ticker.tick() => {
                    let mut state = state.write().await;
                    let moved = state.sweep(io.now());
                    if moved > 0 {
                        info!("archived {moved} expired notes");
                        if let Err(e) = Self::save(&io, &state).await {
                            error!(
                                "failed to save note state after sweep: {e}"
                            );
                        }
                    }
                },
            }
        }
        trace!("sweeper stopped");
    }

    /// Archives everything already past its expiry and reports how many
    /// notes moved.
    pub async fn sweep_once(&self) -> Result<usize, StoreError> {
        let mut state = self.state.write().await;
        let moved = state.sweep(self.io.now());
        if moved > 0 {
            Self::save(&self.io, &state).await?;
        }
        Ok(moved)
    }

    async fn save(io: &Io, state: &State) -> Result<(), StoreError> {
        let notes: Vec<StoredNote> =
            state.notes.iter().map(Into::into).collect();
        let archived: Vec<StoredArchivedNote> =
            state.archived.iter().map(Into::into).collect();
        io.write_notes(&notes).await?;
        io.write_archive(&archived).await?;
        Ok(())
    }

    fn next_id(state: &State, now: OffsetDateTime) -> NoteId {
        let mut id = NoteId(timestamp_to_millis(now));
        while state.is_id_taken(id) {
            id.0 += 1;
        }
        id
    }
}

#[allow(private_bounds)]
#[async_trait]
impl<Io: LocalStoreIo> NoteStore for LocalNoteStoreImpl<Io> {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.state.read().await.notes.clone())
    }

    async fn list_archived(&self) -> Result<Vec<ArchivedNote>, StoreError> {
        Ok(self.state.read().await.archived.clone())
    }

    async fn create_note(
        &self,
        draft: NoteDraft,
    ) -> Result<Note, StoreError> {
        let title = draft.title.nonblank_to_some()
            .ok_or(StoreError::MissingField("title"))?;
        let content = draft.content.nonblank_to_some()
            .ok_or(StoreError::MissingField("content"))?;
        if draft.decay <= Duration::ZERO {
            return Err(StoreError::InvalidDecay);
        }
        let mut state = self.state.write().await;
        let now = self.io.now();
        let id = Self::next_id(&state, now);
        let note = Note {
            id,
            title,
            content,
            created_at: now,
            expires_at: now + draft.decay,
            revised_at: None,
        };
        info!("creating note {id}, expires at {}", note.expires_at);
        state.notes.push(note.clone());
        Self::save(&self.io, &state).await?;
        Ok(note)
    }

    async fn revise_note(
        &self,
        id: NoteId,
        revision: Revision,
    ) -> Result<ReviseOutcome, StoreError> {
        if revision.extension <= Duration::ZERO {
            return Err(StoreError::InvalidDecay);
        }
        let mut state = self.state.write().await;
        let now = self.io.now();
        let note = state.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NoteNotFound)?;
        note.expires_at = now + revision.extension;
        note.revised_at = Some(now);
        let note = note.clone();
        info!("revised note {id}, now expires at {}", note.expires_at);
        Self::save(&self.io, &state).await?;
        Ok(
            ReviseOutcome {
                message: format!(
                    "note extended by {} minutes",
                    revision.extension.whole_minutes(),
                ),
                note: Some(note),
                correct: true,
                feedback: None,
            }
        )
    }

    async fn revive_note(
        &self,
        id: NoteId,
        _answer: Option<QuizAnswer>,
    ) -> Result<ReviveOutcome, StoreError> {
        let mut state = self.state.write().await;
        let now = self.io.now();
        let position = state.archived
            .iter()
            .position(|a| a.note.id == id)
            .ok_or(StoreError::NoteNotFound)?;
        let mut note = state.archived.remove(position).note;
        note.expires_at = now + Duration::minutes(REVIVE_EXTENSION_MINUTES);
        state.notes.push(note.clone());
        info!("revived note {id}, expires at {}", note.expires_at);
        Self::save(&self.io, &state).await?;
        Ok(
            ReviveOutcome {
                note,
                message: "note revived".to_owned(),
            }
        )
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if let Some(position) =
            state.notes.iter().position(|n| n.id == id)
        {
            state.notes.remove(position);
        } else if let Some(position) =
            state.archived.iter().position(|a| a.note.id == id)
        {
            state.archived.remove(position);
        } else {
            return Err(StoreError::NoteNotFound);
        }
        info!("deleted note {id}");
        Self::save(&self.io, &state).await
    }
}
