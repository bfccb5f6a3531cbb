use std::sync::Arc;

use api_data::model::{
    AnswerRequest,
    CreateNoteRequest,
    NoteResponse,
    NoteStats,
    UpdateNoteRequest,
};
use async_trait::async_trait;
use log::info;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::api::{ApiClient, ApiError};
use crate::data::{
    ArchivedNote,
    Note,
    NoteDraft,
    NoteId,
    QuizAnswer,
    ReviseOutcome,
    ReviveOutcome,
    Revision,
    RevisionSheet,
};
use crate::store::{NoteStore, StoreError};
use crate::util::{decay_to_whole_minutes, StrExt};

#[cfg(test)] mod tests;

/// The remote service owns the lifecycle: it archives expired notes on
/// fetch, grades revision answers, and applies penalties. Nothing is
/// cached here, every listing mirrors the canonical state anew.
pub struct RemoteNoteStore {
    api: Arc<ApiClient>,
}

impl RemoteNoteStore {
    pub fn new(api: Arc<ApiClient>) -> RemoteNoteStore {
        RemoteNoteStore { api }
    }

    /// Fetches the study sheet (summary plus questions) for an active
    /// note, generating it server-side when missing.
    pub async fn revision_sheet(
        &self,
        id: NoteId,
    ) -> Result<RevisionSheet, StoreError> {
        let response = self.api.ai_revision(id.0)
            .await
            .map_err(not_found_as_domain)?;
        Ok(
            RevisionSheet {
                summary: response.summary,
                questions: response.questions,
            }
        )
    }

    pub async fn stats(&self) -> Result<NoteStats, StoreError> {
        Ok(self.api.stats().await?.stats)
    }

    pub async fn update_note(
        &self,
        id: NoteId,
        update: UpdateNoteRequest,
    ) -> Result<Note, StoreError> {
        let response = self.api.update_note(id.0, &update)
            .await
            .map_err(not_found_as_domain)?;
        map_note(&response.note)
    }
}

#[async_trait]
impl NoteStore for RemoteNoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        self.api.get_notes()
            .await?
            .notes
            .iter()
            .map(map_note)
            .collect()
    }

    async fn list_archived(&self) -> Result<Vec<ArchivedNote>, StoreError> {
        self.api.get_archived_notes()
            .await?
            .archived_notes
            .iter()
            .map(map_archived_note)
            .collect()
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
        let request = CreateNoteRequest {
            title,
            content,
            decay_minutes: decay_to_whole_minutes(draft.decay),
        };
        let response = self.api.create_note(&request).await?;
        info!("created remote note {}", response.note.id);
        map_note(&response.note)
    }

    async fn revise_note(
        &self,
        id: NoteId,
        revision: Revision,
    ) -> Result<ReviseOutcome, StoreError> {
        let answer = revision.answer.ok_or(StoreError::AnswerRequired)?;
        let response = self.api
            .answer_revision_question(
                id.0,
                &AnswerRequest {
                    question_index: answer.question_index,
                    answer: answer.answer,
                },
            )
            .await
            .map_err(not_found_as_domain)?;
        // a wrong answer comes back as a regular response with the
        // penalty already applied by the service
        Ok(
            ReviseOutcome {
                note: response.note
                    .as_ref()
                    .map(map_note)
                    .transpose()?,
                correct: response.correct,
                message: response.message,
                feedback: response.feedback,
            }
        )
    }

    async fn revive_note(
        &self,
        id: NoteId,
        answer: Option<QuizAnswer>,
    ) -> Result<ReviveOutcome, StoreError> {
        let answer = answer.ok_or(StoreError::AnswerRequired)?;
        let response = self.api
            .revive_note(
                id.0,
                &AnswerRequest {
                    question_index: answer.question_index,
                    answer: answer.answer,
                },
            )
            .await
            .map_err(not_found_as_domain)?;
        Ok(
            ReviveOutcome {
                note: map_note(&response.note)?,
                message: response.message,
            }
        )
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), StoreError> {
        self.api.delete_note(id.0)
            .await
            .map_err(not_found_as_domain)?;
        info!("deleted remote note {id}");
        Ok(())
    }
}

fn not_found_as_domain(e: ApiError) -> StoreError {
    match e {
        ApiError::Server { status: 404, .. } => StoreError::NoteNotFound,
        e => e.into(),
    }
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, StoreError> {
    Ok(OffsetDateTime::parse(value, &Rfc3339)?)
}

fn map_note(response: &NoteResponse) -> Result<Note, StoreError> {
    let created_at = response.created_at
        .as_deref()
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    let revised_at = response.last_revised
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;
    let expires_at = match response.expires_at.as_deref() {
        Some(value) => parse_timestamp(value)?,
        // the service counts decay from the last revision
        None => revised_at.unwrap_or(created_at)
            + Duration::minutes(response.decay_minutes),
    };
    Ok(
        Note {
            id: NoteId(response.id),
            title: response.title.clone(),
            content: response.content.clone(),
            created_at,
            expires_at,
            revised_at,
        }
    )
}

fn map_archived_note(
    response: &NoteResponse,
) -> Result<ArchivedNote, StoreError> {
    let note = map_note(response)?;
    let archived_at = response.archived_at
        .as_deref()
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or(note.expires_at);
    Ok(ArchivedNote { note, archived_at })
}
