use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use time::{Duration, OffsetDateTime};

/// Unique across the union of the active and archived collections.
/// Locally created notes use their creation time in unix milliseconds,
/// bumped until free; the remote service assigns its own ids.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NoteId(s.parse()?))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub expires_at: OffsetDateTime,
    pub revised_at: Option<OffsetDateTime>,
}

impl Note {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now > self.expires_at
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArchivedNote {
    pub note: Note,
    pub archived_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub decay: Duration,
}

#[derive(Clone, Debug)]
pub struct QuizAnswer {
    pub question_index: usize,
    pub answer: String,
}

/// What a revision carries: the lifetime extension applied by the local
/// backend, and the answer the remote backend grades.
#[derive(Clone, Debug)]
pub struct Revision {
    pub extension: Duration,
    pub answer: Option<QuizAnswer>,
}

#[derive(Clone, Debug)]
pub struct ReviseOutcome {
    pub note: Option<Note>,
    pub correct: bool,
    pub message: String,
    pub feedback: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ReviveOutcome {
    pub note: Note,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct RevisionSheet {
    pub summary: String,
    pub questions: Vec<String>,
}
