use crate::model::*;

// payload shapes as the backend actually sends them

#[test]
fn parse_note_list() {
    let body = r#"{
        "notes": [
            {
                "id": 7,
                "title": "ownership rules",
                "content": "moves, borrows, lifetimes",
                "status": "active",
                "created_at": "2025-11-14T10:00:00Z",
                "last_revised": "2025-11-14T10:30:00Z",
                "archived_at": null,
                "expires_at": "2025-11-15T10:30:00Z",
                "decay_minutes": 1440,
                "original_decay_minutes": 1440,
                "wrong_answers_count": 0,
                "penalty_applied": false,
                "ai_summary": null,
                "ai_questions": null
            }
        ]
    }"#;
    let parsed: NoteListResponse = serde_json::from_str(body)
        .expect("note list should parse");
    assert_eq!(parsed.notes.len(), 1);
    let note = &parsed.notes[0];
    assert_eq!(note.id, 7);
    assert_eq!(note.status, NoteStatus::Active);
    assert_eq!(note.decay_minutes, 1440);
    assert_eq!(note.archived_at, None);
}

#[test]
fn parse_incorrect_answer() {
    let body = r#"{
        "correct": false,
        "message": "Incorrect answer. Decay time reduced to 1260 minutes.",
        "penalty_info": {"new_decay_minutes": 1260, "wrong_answers_count": 1},
        "note": null,
        "feedback": "Study this note more carefully before the next revision!"
    }"#;
    let parsed: AnswerResponse = serde_json::from_str(body)
        .expect("answer response should parse");
    assert!(!parsed.correct);
    assert_eq!(
        parsed.penalty_info.expect("penalty info").new_decay_minutes,
        1260,
    );
    assert!(parsed.feedback.is_some());
}

#[test]
fn parse_error_body() {
    let parsed: ErrorResponse =
        serde_json::from_str(r#"{"error": "Note not found"}"#)
            .expect("error body should parse");
    assert_eq!(parsed.error, "Note not found");
}

#[test]
fn update_request_skips_unset_fields() {
    let body = serde_json::to_string(
        &UpdateNoteRequest {
            content: Some("new contents".into()),
            ..UpdateNoteRequest::default()
        }
    ).expect("serialization failed");
    assert_eq!(body, r#"{"content":"new contents"}"#);
}
