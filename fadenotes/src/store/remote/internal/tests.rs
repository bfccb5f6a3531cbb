use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::token_store::{TokenStore, TokenStoreError};

// no session needed, the wire behavior under test is token-independent
struct NoTokens;

#[async_trait]
impl TokenStore for NoTokens {
    async fn set_tokens(
        &self,
        _access_token: &str,
        _refresh_token: &str,
    ) -> Result<(), TokenStoreError> {
        Ok(())
    }

    async fn set_access_token(
        &self,
        _access_token: &str,
    ) -> Result<(), TokenStoreError> {
        Ok(())
    }

    async fn clear_tokens(&self) -> Result<(), TokenStoreError> {
        Ok(())
    }

    async fn access_token(&self) -> Option<String> {
        None
    }

    async fn refresh_token(&self) -> Option<String> {
        None
    }
}

fn make_store(server: &MockServer) -> RemoteNoteStore {
    RemoteNoteStore::new(
        Arc::new(ApiClient::new(server.uri(), Arc::new(NoTokens)))
    )
}

fn note_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
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
        "ai_questions": null,
    })
}

fn parse(value: &str) -> OffsetDateTime {
    OffsetDateTime::parse(value, &Rfc3339).expect("bad test timestamp")
}

fn answer(text: &str) -> Option<QuizAnswer> {
    Some(
        QuizAnswer {
            question_index: 0,
            answer: text.to_owned(),
        }
    )
}

fn revision_with_answer(text: &str) -> Revision {
    Revision {
        extension: Duration::minutes(30),
        answer: answer(text),
    }
}

#[tokio::test]
async fn lists_and_maps_remote_notes() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    Mock::given(method("GET"))
        .and(path("/notes/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"notes": [note_json(7)]}))
        )
        .mount(&server)
        .await;

    let notes = store.list_notes().await.expect("listing failed");
    assert_eq!(notes.len(), 1);
    let note = &notes[0];
    assert_eq!(note.id, NoteId(7));
    assert_eq!(note.title, "ownership rules");
    assert_eq!(note.expires_at, parse("2025-11-15T10:30:00Z"));
    assert_eq!(note.revised_at, Some(parse("2025-11-14T10:30:00Z")));
}

#[tokio::test]
async fn missing_expiry_computed_from_last_revision() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    let mut note = note_json(7);
    note["expires_at"] = json!(null);
    note["decay_minutes"] = json!(60);
    Mock::given(method("GET"))
        .and(path("/notes/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"notes": [note]}))
        )
        .mount(&server)
        .await;

    let notes = store.list_notes().await.expect("listing failed");
    assert_eq!(notes[0].expires_at, parse("2025-11-14T11:30:00Z"));
}

#[tokio::test]
async fn archived_listing_maps_archive_timestamp() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    let mut note = note_json(9);
    note["status"] = json!("archived");
    note["archived_at"] = json!("2025-11-16T00:00:00Z");
    Mock::given(method("GET"))
        .and(path("/notes/archived"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"archived_notes": [note]}))
        )
        .mount(&server)
        .await;

    let archived = store.list_archived().await.expect("listing failed");
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].note.id, NoteId(9));
    assert_eq!(archived[0].archived_at, parse("2025-11-16T00:00:00Z"));
}

#[tokio::test]
async fn create_note_sends_whole_minutes() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    Mock::given(method("POST"))
        .and(path("/notes/"))
        .and(body_json(json!({
            "title": "ownership rules",
            "content": "moves, borrows, lifetimes",
            "decay_minutes": 2,
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({
                "message": "Note created successfully",
                "note": note_json(7),
            }))
        )
        .expect(1)
        .mount(&server)
        .await;

    let note = store
        .create_note(
            NoteDraft {
                title: "ownership rules".into(),
                content: "moves, borrows, lifetimes".into(),
                decay: Duration::seconds(90),
            }
        )
        .await
        .expect("create failed");
    assert_eq!(note.id, NoteId(7));
}

#[tokio::test]
async fn create_note_blank_title_makes_no_request() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    // no mock mounted: any request would come back as a transport-level
    // failure rather than MissingField
    let err = store
        .create_note(
            NoteDraft {
                title: "  ".into(),
                content: "contents".into(),
                decay: Duration::minutes(5),
            }
        )
        .await
        .expect_err("should fail");
    assert!(
        matches!(err, StoreError::MissingField("title")),
        "wrong error type: {err:#?}",
    );
}

#[tokio::test]
async fn revise_requires_an_answer() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    let err = store
        .revise_note(
            NoteId(7),
            Revision {
                extension: Duration::minutes(30),
                answer: None,
            },
        )
        .await
        .expect_err("should fail");
    assert!(
        matches!(err, StoreError::AnswerRequired),
        "wrong error type: {err:#?}",
    );
}

#[tokio::test]
async fn revise_correct_answer_reports_success() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    Mock::given(method("POST"))
        .and(path("/notes/7/answer-question"))
        .and(body_json(json!({
            "question_index": 0,
            "answer": "ownership moves values",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "correct": true,
                "message": "Correct! Your memory is strong. Timer refreshed.",
                "note": note_json(7),
            }))
        )
        .mount(&server)
        .await;

    let outcome = store
        .revise_note(NoteId(7), revision_with_answer("ownership moves values"))
        .await
        .expect("revise failed");
    assert!(outcome.correct);
    assert_eq!(outcome.note.expect("note missing").id, NoteId(7));
    assert_eq!(outcome.feedback, None);
}

#[tokio::test]
async fn revise_wrong_answer_grants_nothing() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    Mock::given(method("POST"))
        .and(path("/notes/7/answer-question"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "correct": false,
                "message":
                    "Incorrect answer. Decay time reduced to 1260 minutes.",
                "feedback":
                    "Study this note more carefully before the next revision!",
                "penalty_info": {"new_decay_minutes": 1260},
            }))
        )
        .mount(&server)
        .await;

    let outcome = store
        .revise_note(NoteId(7), revision_with_answer("no idea"))
        .await
        .expect("revise failed");
    assert!(!outcome.correct);
    assert_eq!(
        outcome.message,
        "Incorrect answer. Decay time reduced to 1260 minutes.",
    );
    assert!(outcome.feedback.is_some());
    assert!(outcome.note.is_none());
}

#[tokio::test]
async fn revise_unknown_note_is_not_found() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    Mock::given(method("POST"))
        .and(path("/notes/999/answer-question"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": "Note not found"}))
        )
        .mount(&server)
        .await;

    let err = store
        .revise_note(NoteId(999), revision_with_answer("anything"))
        .await
        .expect_err("should fail");
    assert!(
        matches!(err, StoreError::NoteNotFound),
        "wrong error type: {err:#?}",
    );
}

#[tokio::test]
async fn revive_returns_canonical_note() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    Mock::given(method("POST"))
        .and(path("/notes/9/revive"))
        .and(body_json(json!({
            "question_index": 0,
            "answer": "detailed recollection",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "message":
                    "Note revived successfully! Memory restored and \
                     penalties cleared.",
                "note": note_json(9),
                "correct_answer": true,
            }))
        )
        .mount(&server)
        .await;

    let outcome = store
        .revive_note(NoteId(9), answer("detailed recollection"))
        .await
        .expect("revive failed");
    assert_eq!(outcome.note.id, NoteId(9));
}

#[tokio::test]
async fn revive_wrong_answer_surfaces_server_message() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    Mock::given(method("POST"))
        .and(path("/notes/9/revive"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({
                "error": "Answer needs more detail. Decay time reduced \
                          to 630 minutes due to wrong answer.",
            }))
        )
        .mount(&server)
        .await;

    let err = store
        .revive_note(NoteId(9), answer("hm"))
        .await
        .expect_err("should fail");
    match err {
        StoreError::Api(ApiError::Server { status: 400, message }) => {
            assert!(message.starts_with("Answer needs more detail."));
        },
        e => panic!("wrong error type: {e:#?}"),
    }
}

#[tokio::test]
async fn revive_requires_an_answer() {
    let server = MockServer::start().await;
    let store = make_store(&server);

    let err = store
        .revive_note(NoteId(9), None)
        .await
        .expect_err("should fail");
    assert!(
        matches!(err, StoreError::AnswerRequired),
        "wrong error type: {err:#?}",
    );
}
