use std::io;
use std::io::Write;

use api_data::model::{CompleteRevisionRequest, UpdateNoteRequest};
use clap::Parser;
use fadenotes::config::app_config::Backend;
use fadenotes::data::{
    ArchivedNote,
    Note,
    NoteDraft,
    NoteId,
    QuizAnswer,
    Revision,
};
use fadenotes::error_exit;
use fadenotes::logging::init_logging;
use fadenotes::store::NoteStore;
use fadenotes::store::remote::RemoteNoteStore;
use fadenotes_cli::app::App;
use time::{Duration, OffsetDateTime};

use crate::cli::{CliConfig, Command};

mod cli;

#[tokio::main]
async fn main() {
    init_logging("fadenotes");

    let cli_config = CliConfig::parse();
    let app = App::init(cli_config.config_file).await;

    match cli_config.command {
        Command::List => list_notes(&app).await,
        Command::Archive => list_archive(&app).await,
        Command::New { title, content, decay_minutes } => {
            new_note(&app, title, content, decay_minutes).await
        },
        Command::Revise { id, answer, question, extend_minutes } => {
            revise_note(&app, id, answer, question, extend_minutes).await
        },
        Command::Quiz { id } => quiz(&app, id).await,
        Command::Revive { id, answer, question } => {
            revive_note(&app, id, answer, question).await
        },
        Command::Edit { id, title, content, decay_minutes } => {
            edit_note(&app, id, title, content, decay_minutes).await
        },
        Command::Delete { id } => delete_note(&app, id).await,
        Command::Sweep => sweep(&app).await,
        Command::Stats => stats(&app).await,
    }
}

async fn list_notes(app: &App) {
    let store = app.note_store().await;
    let mut notes = store.list_notes()
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    if notes.is_empty() {
        println!("no active notes");
        return;
    }
    notes.sort_by_key(|n| n.expires_at);
    for note in &notes {
        print_note(note);
    }
}

async fn list_archive(app: &App) {
    let store = app.note_store().await;
    let archived = store.list_archived()
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    if archived.is_empty() {
        println!("the archive is empty");
        return;
    }
    for entry in &archived {
        print_archived_note(entry);
    }
}

async fn new_note(
    app: &App,
    title: String,
    content: String,
    decay_minutes: Option<i64>,
) {
    let decay_minutes =
        decay_minutes.unwrap_or(app.config.default_decay_minutes);
    let store = app.note_store().await;
    let note = store
        .create_note(
            NoteDraft {
                title,
                content,
                decay: Duration::minutes(decay_minutes),
            }
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("created note {}", note.id);
    print_note(&note);
}

async fn revise_note(
    app: &App,
    id: NoteId,
    answer: Option<String>,
    question: usize,
    extend_minutes: i64,
) {
    let store = app.note_store().await;
    let answer = match app.config.backend {
        Backend::Remote => {
            let text = match answer {
                Some(text) => text,
                None => prompt_from_revision_sheet(app, id, question).await,
            };
            Some(
                QuizAnswer {
                    question_index: question,
                    answer: text,
                }
            )
        },
        Backend::Local => None,
    };
    let outcome = store
        .revise_note(
            id,
            Revision {
                extension: Duration::minutes(extend_minutes),
                answer,
            },
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", outcome.message);
    if let Some(feedback) = &outcome.feedback {
        println!("{feedback}");
    }
    if let Some(note) = &outcome.note {
        print_note(note);
    }
}

async fn prompt_from_revision_sheet(
    app: &App,
    id: NoteId,
    question: usize,
) -> String {
    let remote = RemoteNoteStore::new(app.api_client());
    let sheet = remote.revision_sheet(id)
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", sheet.summary);
    println!();
    match sheet.questions.get(question) {
        Some(text) => println!("{text}"),
        None => error_exit!("this note has no question {question}"),
    }
    prompt_line("> ")
}

async fn quiz(app: &App, id: NoteId) {
    if app.config.backend != Backend::Remote {
        error_exit!("revision quizzes require the remote backend");
    }
    let remote = RemoteNoteStore::new(app.api_client());
    let sheet = remote.revision_sheet(id)
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    if sheet.questions.is_empty() {
        error_exit!("this note has no questions");
    }
    println!("{}", sheet.summary);

    let mut correct_answers = 0;
    for (index, question) in sheet.questions.iter().enumerate() {
        println!();
        println!("{question}");
        let outcome = remote
            .revise_note(
                id,
                Revision {
                    extension: Duration::minutes(30),
                    answer: Some(
                        QuizAnswer {
                            question_index: index,
                            answer: prompt_line("> "),
                        }
                    ),
                },
            )
            .await
            .unwrap_or_else(|e| error_exit!("{e}"));
        println!("{}", outcome.message);
        if outcome.correct {
            correct_answers += 1;
        } else if let Some(feedback) = &outcome.feedback {
            println!("{feedback}");
        }
    }

    let response = app.api_client()
        .complete_revision(
            id.0,
            &CompleteRevisionRequest {
                correct_answers,
                total_questions: sheet.questions.len() as u32,
            },
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!();
    println!("{}", response.message);
}

async fn revive_note(
    app: &App,
    id: NoteId,
    answer: Option<String>,
    question: usize,
) {
    let store = app.note_store().await;
    let answer = match app.config.backend {
        Backend::Remote => {
            let text = match answer {
                Some(text) => text,
                None => {
                    println!(
                        "recall the note's contents to revive the memory"
                    );
                    prompt_line("> ")
                },
            };
            Some(
                QuizAnswer {
                    question_index: question,
                    answer: text,
                }
            )
        },
        Backend::Local => None,
    };
    let outcome = store.revive_note(id, answer)
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("{}", outcome.message);
    print_note(&outcome.note);
}

async fn edit_note(
    app: &App,
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
    decay_minutes: Option<i64>,
) {
    if app.config.backend != Backend::Remote {
        error_exit!("editing notes requires the remote backend");
    }
    if title.is_none() && content.is_none() && decay_minutes.is_none() {
        error_exit!("nothing to change");
    }
    let remote = RemoteNoteStore::new(app.api_client());
    let note = remote
        .update_note(
            id,
            UpdateNoteRequest {
                title,
                content,
                decay_minutes,
            },
        )
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("updated note {}", note.id);
    print_note(&note);
}

async fn delete_note(app: &App, id: NoteId) {
    let store = app.note_store().await;
    store.delete_note(id)
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("deleted note {id}");
}

async fn sweep(app: &App) {
    if app.config.backend != Backend::Local {
        error_exit!("the remote service archives expired notes on its own");
    }
    let store = app.local_note_store().await;
    let moved = store.sweep_once()
        .await
        .unwrap_or_else(|e| error_exit!("{e}"));
    println!("archived {moved} expired notes");
}

async fn stats(app: &App) {
    match app.config.backend {
        Backend::Local => {
            let store = app.note_store().await;
            let active = store.list_notes()
                .await
                .unwrap_or_else(|e| error_exit!("{e}"))
                .len();
            let archived = store.list_archived()
                .await
                .unwrap_or_else(|e| error_exit!("{e}"))
                .len();
            println!("active notes: {active}");
            println!("archived notes: {archived}");
            println!("total notes: {}", active + archived);
        },
        Backend::Remote => {
            let remote = RemoteNoteStore::new(app.api_client());
            let stats = remote.stats()
                .await
                .unwrap_or_else(|e| error_exit!("{e}"));
            println!("active notes: {}", stats.active_notes);
            println!("archived notes: {}", stats.archived_notes);
            println!("revived notes: {}", stats.revived_notes);
            println!("total notes: {}", stats.total_notes);
        },
    }
}

fn print_note(note: &Note) {
    println!(
        "{:>16}  {:<32}  {}",
        note.id,
        note.title,
        format_remaining(note.expires_at),
    );
}

fn print_archived_note(entry: &ArchivedNote) {
    println!(
        "{:>16}  {:<32}  archived {}",
        entry.note.id,
        entry.note.title,
        entry.archived_at,
    );
}

fn format_remaining(expires_at: OffsetDateTime) -> String {
    let remaining = expires_at - OffsetDateTime::now_utc();
    if remaining <= Duration::ZERO {
        return "expired".to_owned();
    }
    let minutes = remaining.whole_minutes();
    if minutes >= 60 {
        format!("{}h {}m left", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m left")
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush()
        .unwrap_or_else(|e| error_exit!("could not write a prompt: {e}"));
    let mut line = String::new();
    io::stdin().read_line(&mut line)
        .unwrap_or_else(|e| error_exit!("could not read the answer: {e}"));
    line.trim().to_owned()
}
