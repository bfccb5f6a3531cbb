use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fadenotes::data::NoteId;

#[derive(Debug, Parser)]
#[command(name = "fadenotes", about = "memory decay notepad")]
pub struct CliConfig {
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List active notes, closest to expiry first
    List,

    /// List archived notes
    Archive,

    /// Create a note with a decay timer
    New {
        title: String,
        content: String,

        #[arg(long)]
        decay_minutes: Option<i64>,
    },

    /// Answer a review question to extend a note's lifetime
    Revise {
        id: NoteId,

        #[arg(long)]
        answer: Option<String>,

        #[arg(long, default_value_t = 0)]
        question: usize,

        #[arg(long, default_value_t = 30)]
        extend_minutes: i64,
    },

    /// Run a revision session over every question (remote backend only)
    Quiz {
        id: NoteId,
    },

    /// Move an archived note back into the active set
    Revive {
        id: NoteId,

        #[arg(long)]
        answer: Option<String>,

        #[arg(long, default_value_t = 0)]
        question: usize,
    },

    /// Change a note's fields (remote backend only)
    Edit {
        id: NoteId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        decay_minutes: Option<i64>,
    },

    /// Delete a note permanently
    Delete {
        id: NoteId,
    },

    /// Archive everything already past its expiry (local backend only)
    Sweep,

    /// Note counts
    Stats,
}
