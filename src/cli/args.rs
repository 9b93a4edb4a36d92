// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Data directory holding the stores (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to a studydeck.toml config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a glossary entry
    Add {
        /// The term or phrase to define
        #[arg(value_name = "WORD_PHRASE")]
        word_phrase: String,

        /// The definition text
        #[arg(value_name = "DEFINITION")]
        definition: String,

        /// Usage example containing the term
        #[arg(short, long)]
        example: Option<String>,

        /// Course unit grouping tag
        #[arg(short, long)]
        unit: Option<i64>,
    },

    /// View a glossary entry with its related terms
    View {
        /// Entry ID to view
        #[arg(value_name = "ENTRY_ID")]
        entry_id: i64,

        /// Output entry as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Edit a glossary entry
    Edit {
        /// Entry ID to edit
        #[arg(value_name = "ENTRY_ID")]
        entry_id: i64,

        /// New term or phrase
        #[arg(short, long)]
        word_phrase: String,

        /// New definition text
        #[arg(long)]
        definition: String,

        /// New usage example (omit to clear)
        #[arg(short, long)]
        example: Option<String>,

        /// New course unit (omit to clear)
        #[arg(short, long)]
        unit: Option<i64>,
    },

    /// List all glossary entries
    List {
        /// Output entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ranked search over entries, notes, or both
    Search {
        /// Search query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Search the note store instead of the glossary
        #[arg(long, conflicts_with = "all")]
        notes: bool,

        /// Unified search across both stores
        #[arg(long)]
        all: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show terms related to an entry
    Related {
        /// Entry ID to find related terms for
        #[arg(value_name = "ENTRY_ID")]
        entry_id: i64,
    },

    /// Generate a quiz for a course unit
    Quiz {
        /// Unit number to draw entries and notes from
        #[arg(value_name = "UNIT")]
        unit: i64,

        /// Seed for reproducible question selection
        #[arg(short, long)]
        seed: Option<u64>,

        /// Include the answer key in the output
        #[arg(long)]
        answers: bool,

        /// Output questions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Note store operations
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteCommand {
    /// Add a study note
    Add {
        /// Short title for the note
        #[arg(value_name = "TITLE")]
        title: String,

        /// The full note text
        #[arg(value_name = "CONTENT")]
        content: String,

        /// Course unit grouping tag
        #[arg(short, long)]
        unit: Option<i64>,

        /// Comma-separated free-text tags
        #[arg(short, long)]
        tags: Option<String>,

        /// Comma-separated glossary entry ids to cross-link
        #[arg(short, long)]
        related: Option<String>,

        /// Personal annotation
        #[arg(long)]
        comments: Option<String>,

        /// Star the note
        #[arg(short, long)]
        favorite: bool,
    },

    /// View a note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes, most recently updated first
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Star or unstar a note
    Favorite {
        /// Note ID to update
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Remove the star instead of setting it
        #[arg(long)]
        unset: bool,
    },
}
