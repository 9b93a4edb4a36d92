// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::application::{
    EntryEditor, EntryViewer, NoteEditor, NoteViewer, QuizGenerator, SearchLimits, SearchService,
};
use crate::cli::args::{Args, Command, NoteCommand};
use crate::domain::entry::EntryDraft;
use crate::domain::note::NoteDraft;
use crate::infrastructure::{Config, SqliteEntryStore, SqliteNoteStore};
use crate::ports::ConsolePresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting studydeck with arguments");

    let data_dir = resolve_data_dir(args.data_dir.clone())?;
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join("studydeck.toml"));
    let config = Config::load_or_default(&config_path)?;
    debug!(?data_dir, ?config, "Resolved configuration");

    let limits = SearchLimits {
        results: config.search.result_limit,
        unified: config.search.unified_limit,
        related: config.search.related_limit,
    };
    let entry_db = config.dictionary_db_path(&data_dir);
    let note_db = config.notes_db_path(&data_dir);
    let presenter = ConsolePresenter::new();

    match args.command {
        Command::Add {
            word_phrase,
            definition,
            example,
            unit,
        } => {
            let store = SqliteEntryStore::open(&entry_db)?;
            let mut editor = EntryEditor::new(store);
            let id = editor.add_entry(EntryDraft {
                word_phrase,
                definition,
                example,
                unit_number: unit,
            })?;
            info!(id, "Entry added");
            println!("Added entry {id}");
        }

        Command::View { entry_id, json } => {
            let store = SqliteEntryStore::open(&entry_db)?;
            let mut viewer = EntryViewer::new(store);
            let entry = viewer.view_entry(entry_id)?;

            let mut search = SearchService::with_limits(
                SqliteEntryStore::open(&entry_db)?,
                SqliteNoteStore::open(&note_db)?,
                limits,
            );
            let related = search.related_terms(entry_id)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                print!("{}", presenter.render_entry(&entry, &related));
            }
        }

        Command::Edit {
            entry_id,
            word_phrase,
            definition,
            example,
            unit,
        } => {
            let store = SqliteEntryStore::open(&entry_db)?;
            let mut editor = EntryEditor::new(store);
            editor.edit_entry(
                entry_id,
                EntryDraft {
                    word_phrase,
                    definition,
                    example,
                    unit_number: unit,
                },
            )?;
            println!("Updated entry {entry_id}");
        }

        Command::List { json } => {
            let store = SqliteEntryStore::open(&entry_db)?;
            let mut viewer = EntryViewer::new(store);
            let entries = viewer.list_entries()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", presenter.render_entry_list(&entries));
            }
        }

        Command::Search {
            query,
            notes,
            all,
            json,
        } => {
            let mut search = SearchService::with_limits(
                SqliteEntryStore::open(&entry_db)?,
                SqliteNoteStore::open(&note_db)?,
                limits,
            );
            if all {
                let results = search.search_all(&query)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else {
                    print!("{}", presenter.render_unified_results(&results, &query));
                }
            } else {
                let results = if notes {
                    search.search_notes(&query)?
                } else {
                    search.search_entries(&query)?
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else {
                    print!("{}", presenter.render_search_results(&results, &query));
                }
            }
        }

        Command::Related { entry_id } => {
            let mut search = SearchService::with_limits(
                SqliteEntryStore::open(&entry_db)?,
                SqliteNoteStore::open(&note_db)?,
                limits,
            );
            let related = search.related_terms(entry_id)?;
            for r in &related {
                println!("[{}] {}", r.id, r.primary_text);
            }
        }

        Command::Quiz {
            unit,
            seed,
            answers,
            json,
        } => {
            let mut generator = QuizGenerator::new(
                SqliteEntryStore::open(&entry_db)?,
                SqliteNoteStore::open(&note_db)?,
            );
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            info!(unit, "Generating quiz");
            let questions = generator.generate(unit, &mut rng)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else if answers {
                print!("{}", presenter.render_quiz_with_answers(&questions));
            } else {
                print!("{}", presenter.render_quiz(&questions));
            }
        }

        Command::Note { command } => run_note_command(command, &note_db, &presenter)?,
    }

    Ok(())
}

fn run_note_command(
    command: NoteCommand,
    note_db: &Path,
    presenter: &ConsolePresenter,
) -> Result<()> {
    let store = SqliteNoteStore::open(note_db)?;

    match command {
        NoteCommand::Add {
            title,
            content,
            unit,
            tags,
            related,
            comments,
            favorite,
        } => {
            let mut editor = NoteEditor::new(store);
            let id = editor.add_note(NoteDraft {
                title,
                content,
                unit_number: unit,
                tags,
                related_entries: related,
                comments,
                is_favorite: favorite,
            })?;
            info!(id, "Note added");
            println!("Added note {id}");
        }

        NoteCommand::View { note_id, json } => {
            let mut viewer = NoteViewer::new(store);
            let note = viewer.view_note(note_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else {
                print!("{}", presenter.render_note(&note));
            }
        }

        NoteCommand::List { json } => {
            let mut viewer = NoteViewer::new(store);
            let notes = viewer.list_notes()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                print!("{}", presenter.render_note_list(&notes));
            }
        }

        NoteCommand::Favorite { note_id, unset } => {
            let mut editor = NoteEditor::new(store);
            editor.set_favorite(note_id, !unset)?;
            println!(
                "Note {note_id} {}",
                if unset { "unstarred" } else { "starred" }
            );
        }
    }

    Ok(())
}

pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir {
        debug!(?dir, "Using provided data directory");
        return Ok(dir);
    }

    let base = dirs::data_dir().context("Could not find user data directory")?;
    Ok(base.join("studydeck"))
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
