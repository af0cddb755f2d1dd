//! # API Facade
//!
//! The single entry point for all surat operations, regardless of the UI in
//! front of it. The facade dispatches to the command layer, normalizes
//! inputs (row numbers, generation dates), and returns structured
//! `Result<CmdResult>` values — it never touches stdout or the terminal.
//!
//! `SuratApi<S: DocumentStore>` is generic over the storage backend:
//! production uses `SuratApi<FileStore>`, tests use `SuratApi<MemoryStore>`
//! and never touch the filesystem.

use crate::commands::{self, config::ConfigAction, register::Draft, CmdResult};
use crate::config::SuratConfig;
use crate::error::Result;
use crate::model::Tag;
use crate::numbering::{self, NumberingMode, ToggleOutcome};
use crate::store::DocumentStore;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

pub struct SuratApi<S: DocumentStore> {
    store: S,
    config: SuratConfig,
    data_dir: PathBuf,
}

impl<S: DocumentStore> SuratApi<S> {
    pub fn new(store: S, config: SuratConfig, data_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            data_dir,
        }
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn register(&mut self, tag: Tag, draft: Draft) -> Result<CmdResult> {
        commands::register::run(
            &mut self.store,
            self.config.number_prefix(),
            tag,
            draft,
            today(),
        )
    }

    pub fn list(&self, tag: Tag, search: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.store, tag, search)
    }

    pub fn view(&self, tag: Tag, row: usize) -> Result<CmdResult> {
        commands::view::run(&self.store, tag, row)
    }

    pub fn delete(&mut self, tag: Tag, row: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, tag, row)
    }

    pub fn export(&self, tag: Tag) -> Result<CmdResult> {
        commands::export::run(&self.store, tag, today())
    }

    /// Flips the numbering mode for a form session. Switching back to Auto
    /// generates (and persists) a fresh number for the field.
    pub fn toggle_numbering(&mut self, tag: Tag, current: NumberingMode) -> Result<ToggleOutcome> {
        numbering::toggle(
            &mut self.store,
            self.config.number_prefix(),
            tag,
            current,
            today(),
        )
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
