use crate::config::SuratConfig;
use crate::model::Letter;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod register;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A listed letter together with its 1-based row number. Row numbers come
/// from insertion order and are assigned before any search filtering, so a
/// filtered listing still shows the rows a delete would address.
#[derive(Debug, Clone)]
pub struct Row {
    pub number: usize,
    pub letter: Letter,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub rows: Vec<Row>,
    pub affected: Vec<Letter>,
    pub exported_to: Option<PathBuf>,
    pub config: Option<SuratConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_affected(mut self, letters: Vec<Letter>) -> Self {
        self.affected = letters;
        self
    }

    pub fn with_config(mut self, config: SuratConfig) -> Self {
        self.config = Some(config);
        self
    }
}
