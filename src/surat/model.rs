use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Selects which register an operation works on.
///
/// The tag decides the backing document, the counter field, the `IN`/`OUT`
/// segment of generated numbers, and whether the counterpart column reads
/// as sender or recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Incoming,
    Outgoing,
}

impl Tag {
    /// Name of the backing collection document.
    pub fn document(&self) -> &'static str {
        match self {
            Tag::Incoming => "surat_masuk.json",
            Tag::Outgoing => "surat_keluar.json",
        }
    }

    /// Segment used in generated letter numbers.
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Incoming => "IN",
            Tag::Outgoing => "OUT",
        }
    }

    /// Column title for the counterpart field.
    pub fn counterpart_title(&self) -> &'static str {
        match self {
            Tag::Incoming => "Sender",
            Tag::Outgoing => "Recipient",
        }
    }

    /// Register name as it appears in export filenames.
    pub fn export_label(&self) -> &'static str {
        match self {
            Tag::Incoming => "Masuk",
            Tag::Outgoing => "Keluar",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Incoming => write!(f, "incoming"),
            Tag::Outgoing => write!(f, "outgoing"),
        }
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incoming" | "masuk" | "in" => Ok(Tag::Incoming),
            "outgoing" | "keluar" | "out" => Ok(Tag::Outgoing),
            other => Err(format!(
                "Unknown register '{}' (expected masuk/incoming or keluar/outgoing)",
                other
            )),
        }
    }
}

/// One correspondence record. Immutable once stored; the only way to change
/// a register is a full collection rewrite (append or positional delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub number: String,
    pub date: NaiveDate,
    pub counterpart: String,
    pub subject: String,
    #[serde(default)]
    pub notes: String,
}

impl Letter {
    pub fn new(
        number: impl Into<String>,
        date: NaiveDate,
        counterpart: impl Into<String>,
        subject: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            date,
            counterpart: counterpart.into(),
            subject: subject.into(),
            notes: notes.into(),
        }
    }
}

/// The persistent counter pair behind automatic numbering.
///
/// Values only ever move forward: each generated number bumps its field by
/// exactly 1, and deleting a letter never decrements anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(default)]
    pub incoming: u64,
    #[serde(default)]
    pub outgoing: u64,
}

impl Counters {
    pub fn get(&self, tag: Tag) -> u64 {
        match tag {
            Tag::Incoming => self.incoming,
            Tag::Outgoing => self.outgoing,
        }
    }

    /// Increments the counter for `tag` and returns the new value.
    pub fn bump(&mut self, tag: Tag) -> u64 {
        let field = match tag {
            Tag::Incoming => &mut self.incoming,
            Tag::Outgoing => &mut self.outgoing,
        };
        *field += 1;
        *field
    }
}
