use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SuratError};
use crate::letters;
use crate::model::{Letter, Tag};
use crate::numbering;
use crate::store::DocumentStore;
use chrono::NaiveDate;

/// A letter as entered on the form, before numbering is settled. A `None`
/// number means automatic mode: a fresh number is generated at
/// registration time. A supplied number is manual mode and used verbatim.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub number: Option<String>,
    pub date: Option<NaiveDate>,
    pub counterpart: String,
    pub subject: String,
    pub notes: String,
}

pub fn run<S: DocumentStore>(
    store: &mut S,
    prefix: &str,
    tag: Tag,
    draft: Draft,
    today: NaiveDate,
) -> Result<CmdResult> {
    if draft.counterpart.trim().is_empty() {
        let field = tag.counterpart_title().to_lowercase();
        return Err(SuratError::Api(format!("{} cannot be empty", field)));
    }
    if draft.subject.trim().is_empty() {
        return Err(SuratError::Api("Subject cannot be empty".into()));
    }

    let number = match draft.number {
        Some(n) if n.trim().is_empty() => {
            return Err(SuratError::Api("Letter number cannot be empty".into()))
        }
        Some(n) => n,
        None => numbering::next(store, prefix, tag, today)?,
    };

    let letter = Letter {
        number,
        date: draft.date.unwrap_or(today),
        counterpart: draft.counterpart,
        subject: draft.subject,
        notes: draft.notes,
    };

    letters::append(store, tag, letter.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Letter {} registered ({})",
        letter.number, tag
    )));
    Ok(result.with_affected(vec![letter]))
}
