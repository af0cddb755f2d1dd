use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SuratError};
use crate::letters;
use crate::model::Tag;
use crate::store::DocumentStore;

/// Deletes the letter at the given 1-based row number. The row must come
/// from a listing not invalidated by another mutation in between; a stale
/// row silently addresses the wrong letter.
pub fn run<S: DocumentStore>(store: &mut S, tag: Tag, row: usize) -> Result<CmdResult> {
    if row == 0 {
        return Err(SuratError::Api("Row numbers start at 1".into()));
    }

    let removed = letters::delete_at(store, tag, row - 1)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Letter deleted ({}): {}",
        removed.number, removed.subject
    )));
    Ok(result.with_affected(vec![removed]))
}
