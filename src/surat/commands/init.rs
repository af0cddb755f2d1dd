use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::letters;
use crate::model::{Counters, Tag};
use crate::numbering;
use crate::store::DocumentStore;

/// Creates the register documents with empty/zero defaults. Documents that
/// already exist are left alone.
pub fn run<S: DocumentStore>(store: &mut S) -> Result<CmdResult> {
    let mut created = 0;

    if store.load(numbering::COUNTERS_DOC)?.is_none() {
        numbering::save_counters(store, &Counters::default())?;
        created += 1;
    }

    for tag in [Tag::Incoming, Tag::Outgoing] {
        if store.load(tag.document())?.is_none() {
            letters::save(store, tag, &[])?;
            created += 1;
        }
    }

    let mut result = CmdResult::default();
    if created == 0 {
        result.add_message(CmdMessage::info("Register already initialized."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Register initialized ({} documents created)",
            created
        )));
    }
    Ok(result)
}
