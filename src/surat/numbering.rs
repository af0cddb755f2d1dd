//! Numbering policy: the persistent counter pair and the automatic/manual
//! numbering mode.
//!
//! Generated numbers look like `ARSIP-IN-20240305-001`: configured prefix,
//! register segment, generation date, counter zero-padded to three digits.
//! The counter document and the register documents are independent stores —
//! a crash between persisting a bumped counter and appending the letter
//! that used it loses that number, and nothing recovers it.

use crate::error::Result;
use crate::model::{Counters, Tag};
use crate::store::DocumentStore;
use chrono::NaiveDate;

pub const COUNTERS_DOC: &str = "counters.json";

/// Loads the counter pair, defaulting to zeroes when the document is
/// absent.
pub fn load_counters<S: DocumentStore>(store: &S) -> Result<Counters> {
    match store.load(COUNTERS_DOC)? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Counters::default()),
    }
}

pub fn save_counters<S: DocumentStore>(store: &mut S, counters: &Counters) -> Result<()> {
    let value = serde_json::to_value(counters)?;
    store.save(COUNTERS_DOC, &value)
}

/// Generates the next sequential number for `tag`, dated `on`.
///
/// The incremented counter is persisted before the label is returned, every
/// time, even if the label never makes it into a register. Callers must not
/// invoke this speculatively.
pub fn next<S: DocumentStore>(
    store: &mut S,
    prefix: &str,
    tag: Tag,
    on: NaiveDate,
) -> Result<String> {
    let mut counters = load_counters(store)?;
    let n = counters.bump(tag);
    save_counters(store, &counters)?;
    Ok(format_label(prefix, tag, on, n))
}

fn format_label(prefix: &str, tag: Tag, on: NaiveDate, n: u64) -> String {
    format!("{}-{}-{}-{:03}", prefix, tag.label(), on.format("%Y%m%d"), n)
}

/// Whether the number field on a form is system-generated or user-typed.
/// Per-form, per-session state; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberingMode {
    #[default]
    Auto,
    Manual,
}

/// Result of toggling the numbering mode on a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub mode: NumberingMode,
    /// Fresh label to overwrite the field with; only set on the
    /// Manual -> Auto transition.
    pub fresh_label: Option<String>,
}

/// Flips the numbering mode. Auto -> Manual keeps the field's current value
/// and merely makes it editable; Manual -> Auto generates a fresh number
/// (bumping the counter) to overwrite the field with.
pub fn toggle<S: DocumentStore>(
    store: &mut S,
    prefix: &str,
    tag: Tag,
    current: NumberingMode,
    on: NaiveDate,
) -> Result<ToggleOutcome> {
    match current {
        NumberingMode::Auto => Ok(ToggleOutcome {
            mode: NumberingMode::Manual,
            fresh_label: None,
        }),
        NumberingMode::Manual => Ok(ToggleOutcome {
            mode: NumberingMode::Auto,
            fresh_label: Some(next(store, prefix, tag, on)?),
        }),
    }
}
