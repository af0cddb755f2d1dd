//! Register operations: the ordered letter collections behind the incoming
//! and outgoing registers.
//!
//! A register is one JSON document holding an array of letters in insertion
//! order. Every mutation loads the whole array, changes it in memory, and
//! writes the whole array back. Position in the array is the only record
//! identifier, so a row number obtained from [`list`] is only safe to pass
//! to [`delete_at`] while nothing else has mutated the register in between.

use crate::error::{Result, SuratError};
use crate::model::{Letter, Tag};
use crate::store::DocumentStore;

/// Loads a register in insertion order. An absent or empty backing document
/// reads as an empty register.
pub fn list<S: DocumentStore>(store: &S, tag: Tag) -> Result<Vec<Letter>> {
    match store.load(tag.document())? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

/// Persists a register in full.
pub fn save<S: DocumentStore>(store: &mut S, tag: Tag, letters: &[Letter]) -> Result<()> {
    let value = serde_json::to_value(letters)?;
    store.save(tag.document(), &value)
}

/// Appends a letter, rejecting it when another letter in the same register
/// already carries the exact same number. The register is not written on a
/// rejection.
pub fn append<S: DocumentStore>(store: &mut S, tag: Tag, letter: Letter) -> Result<()> {
    let mut letters = list(store, tag)?;
    if letters.iter().any(|l| l.number == letter.number) {
        return Err(SuratError::DuplicateNumber(letter.number));
    }
    letters.push(letter);
    save(store, tag, &letters)
}

/// Removes the letter at `index` (0-based) and returns it.
///
/// There is no concurrency token: an index obtained before a concurrent
/// mutation silently addresses the wrong record.
pub fn delete_at<S: DocumentStore>(store: &mut S, tag: Tag, index: usize) -> Result<Letter> {
    let mut letters = list(store, tag)?;
    if index >= letters.len() {
        return Err(SuratError::OutOfRange {
            row: index + 1,
            len: letters.len(),
        });
    }
    let removed = letters.remove(index);
    save(store, tag, &letters)?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    fn letter(number: &str, subject: &str) -> Letter {
        Letter::new(
            number,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "X",
            subject,
            "",
        )
    }

    #[test]
    fn append_then_list_keeps_insertion_order() {
        let mut store = MemoryStore::new();
        append(&mut store, Tag::Incoming, letter("A-001", "First")).unwrap();
        append(&mut store, Tag::Incoming, letter("A-002", "Second")).unwrap();

        let listed = list(&store, Tag::Incoming).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].number, "A-001");
        assert_eq!(listed[1].number, "A-002");
    }

    #[test]
    fn duplicate_number_is_rejected_without_writing() {
        let mut store = MemoryStore::new();
        append(&mut store, Tag::Incoming, letter("A-001", "First")).unwrap();

        let err = append(&mut store, Tag::Incoming, letter("A-001", "Again")).unwrap_err();
        assert!(matches!(err, SuratError::DuplicateNumber(n) if n == "A-001"));

        let listed = list(&store, Tag::Incoming).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].subject, "First");
    }

    #[test]
    fn registers_are_independent() {
        let mut store = MemoryStore::new();
        append(&mut store, Tag::Incoming, letter("A-001", "In")).unwrap();
        append(&mut store, Tag::Outgoing, letter("A-001", "Out")).unwrap();

        assert_eq!(list(&store, Tag::Incoming).unwrap().len(), 1);
        assert_eq!(list(&store, Tag::Outgoing).unwrap().len(), 1);
    }

    #[test]
    fn delete_at_removes_only_the_addressed_position() {
        let mut store = MemoryStore::new();
        for (n, s) in [("A-001", "First"), ("A-002", "Second"), ("A-003", "Third")] {
            append(&mut store, Tag::Outgoing, letter(n, s)).unwrap();
        }

        let removed = delete_at(&mut store, Tag::Outgoing, 1).unwrap();
        assert_eq!(removed.number, "A-002");

        let listed = list(&store, Tag::Outgoing).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].number, "A-001");
        assert_eq!(listed[1].number, "A-003");
    }

    #[test]
    fn delete_past_the_end_is_out_of_range() {
        let mut store = MemoryStore::new();
        append(&mut store, Tag::Outgoing, letter("A-001", "Only")).unwrap();

        let err = delete_at(&mut store, Tag::Outgoing, 1).unwrap_err();
        assert!(matches!(err, SuratError::OutOfRange { row: 2, len: 1 }));
        assert_eq!(list(&store, Tag::Outgoing).unwrap().len(), 1);
    }

    #[test]
    fn empty_register_lists_as_empty() {
        let store = MemoryStore::new();
        assert!(list(&store, Tag::Incoming).unwrap().is_empty());
    }
}
