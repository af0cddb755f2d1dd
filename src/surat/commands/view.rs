use crate::commands::{CmdResult, Row};
use crate::error::{Result, SuratError};
use crate::letters;
use crate::model::Tag;
use crate::store::DocumentStore;

/// Fetches one letter by its 1-based row number for the detail view.
pub fn run<S: DocumentStore>(store: &S, tag: Tag, row: usize) -> Result<CmdResult> {
    let all = letters::list(store, tag)?;
    if row == 0 || row > all.len() {
        return Err(SuratError::OutOfRange {
            row,
            len: all.len(),
        });
    }

    let letter = all[row - 1].clone();
    Ok(CmdResult::default().with_rows(vec![Row {
        number: row,
        letter,
    }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Letter;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn fetches_the_addressed_row() {
        let mut store = MemoryStore::new();
        for n in ["A-001", "A-002"] {
            letters::append(
                &mut store,
                Tag::Incoming,
                Letter::new(
                    n,
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    "X",
                    "S",
                    "",
                ),
            )
            .unwrap();
        }

        let result = run(&store, Tag::Incoming, 2).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].letter.number, "A-002");
    }

    #[test]
    fn row_zero_and_past_the_end_are_out_of_range() {
        let store = MemoryStore::new();
        assert!(matches!(
            run(&store, Tag::Incoming, 0),
            Err(SuratError::OutOfRange { .. })
        ));
        assert!(matches!(
            run(&store, Tag::Incoming, 1),
            Err(SuratError::OutOfRange { row: 1, len: 0 })
        ));
    }
}
