use crate::commands::{CmdResult, Row};
use crate::error::Result;
use crate::letters;
use crate::model::{Letter, Tag};
use crate::store::DocumentStore;

/// Lists a register in insertion order. With a search term, keeps only the
/// rows whose rendered text contains the term, case-insensitively — row
/// numbers are assigned before filtering so they stay valid for delete.
pub fn run<S: DocumentStore>(store: &S, tag: Tag, search: Option<&str>) -> Result<CmdResult> {
    let rows: Vec<Row> = letters::list(store, tag)?
        .into_iter()
        .enumerate()
        .map(|(i, letter)| Row {
            number: i + 1,
            letter,
        })
        .collect();

    let rows = match search {
        Some(term) if !term.trim().is_empty() => {
            let term = term.to_lowercase();
            rows.into_iter()
                .filter(|row| row_text(&row.letter).contains(&term))
                .collect()
        }
        _ => rows,
    };

    Ok(CmdResult::default().with_rows(rows))
}

fn row_text(letter: &Letter) -> String {
    format!(
        "{} {} {} {} {}",
        letter.number, letter.date, letter.counterpart, letter.subject, letter.notes
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    fn seed(store: &mut MemoryStore) {
        for (n, counterpart, subject) in [
            ("A-001", "Dinas Pendidikan", "Undangan rapat"),
            ("A-002", "Kantor Pos", "Tagihan"),
            ("A-003", "Dinas Kesehatan", "Jadwal vaksinasi"),
        ] {
            letters::append(
                store,
                Tag::Incoming,
                Letter::new(
                    n,
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    counterpart,
                    subject,
                    "",
                ),
            )
            .unwrap();
        }
    }

    #[test]
    fn lists_in_insertion_order_with_row_numbers() {
        let mut store = MemoryStore::new();
        seed(&mut store);

        let result = run(&store, Tag::Incoming, None).unwrap();
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.rows[0].number, 1);
        assert_eq!(result.rows[0].letter.number, "A-001");
        assert_eq!(result.rows[2].number, 3);
    }

    #[test]
    fn search_is_case_insensitive_and_spans_all_fields() {
        let mut store = MemoryStore::new();
        seed(&mut store);

        let result = run(&store, Tag::Incoming, Some("dinas")).unwrap();
        assert_eq!(result.rows.len(), 2);

        let result = run(&store, Tag::Incoming, Some("TAGIHAN")).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].letter.number, "A-002");
    }

    #[test]
    fn filtering_keeps_original_row_numbers() {
        let mut store = MemoryStore::new();
        seed(&mut store);

        let result = run(&store, Tag::Incoming, Some("kesehatan")).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].number, 3);
    }

    #[test]
    fn blank_search_lists_everything() {
        let mut store = MemoryStore::new();
        seed(&mut store);
        let result = run(&store, Tag::Incoming, Some("  ")).unwrap();
        assert_eq!(result.rows.len(), 3);
    }

    #[test]
    fn empty_register_yields_no_rows() {
        let store = MemoryStore::new();
        let result = run(&store, Tag::Outgoing, None).unwrap();
        assert!(result.rows.is_empty());
    }
}
