use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::letters;
use crate::model::{Letter, Tag};
use crate::store::DocumentStore;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Exports a register to a CSV spreadsheet in the current directory, named
/// `Data_Surat_{Masuk|Keluar}_{YYYY-MM-DD}.csv`.
pub fn run<S: DocumentStore>(store: &S, tag: Tag, on: NaiveDate) -> Result<CmdResult> {
    let all = letters::list(store, tag)?;

    if all.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No letters to export."));
        return Ok(res);
    }

    let filename = format!(
        "Data_Surat_{}_{}.csv",
        tag.export_label(),
        on.format("%Y-%m-%d")
    );
    let file = File::create(&filename)?;
    write_sheet(file, tag, &all)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} letters to {}",
        all.len(),
        filename
    )));
    result.exported_to = Some(PathBuf::from(filename));
    Ok(result)
}

fn write_sheet<W: Write>(mut writer: W, tag: Tag, letters: &[Letter]) -> Result<()> {
    writeln!(
        writer,
        "No,Number,Date,{},Subject,Notes",
        tag.counterpart_title()
    )?;

    for (i, letter) in letters.iter().enumerate() {
        let notes = if letter.notes.is_empty() {
            "-"
        } else {
            letter.notes.as_str()
        };
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            i + 1,
            escape(&letter.number),
            letter.date,
            escape(&letter.counterpart),
            escape(&letter.subject),
            escape(notes)
        )?;
    }

    Ok(())
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
