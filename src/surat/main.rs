use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::str::FromStr;
use surat::api::SuratApi;
use surat::commands::config::ConfigAction;
use surat::commands::register::Draft;
use surat::commands::{CmdMessage, MessageLevel, Row};
use surat::config::SuratConfig;
use surat::error::{Result, SuratError};
use surat::model::Tag;
use surat::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Commands::Init => {
            let result = api.init()?;
            print_messages(&result.messages);
        }
        Commands::Register {
            tag,
            number,
            date,
            counterpart,
            subject,
            notes,
        } => {
            let tag = parse_tag(&tag)?;
            let draft = Draft {
                number,
                date,
                counterpart,
                subject,
                notes,
            };
            let result = api.register(tag, draft)?;
            print_messages(&result.messages);
        }
        Commands::List { tag, search } => {
            let tag = parse_tag(&tag)?;
            let result = api.list(tag, search.as_deref())?;
            print_table(tag, &result.rows);
            print_messages(&result.messages);
        }
        Commands::View { tag, row } => {
            let tag = parse_tag(&tag)?;
            let result = api.view(tag, row)?;
            for row in &result.rows {
                print_detail(tag, row);
            }
            print_messages(&result.messages);
        }
        Commands::Delete { tag, row } => {
            let tag = parse_tag(&tag)?;
            let result = api.delete(tag, row)?;
            print_messages(&result.messages);
        }
        Commands::Export { tag } => {
            let tag = parse_tag(&tag)?;
            let result = api.export(tag)?;
            print_messages(&result.messages);
        }
        Commands::Config { key, value } => {
            let action = match (key.as_deref(), value) {
                (None, _) => ConfigAction::ShowAll,
                (Some("number-prefix"), None) => ConfigAction::ShowKey("number-prefix".into()),
                (Some("number-prefix"), Some(v)) => ConfigAction::SetPrefix(v),
                (Some(other), _) => {
                    println!("Unknown config key: {}", other);
                    return Ok(());
                }
            };
            let result = api.config(action)?;
            if let Some(config) = &result.config {
                println!("number-prefix = {}", config.number_prefix());
            }
            print_messages(&result.messages);
        }
    }

    Ok(())
}

fn init_api(cli: &Cli) -> Result<SuratApi<FileStore>> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => resolve_data_dir(),
    };

    let config = SuratConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    Ok(SuratApi::new(store, config, data_dir))
}

/// A local `.surat/` directory wins over the user-wide one, so a project or
/// office share can carry its own register.
fn resolve_data_dir() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let local = cwd.join(".surat");
    if local.exists() {
        return local;
    }

    match ProjectDirs::from("id", "surat", "surat") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => local,
    }
}

fn parse_tag(s: &str) -> Result<Tag> {
    Tag::from_str(s).map_err(SuratError::Api)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const DATE_WIDTH: usize = 10;
const MAX_COL_WIDTH: usize = 36;

fn print_table(tag: Tag, rows: &[Row]) {
    if rows.is_empty() {
        println!("No letters found.");
        return;
    }

    let no_width = rows
        .iter()
        .map(|r| r.number.to_string().len())
        .max()
        .unwrap_or(1)
        .max(2);
    let number_width = column_width("Number", rows.iter().map(|r| r.letter.number.as_str()));
    let counterpart_width = column_width(
        tag.counterpart_title(),
        rows.iter().map(|r| r.letter.counterpart.as_str()),
    );
    let subject_width = column_width("Subject", rows.iter().map(|r| r.letter.subject.as_str()));

    let header = format!(
        "{:>no$}  {:<num$}  {:<date$}  {:<cp$}  {:<subj$}",
        "No",
        "Number",
        "Date",
        tag.counterpart_title(),
        "Subject",
        no = no_width,
        num = number_width,
        date = DATE_WIDTH,
        cp = counterpart_width,
        subj = subject_width,
    );
    println!("{}", header.bold());

    for row in rows {
        println!(
            "{:>no$}  {}  {:<date$}  {}  {}",
            row.number,
            pad_to_width(&row.letter.number, number_width),
            row.letter.date,
            pad_to_width(&row.letter.counterpart, counterpart_width),
            pad_to_width(&row.letter.subject, subject_width),
            no = no_width,
            date = DATE_WIDTH,
        );
    }
}

fn print_detail(tag: Tag, row: &Row) {
    let letter = &row.letter;
    println!("{} {}", format!("#{}", row.number).yellow(), letter.number.bold());
    println!("--------------------------------");
    println!("Date     : {}", letter.date);
    println!("{:<9}: {}", tag.counterpart_title(), letter.counterpart);
    println!("Subject  : {}", letter.subject);
    println!(
        "Notes    : {}",
        if letter.notes.is_empty() {
            "-"
        } else {
            letter.notes.as_str()
        }
    );
}

fn column_width<'a, I: Iterator<Item = &'a str>>(header: &str, cells: I) -> usize {
    cells
        .map(|c| c.width())
        .max()
        .unwrap_or(0)
        .max(header.width())
        .min(MAX_COL_WIDTH)
}

/// Truncates to `width` display columns (with an ellipsis) and pads the
/// remainder with spaces, so multibyte text keeps the table aligned.
fn pad_to_width(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current = 0;

    if s.width() > width {
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if current + w > width.saturating_sub(1) {
                break;
            }
            result.push(c);
            current += w;
        }
        result.push('…');
        current += 1;
    } else {
        result.push_str(s);
        current = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}
