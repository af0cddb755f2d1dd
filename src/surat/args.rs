use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "surat")]
#[command(about = "Correspondence register for incoming and outgoing letters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to ./.surat if present, else the user data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the register documents with empty defaults
    Init,

    /// Register a letter
    #[command(alias = "add")]
    Register {
        /// Which register: masuk/incoming or keluar/outgoing
        tag: String,

        /// Letter number; omit to generate one automatically
        #[arg(short, long)]
        number: Option<String>,

        /// Letter date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Sender (incoming) or recipient (outgoing)
        #[arg(short, long)]
        counterpart: String,

        /// Subject line
        #[arg(short, long)]
        subject: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List a register
    #[command(alias = "ls")]
    List {
        /// Which register: masuk/incoming or keluar/outgoing
        tag: String,

        /// Keep only rows containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one letter in full
    #[command(alias = "v")]
    View {
        /// Which register: masuk/incoming or keluar/outgoing
        tag: String,

        /// Row number from the listing
        row: usize,
    },

    /// Delete a letter by row number
    #[command(alias = "rm")]
    Delete {
        /// Which register: masuk/incoming or keluar/outgoing
        tag: String,

        /// Row number from the listing
        row: usize,
    },

    /// Export a register to a CSV spreadsheet
    Export {
        /// Which register: masuk/incoming or keluar/outgoing
        tag: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., number-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
