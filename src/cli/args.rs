use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taqwim", version, about = "Hijri and Gregorian date cards with Urdu localization")]
pub struct Cli {
    /// Gregorian date to resolve (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Emit the record as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved date card (default)
    Card,
    /// Quotation reference history management
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List stored references, oldest first
    List,
    /// Record a reference as seen
    Add {
        /// Reference text, e.g. "Sahih Bukhari, Hadith 52"
        reference: String,
    },
    /// Clear the stored history
    Clear,
}
