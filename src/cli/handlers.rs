use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;

use taqwim::{DateRecord, ReferenceHistory, UmmAlQura, UrduLocale};

use super::args::HistoryCommands;

pub fn handle_card(date: Option<&str>, json: bool) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))?,
        None => chrono::Local::now().date_naive(),
    };
    debug!("resolving card record for {date}");

    let record = DateRecord::resolve(&UmmAlQura, &UrduLocale, date)
        .with_context(|| format!("Resolving Hijri date for {}", date))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.weekday);
        println!(
            "{} {} {}",
            record.hijri.day, record.hijri.month, record.hijri.year
        );
        println!(
            "{} {} {}",
            record.gregorian.day, record.gregorian.month, record.gregorian.year
        );
    }
    Ok(())
}

pub fn handle_history(action: &HistoryCommands) -> Result<()> {
    let mut history = ReferenceHistory::load()?;
    match action {
        HistoryCommands::List => {
            if history.is_empty() {
                println!("No references recorded.");
            }
            for reference in history.references() {
                println!("{}", reference);
            }
        }
        HistoryCommands::Add { reference } => {
            history.record(reference);
            history.save()?;
            println!("Recorded ({} stored).", history.len());
        }
        HistoryCommands::Clear => {
            history.clear();
            history.save()?;
            println!("History cleared.");
        }
    }
    Ok(())
}
