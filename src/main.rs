mod cli;

use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::History { action }) => handlers::handle_history(&action)?,
        Some(Commands::Card) | None => handlers::handle_card(cli.date.as_deref(), cli.json)?,
    }

    Ok(())
}
