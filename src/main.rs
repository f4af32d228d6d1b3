//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use premier_pulse::{
    cli::{Commands, PremierPulse},
    commands::{
        compare::{handle_compare, handle_search},
        insights::handle_insights,
        leaders::handle_leaders,
        player::handle_player,
        players::handle_players,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = PremierPulse::parse();

    let level = match app.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match app.command {
        Commands::Players {
            source,
            filters,
            facets,
        } => handle_players(source, filters, facets).await?,

        Commands::Leaders {
            source,
            kind,
            limit,
        } => handle_leaders(source, kind, limit).await?,

        Commands::Compare {
            source,
            names,
            stats,
        } => handle_compare(source, names, stats).await?,

        Commands::Search {
            source,
            term,
            exclude,
            limit,
        } => handle_search(source, term, exclude, limit).await?,

        Commands::Insights { source } => handle_insights(source).await?,

        Commands::Player { source, name } => handle_player(source, name).await?,
    }

    Ok(())
}
