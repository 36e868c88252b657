//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fantasy_mlb::{
    cli::{Commands, FantasyMlb},
    commands::{
        import::handle_import,
        schemas::handle_schemas,
        score::{handle_score, ScoreParams, ScoreSource},
        sheets::handle_sheets,
    },
};

fn main() -> anyhow::Result<()> {
    let app = FantasyMlb::parse();

    match app.command {
        Commands::Score {
            sheet,
            csv,
            stored,
            settings,
            name,
            json,
            verbose,
        } => {
            let source = match (csv, stored) {
                (Some(path), false) => ScoreSource::Csv(path),
                (None, true) => ScoreSource::Stored,
                _ => {
                    eprintln!("Error: provide exactly one of --csv or --stored");
                    std::process::exit(1);
                }
            };
            handle_score(ScoreParams {
                provider: sheet.provider,
                position: sheet.position,
                season: sheet.season,
                source,
                settings,
                name,
                as_json: json,
                verbose,
            })?
        }

        Commands::Import {
            sheet,
            csv,
            verbose,
        } => handle_import(csv, sheet.provider, sheet.position, sheet.season, verbose)?,

        Commands::Schemas => handle_schemas()?,

        Commands::Sheets => handle_sheets()?,
    }

    Ok(())
}
