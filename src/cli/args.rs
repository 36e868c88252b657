//! CLI argument definitions and parsing structures.

use super::types::{Position, Provider, Season};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Arguments identifying one projection sheet: provider, position, season.
#[derive(Debug, Args)]
pub struct SheetKey {
    /// Projection provider: `fangraphs` or `fantasypros`.
    #[clap(long, short = 'P', value_parser = clap::value_parser!(Provider))]
    pub provider: Provider,

    /// Player position: `batter` or `pitcher`.
    #[clap(long, short = 'p', value_parser = clap::value_parser!(Position))]
    pub position: Position,

    /// Season tag (e.g. 2025); echoed into output metadata.
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Parser)]
#[clap(name = "fantasy-mlb", about = "Fantasy baseball projection scoring CLI")]
pub struct FantasyMlb {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a projection sheet into fantasy points under league weights.
    ///
    /// Reads a provider CSV export (or a previously imported sheet) and
    /// prints one total per player, in sheet order.
    Score {
        #[clap(flatten)]
        sheet: SheetKey,

        /// Path to a provider CSV export (header row included).
        #[clap(long, required_unless_present = "stored", conflicts_with = "stored")]
        csv: Option<PathBuf>,

        /// Score the imported sheet for this key instead of reading a CSV.
        #[clap(long)]
        stored: bool,

        /// Path to a league scoring weights JSON file.
        #[clap(long)]
        settings: PathBuf,

        /// Projection set name echoed back with the results.
        #[clap(long, default_value = "projections")]
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Import a provider CSV into local storage for later scoring.
    ///
    /// Replaces any previously imported sheet with the same provider,
    /// position, and season.
    Import {
        #[clap(flatten)]
        sheet: SheetKey,

        /// Path to a provider CSV export (header row included).
        #[clap(long)]
        csv: PathBuf,

        /// Print progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// List the registered provider sheet layouts.
    Schemas,

    /// List imported sheets and their player counts.
    Sheets,
}
