//! Use clap crate to parse command line arguments

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use hailstorm::solver::BackendKind;

/// Represents the command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Params {
    /// Puzzle input (`px, py, pz @ vx, vy, vz` per line) or a `.toml` data file.
    /// The built-in observations are used when omitted.
    pub input: Option<PathBuf>,

    /// Which part of the puzzle to solve
    #[arg(long, default_value_t = 2)]
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Decision procedure for part two [ elimination, z3 ]
    #[arg(long, default_value_t = BackendKind::Elimination)]
    pub backend: BackendKind,

    /// Lower bound of the part one test area (inclusive)
    #[arg(long)]
    pub min: Option<i64>,

    /// Upper bound of the part one test area (exclusive)
    #[arg(long)]
    pub max: Option<i64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the constraint system before solving it
    #[arg(long)]
    pub dump_constraints: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}
