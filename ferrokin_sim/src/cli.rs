// ferrokin_sim/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// ferrokin: validates frame-level kinematic derivatives on scenario models.
///
/// This struct defines the command-line arguments of the scenario runner.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The scenario TOML file to run, or a directory of them.
    #[arg(
        short,
        long,
        default_value = "assets/scenarios/two_link_planar.toml"
    )]
    pub scenario: PathBuf,

    /// Overrides the scenario's PRNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overrides the number of sampled joint states.
    #[arg(long)]
    pub samples: Option<usize>,

    /// Writes the validation reports to this file as TOML.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Raises the log level to debug. `RUST_LOG` takes precedence when set.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
