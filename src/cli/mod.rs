/*!
CLI (component I, ambient).

A declarative [clap] parser exposing exactly the flags of the external
interface, translated into a [RunConfig](crate::config::RunConfig) plus a
list of initial-suite paths to absorb. Kept in the library (rather than
only in the `pairgen` binary) so flag parsing is unit-testable by
constructing [Args] directly, without spawning the compiled binary.
*/

use std::path::PathBuf;

use clap::Parser;

use crate::config::{OutputFormat, RunConfig};

/// Generates a pairwise covering-array test suite from a category-partition specification.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Verbose tracing to stderr.
    #[arg(short, long)]
    pub debug: bool,

    /// Print license and exit.
    #[arg(short, long)]
    pub license: bool,

    /// Output format CSV (default: plain tabular).
    #[arg(short, long)]
    pub csv: bool,

    /// Output only multiple-valued columns.
    #[arg(short, long)]
    pub varying: bool,

    /// Emit only single/error vectors (skip the pairs phase).
    #[arg(short, long)]
    pub singles: bool,

    /// Skip the singles phase.
    #[arg(short = 'o', long = "omit-singles")]
    pub omit_singles: bool,

    /// Read a prior CSV suite to drain obligations before the pairs phase. Repeatable.
    #[arg(short, long = "initial")]
    pub initial: Vec<PathBuf>,

    /// Print the list of still-required pairs after absorbing initials.
    #[arg(short, long)]
    pub pairs: bool,

    /// Fix the run's pseudorandom source for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Derives the core's [RunConfig] from parsed flags.
    ///
    /// `-s/--singles` takes priority over `-o/--omit-singles`: asking for
    /// singles-only still runs the singles phase even if omission was also
    /// (contradictorily) requested.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            seed: self.seed,
            max_candidates: crate::procedures::DEFAULT_MAX_CANDIDATES,
            run_pairs: !self.singles,
            run_singles: self.singles || !self.omit_singles,
            varying_only: self.varying,
            output_format: if self.csv {
                OutputFormat::Csv
            } else {
                OutputFormat::Plain
            },
        }
    }
}
