use algebra_lab::{IntOperation, Section};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "algebra_lab")]
#[command(author, version, about = "Explore binary operations, finite rings, rotations and symmetry groups")]
pub struct Cli {
    /// JSON file with demonstration parameters
    #[arg(long, env = "ALGEBRA_LAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run only this section (repeatable, keeps the given order)
    #[arg(long = "section", value_enum)]
    pub sections: Vec<Section>,

    /// Verify Z/nZ for this modulus (repeatable)
    #[arg(long = "modulus", value_name = "N")]
    pub moduli: Vec<u64>,

    /// Operation of the set demo, e.g. "a*b+1" or "(a+b) mod 5"
    #[arg(long)]
    pub operation: Option<IntOperation>,

    /// Seed for the random example generator
    #[arg(long, env = "ALGEBRA_LAB_SEED")]
    pub seed: Option<u64>,

    /// Write the JSON report to PATH, or to stdout when no path is given
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub json: Option<Option<PathBuf>>,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log level for the verbosity count; `RUST_LOG` still wins
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
