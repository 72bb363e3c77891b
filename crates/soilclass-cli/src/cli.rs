//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// soilclass: simplified USCS soil classification
#[derive(Parser)]
#[command(name = "soilclass")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a soil sample and print the summary
    Classify {
        #[command(flatten)]
        input: SampleArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the gradation curve as plot-ready points
    Curve {
        #[command(flatten)]
        input: SampleArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where the sample readings come from: a file, or inline flags.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Sample file (JSON, CSV or TSV)
    #[arg(value_name = "FILE", conflicts_with = "retained")]
    pub file: Option<PathBuf>,

    /// Percentages retained on the 75, 19, 4.75, 2, 0.425 and 0.075 mm sieves
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub retained: Vec<f64>,

    /// Liquid limit (LL) in %
    #[arg(long = "ll", allow_negative_numbers = true)]
    pub liquid_limit: Option<f64>,

    /// Plastic limit (PL) in %
    #[arg(long = "pl", allow_negative_numbers = true)]
    pub plastic_limit: Option<f64>,

    /// Natural moisture content in %
    #[arg(long, allow_negative_numbers = true)]
    pub moisture: Option<f64>,

    /// Sample identifier shown in the report
    #[arg(long)]
    pub sample_id: Option<String>,
}
