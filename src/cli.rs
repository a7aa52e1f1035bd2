//! Defines command-line interface options using `clap` for the IceSeason application.

use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for computing sea-ice season timing from NetCDF concentration fields
#[derive(Parser, Debug)]
#[command(
    version = "0.3.0",
    name = "IceSeason",
    about = "App for deriving sea-ice advance, retreat and season duration from NetCDF files"
)]
pub struct Args {
    /// Path to the NetCDF file holding sea-ice concentration
    #[arg(short, long)]
    pub file: PathBuf,

    /// Concentration variable to scan. Defaults to the single candidate found in the file.
    #[arg(long)]
    pub variable: Option<String>,

    /// Sea-ice year to analyse, named by its starting calendar year (the window runs 15 Feb - 14 Feb)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Concentration threshold for ice presence, strictly between 0 and 1
    #[arg(long, default_value_t = 0.15, value_parser = parse_threshold)]
    pub threshold: f32,

    /// Consecutive days at or above the threshold required for an advance
    #[arg(long, default_value_t = 5)]
    pub min_days: usize,

    /// Directory to write the advance/retreat/duration files. If not set, prints a summary only.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Prefix for output file names
    #[arg(long, default_value = "seaice")]
    pub prefix: String,

    /// Number of threads to use for parallel processing. Defaults to the Rayon default.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// List all variables and dimensions in the NetCDF file
    #[arg(long)]
    pub list_vars: bool,

    /// Describe a specific variable (data type, shape, and attributes)
    #[arg(long)]
    pub describe: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err("Threshold must lie strictly between 0 and 1.".to_string())
    }
}
