//! Entry point for the IceSeason application.
//! Handles CLI parsing, file loading, and dispatches inspection or the phenology scan.

use clap::Parser;
use netcdf::open;

use ice_season::cli::Args;
use ice_season::errors::{IceSeasonError, Result};
use ice_season::metadata::{describe_variable, find_concentration_variables, print_metadata};
use ice_season::netcdf_io::SeasonWriter;
use ice_season::parallel::ParallelConfig;
use ice_season::phenology::{season_fields_from_file, SeasonParams};
use ice_season::season_year::SeaIceYear;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
             _____           _____
            |_   _|         / ____|
              | |  ___ ___ | (___   ___  __ _ ___  ___  _ __
              | | / __/ _ \ \___ \ / _ \/ _` / __|/ _ \| '_ \
             _| || (_|  __/ ____) |  __/ (_| \__ \ (_) | | | |
            |_____\___\___||_____/ \___|\__,_|___/\___/|_| |_|
                    Rust-based sea-ice season tool
------------------------------------------------------------------
                        "#
    );

    if let Some(num_threads) = args.threads {
        ParallelConfig::with_threads(num_threads).setup_global_pool()?;
        if args.verbose {
            println!("✅ Configured parallel processing with {} threads", num_threads);
        }
    }

    // Open NetCDF file
    let file = open(&args.file)?;
    println!("Successfully opened NetCDF file: {}", args.file.display());

    if args.list_vars {
        print_metadata(&file)?;
        return Ok(());
    }

    if let Some(var_name) = &args.describe {
        describe_variable(&file, var_name)?;
        return Ok(());
    }

    let year = match args.year {
        Some(y) => SeaIceYear::new(y)?,
        None => {
            return Err(IceSeasonError::InvalidInput {
                message: "no sea-ice year given; pass --year <YYYY> (the window runs 15 Feb - 14 Feb)"
                    .to_string(),
            })
        }
    };

    let var_name = match args.variable {
        Some(name) => name,
        None => {
            let mut candidates = find_concentration_variables(&file);
            match candidates.len() {
                0 => {
                    return Err(IceSeasonError::InvalidInput {
                        message: "no (time, y, x) variable found in the file; pass --variable"
                            .to_string(),
                    })
                }
                1 => {
                    let name = candidates.remove(0);
                    println!("Using concentration variable '{}'", name);
                    name
                }
                _ => {
                    return Err(IceSeasonError::InvalidInput {
                        message: format!(
                            "several candidate variables found ({}); pass --variable",
                            candidates.join(", ")
                        ),
                    })
                }
            }
        }
    };

    let params = SeasonParams::new(args.threshold, args.min_days)?;

    println!(
        "⚡ Scanning '{}' for the {} sea-ice year ({} - {}), threshold {}, {} consecutive days",
        var_name,
        year.start_year(),
        year.start(),
        year.end(),
        params.threshold,
        params.min_run
    );

    let (fields, dim_names) = season_fields_from_file(&file, &var_name, year, &params)?;

    // Season summary over the duration grid
    let n_cells = fields.duration.len();
    let durations: Vec<f32> = fields
        .duration
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .collect();

    println!("\n Season summary");
    println!("==================");
    println!("   Grid cells: {}", n_cells);
    println!("   Cells with a defined season: {}", durations.len());
    if !durations.is_empty() {
        let min = durations.iter().copied().fold(f32::INFINITY, f32::min);
        let max = durations.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = durations.iter().sum::<f32>() / durations.len() as f32;
        println!(
            "   Duration min/mean/max: {:.0} / {:.1} / {:.0} days",
            min, mean, max
        );
    }

    if let Some(output_dir) = args.output_dir {
        let writer = SeasonWriter::new(&file, &output_dir);
        let paths = writer.write_fields(&fields, &dim_names, &args.prefix)?;
        for path in paths {
            println!("✅ Saved {}", path.display());
        }
    } else {
        println!("\n💡 Tip: Use --output-dir <DIR> to save the three fields as NetCDF");
    }

    Ok(())
}
