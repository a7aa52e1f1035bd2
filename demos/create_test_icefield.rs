//! Creates a sample NetCDF concentration file for exercising IceSeason.
//!
//! The file holds one sea-ice year (15 Feb 2015 - 14 Feb 2016) of daily
//! synthetic `aice` data on a small grid, with an open-ocean band, seasonal
//! bands whose onset shifts southward, and a band of year-round pack ice.

use ndarray::{Array1, Array3};
use netcdf::create;
use std::path::Path;

const N_DAYS: usize = 365;
const NY: usize = 6;
const NX: usize = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = Path::new("aice_2015.nc");

    println!("🔨 Creating test NetCDF file: {}", output_path.display());

    if output_path.exists() {
        std::fs::remove_file(output_path)?
    }

    let mut file = create(output_path)?;

    // Add global attributes
    file.add_attribute("title", "Synthetic sea-ice concentration")?;
    file.add_attribute("institution", "IceSeason test suite")?;
    file.add_attribute("created_by", "create_test_icefield.rs")?;

    // Add dimensions
    file.add_dimension("time", N_DAYS)?;
    file.add_dimension("nj", NY)?;
    file.add_dimension("ni", NX)?;

    // Time coordinate: contiguous daily steps across the sea-ice year
    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 2015-02-15")?;
        time_var.put_attribute("long_name", "time")?;
        time_var.put_attribute("calendar", "standard")?;

        let time_data: Vec<f64> = (0..N_DAYS).map(|i| i as f64).collect();
        time_var.put(Array1::from(time_data).view(), ..)?;
    }

    // Spatial coordinates
    {
        let mut nj_var = file.add_variable::<f64>("nj", &["nj"])?;
        nj_var.put_attribute("units", "degrees_north")?;
        nj_var.put_attribute("long_name", "latitude")?;

        let nj_data: Vec<f64> = (0..NY).map(|j| -62.0 - 2.0 * j as f64).collect();
        nj_var.put(Array1::from(nj_data).view(), ..)?;
    }

    {
        let mut ni_var = file.add_variable::<f64>("ni", &["ni"])?;
        ni_var.put_attribute("units", "degrees_east")?;
        ni_var.put_attribute("long_name", "longitude")?;

        let ni_data: Vec<f64> = (0..NX).map(|i| i as f64 * 45.0 - 180.0).collect();
        ni_var.put(Array1::from(ni_data).view(), ..)?;
    }

    // Concentration: open ocean in the top row, year-round pack in the
    // bottom row, and in between a seasonal cycle whose ice-covered window
    // widens towards the pole.
    {
        let mut aice_var = file.add_variable::<f32>("aice", &["time", "nj", "ni"])?;
        aice_var.put_attribute("units", "1")?;
        aice_var.put_attribute("long_name", "sea ice concentration")?;

        let mut aice_data = Vec::with_capacity(N_DAYS * NY * NX);
        for t in 0..N_DAYS {
            for j in 0..NY {
                for i in 0..NX {
                    aice_data.push(concentration(t, j, i));
                }
            }
        }

        let aice_array = Array3::from_shape_vec((N_DAYS, NY, NX), aice_data)?;
        aice_var.put(aice_array.view(), ..)?;
    }

    println!("✅ Successfully created test NetCDF file with:");
    println!("   📏 Dimensions: time({}), nj({}), ni({})", N_DAYS, NY, NX);
    println!("   📈 Variables: time, nj, ni, aice");
    println!("\n🧪 Scan it with:");
    println!("   cargo run -- -f aice_2015.nc --year 2015 --output-dir .");

    Ok(())
}

fn concentration(t: usize, j: usize, i: usize) -> f32 {
    match j {
        // Open ocean
        0 => 0.02,
        // Perennial pack ice
        5 => 0.95,
        // Seasonal: advance earlier and retreat later towards the pole,
        // with a little zonal phase shift so columns differ
        _ => {
            let onset = 60 + j * 15 + i;
            let melt = 320 - j * 10 + i;
            if t >= onset && t < melt {
                0.80
            } else {
                0.05
            }
        }
    }
}
