//! NetCDF front-end for the phenology scan
//!
//! Resolves a concentration variable and its time axis, checks the axis
//! against the declared sea-ice year, and hands the data to
//! [`grid::compute_season_fields`](crate::phenology::grid::compute_season_fields).

use crate::errors::{IceSeasonError, Result};
use crate::phenology::grid::{compute_season_fields, SeasonFields};
use crate::phenology::scan::SeasonParams;
use crate::season_year::SeaIceYear;
use ndarray::{ArrayD, Ix3};
use netcdf::{AttributeValue, File};

/// Name of the time dimension expected on concentration variables.
pub const TIME_DIM: &str = "time";

/// Largest deviation from exact one-day spacing tolerated on the time axis.
const DAILY_SPACING_TOL: f64 = 1e-6;

/// Computes the phenology grids for one variable of a NetCDF file.
///
/// The variable must be three-dimensional with a dimension named `time` in
/// any position; the array is brought into (time, y, x) order before the
/// scan. The time length must equal the day count of `year`, and a 1-D
/// `time` coordinate variable with day-based units, when present, must step
/// by exactly one day.
///
/// Returns the computed fields together with the names of the two spatial
/// dimensions, in the order the output grids use them.
///
/// # Errors
///
/// Returns an error if the variable or its time dimension is not found, or
/// if the time axis does not span the declared sea-ice year.
pub fn season_fields_from_file(
    file: &File,
    var_name: &str,
    year: SeaIceYear,
    params: &SeasonParams,
) -> Result<(SeasonFields, Vec<String>)> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| IceSeasonError::VariableNotFound {
            var: var_name.to_string(),
        })?;

    let dim_names: Vec<String> = var
        .dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();

    if dim_names.len() != 3 {
        return Err(IceSeasonError::InvalidInput {
            message: format!(
                "variable '{}' has {} dimensions, expected a (time, y, x) field",
                var_name,
                dim_names.len()
            ),
        });
    }

    let time_axis = dim_names
        .iter()
        .position(|d| d == TIME_DIM)
        .ok_or_else(|| IceSeasonError::DimensionNotFound {
            var: var_name.to_string(),
            dim: TIME_DIM.to_string(),
        })?;

    let shape: Vec<usize> = var
        .dimensions()
        .iter()
        .map(netcdf::Dimension::len)
        .collect();

    let n_steps = shape[time_axis];
    if n_steps != year.num_days() {
        return Err(IceSeasonError::InvalidInput {
            message: format!(
                "variable '{}' has {} time steps but the {} sea-ice year spans {} days",
                var_name,
                n_steps,
                year.start_year(),
                year.num_days()
            ),
        });
    }

    check_daily_time_axis(file, n_steps)?;

    let data_vec = var.get_values::<f32, _>(..)?;
    let data = ArrayD::from_shape_vec(shape, data_vec)?.into_dimensionality::<Ix3>()?;

    // Bring the time axis to the front; the spatial axes keep their order.
    let data = match time_axis {
        0 => data,
        1 => data.permuted_axes([1, 0, 2]),
        _ => data.permuted_axes([2, 0, 1]),
    };

    let spatial_dims: Vec<String> = dim_names
        .into_iter()
        .enumerate()
        .filter_map(|(i, name)| if i == time_axis { None } else { Some(name) })
        .collect();

    let fields = compute_season_fields(&data, params, year.start())?;

    Ok((fields, spatial_dims))
}

/// Rejects a time coordinate whose values are not contiguous daily steps.
///
/// Only enforced when the file carries a 1-D `time` coordinate variable
/// whose units are day-based; files without one rely on the length check
/// alone.
fn check_daily_time_axis(file: &File, n_steps: usize) -> Result<()> {
    let time_var = match file.variable(TIME_DIM) {
        Some(v) if v.dimensions().len() == 1 => v,
        _ => return Ok(()),
    };

    let day_units = time_var
        .attribute("units")
        .and_then(|attr| match attr.value().ok()? {
            AttributeValue::Str(units) => Some(units.starts_with("days since")),
            _ => None,
        })
        .unwrap_or(false);
    if !day_units {
        return Ok(());
    }

    let values = time_var.get_values::<f64, _>(..)?;
    if values.len() != n_steps {
        return Err(IceSeasonError::InvalidInput {
            message: format!(
                "time coordinate has {} values but the variable has {} time steps",
                values.len(),
                n_steps
            ),
        });
    }

    for pair in values.windows(2) {
        if (pair[1] - pair[0] - 1.0).abs() > DAILY_SPACING_TOL {
            return Err(IceSeasonError::InvalidInput {
                message: format!(
                    "time axis is not contiguous daily steps: gap of {} days",
                    pair[1] - pair[0]
                ),
            });
        }
    }

    Ok(())
}
