//! Parallel evaluation of the phenology scan over a spatial grid
//!
//! Grid cells are independent, so the (y, x) plane is flattened and scanned
//! with Rayon. The result is deterministic: the same input always produces
//! bit-identical grids.

use crate::errors::{IceSeasonError, Result};
use crate::phenology::scan::{scan_pixel, SeasonParams};
use chrono::NaiveDate;
use ndarray::{s, Array2, Array3};
use rayon::prelude::*;

/// The three per-year phenology grids plus the season start date they
/// describe.
///
/// Each grid holds one scalar per cell; `f32::NAN` marks cells with no
/// defined advance or retreat. The grids are per-year snapshots, not time
/// series, so a single date labels all three.
#[derive(Debug, Clone)]
pub struct SeasonFields {
    /// 0-based time step of first sustained ice advance
    pub advance: Array2<f32>,
    /// One past the last ice-covered time step
    pub retreat: Array2<f32>,
    /// `retreat - advance`
    pub duration: Array2<f32>,
    /// Start of the sea-ice year the grids describe (15 February)
    pub season_start: NaiveDate,
}

/// Runs the per-pixel scan over a (time, y, x) concentration field.
///
/// # Errors
///
/// Returns `InvalidInput` if the parameters fail validation, if the field
/// is empty in any dimension, or if `params.min_run` exceeds the number of
/// time steps. No partial output is produced on failure.
pub fn compute_season_fields(
    conc: &Array3<f32>,
    params: &SeasonParams,
    season_start: NaiveDate,
) -> Result<SeasonFields> {
    params.validate()?;

    let (n_steps, ny, nx) = conc.dim();

    if n_steps == 0 || ny == 0 || nx == 0 {
        return Err(IceSeasonError::InvalidInput {
            message: format!(
                "concentration field has an empty dimension: ({}, {}, {})",
                n_steps, ny, nx
            ),
        });
    }
    if params.min_run > n_steps {
        return Err(IceSeasonError::InvalidInput {
            message: format!(
                "minimum run length {} exceeds the {} time steps in the field",
                params.min_run, n_steps
            ),
        });
    }

    let scanned: Vec<(f32, f32, f32)> = (0..ny * nx)
        .into_par_iter()
        .map(|flat_idx| {
            let y = flat_idx / nx;
            let x = flat_idx % nx;
            let series: Vec<f32> = conc.slice(s![.., y, x]).iter().copied().collect();
            let pixel = scan_pixel(&series, params.threshold, params.min_run);
            (pixel.advance, pixel.retreat, pixel.duration)
        })
        .collect();

    let mut advance = Vec::with_capacity(scanned.len());
    let mut retreat = Vec::with_capacity(scanned.len());
    let mut duration = Vec::with_capacity(scanned.len());
    for (adv, ret, dur) in scanned {
        advance.push(adv);
        retreat.push(ret);
        duration.push(dur);
    }

    Ok(SeasonFields {
        advance: Array2::from_shape_vec((ny, nx), advance)?,
        retreat: Array2::from_shape_vec((ny, nx), retreat)?,
        duration: Array2::from_shape_vec((ny, nx), duration)?,
        season_start,
    })
}
