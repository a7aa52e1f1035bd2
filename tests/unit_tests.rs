//! Comprehensive unit tests for IceSeason modules
//!
//! These tests provide extensive coverage of the core functionality
//! to ensure reliability and prevent regressions.

use chrono::NaiveDate;
use ice_season::{
    errors::IceSeasonError,
    parallel::ParallelConfig,
    phenology::{compute_season_fields, scan_pixel, PixelClass, SeasonFields, SeasonParams},
    season_year::SeaIceYear,
};
use ndarray::{Array2, Array3};

fn season_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 2, 15).unwrap()
}

fn assert_bit_identical(a: &Array2<f32>, b: &Array2<f32>) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn test_error_types() {
    // Test NetCDF error conversion
    let netcdf_err = IceSeasonError::NetCDFError(netcdf::Error::NotFound("test".to_string()));
    assert!(format!("{}", netcdf_err).contains("NetCDF error"));

    // Test invalid input error
    let input_err = IceSeasonError::InvalidInput {
        message: "threshold out of range".to_string(),
    };
    assert!(format!("{}", input_err).contains("Invalid input"));

    // Test variable not found error
    let var_err = IceSeasonError::VariableNotFound {
        var: "aice".to_string(),
    };
    assert!(format!("{}", var_err).contains("Variable 'aice' not found"));

    // Test dimension not found error
    let dim_err = IceSeasonError::DimensionNotFound {
        var: "aice".to_string(),
        dim: "time".to_string(),
    };
    assert!(format!("{}", dim_err).contains("Dimension 'time' not found in variable 'aice'"));

    // Test generic error
    let generic_err = IceSeasonError::Generic("Test error".to_string());
    assert_eq!(format!("{}", generic_err), "Test error");
}

#[test]
fn test_parallel_config() {
    // Test default configuration
    let default_config = ParallelConfig::new_default();
    assert!(default_config.num_threads.is_none());

    // Test with specific threads
    let config_4 = ParallelConfig::with_threads(4);
    assert_eq!(config_4.num_threads, Some(4));

    // Test all cores configuration
    let all_cores_config = ParallelConfig::all_cores();
    assert!(all_cores_config.num_threads.is_some());
    assert!(all_cores_config.num_threads.unwrap() > 0);

    // Test current threads
    let current = default_config.current_threads();
    assert!(current > 0);
}

#[test]
fn test_season_params_validation() {
    let params = SeasonParams::new(0.15, 5).expect("standard parameters should validate");
    assert_eq!(params.threshold, 0.15);
    assert_eq!(params.min_run, 5);

    let default_params = SeasonParams::default();
    assert_eq!(default_params.threshold, 0.15);
    assert_eq!(default_params.min_run, 5);

    // Threshold bounds are strict
    assert!(SeasonParams::new(0.0, 5).is_err());
    assert!(SeasonParams::new(1.0, 5).is_err());
    assert!(SeasonParams::new(-0.2, 5).is_err());
    assert!(SeasonParams::new(f32::NAN, 5).is_err());

    // Run length must be positive
    assert!(SeasonParams::new(0.15, 0).is_err());

    match SeasonParams::new(1.5, 5) {
        Err(IceSeasonError::InvalidInput { message }) => {
            assert!(message.contains("threshold"));
        }
        _ => panic!("Expected InvalidInput error"),
    }
}

#[test]
fn test_sea_ice_year() {
    let year = SeaIceYear::new(2015).expect("2015 should be a valid year");
    assert_eq!(year.start_year(), 2015);
    assert_eq!(year.start(), NaiveDate::from_ymd_opt(2015, 2, 15).unwrap());
    assert_eq!(year.end(), NaiveDate::from_ymd_opt(2016, 2, 14).unwrap());
    // 29 Feb 2016 falls after the window closes
    assert_eq!(year.num_days(), 365);

    // A leap starting year puts 29 Feb inside the window
    let leap_year = SeaIceYear::new(2016).expect("2016 should be a valid year");
    assert_eq!(leap_year.num_days(), 366);

    // Step-to-date round trips cover both boundary dates
    assert_eq!(year.date_of_step(0), Some(year.start()));
    assert_eq!(year.date_of_step(364), Some(year.end()));
    assert_eq!(year.date_of_step(365), None);
    assert_eq!(
        year.date_of_step(20),
        Some(NaiveDate::from_ymd_opt(2015, 3, 7).unwrap())
    );
}

#[test]
fn test_scan_always_ice() {
    // Concentration constant above threshold for all steps
    let series = [0.20f32; 10];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::AlwaysIce);
    assert_eq!(pixel.advance, 0.0);
    assert_eq!(pixel.retreat, 10.0);
    assert_eq!(pixel.duration, 10.0);
}

#[test]
fn test_scan_never_ice() {
    let series = [0.05f32; 10];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::NeverIce);
    assert!(pixel.advance.is_nan());
    assert!(pixel.retreat.is_nan());
    assert!(pixel.duration.is_nan());
}

#[test]
fn test_scan_seasonal() {
    // Below threshold for steps 0-3, above for 4-8, below for step 9
    let series = [0.05, 0.05, 0.05, 0.05, 0.20, 0.20, 0.20, 0.20, 0.20, 0.05];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::Seasonal);
    assert_eq!(pixel.advance, 4.0);
    assert_eq!(pixel.retreat, 9.0);
    assert_eq!(pixel.duration, 5.0);
}

#[test]
fn test_scan_insufficient_run() {
    // Ice occurs but only for 3 consecutive steps
    let series = [0.05, 0.20, 0.20, 0.20, 0.05, 0.05, 0.05, 0.05, 0.05, 0.05];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::InsufficientRun);
    assert!(pixel.advance.is_nan());
    assert!(pixel.retreat.is_nan());
    assert!(pixel.duration.is_nan());
}

#[test]
fn test_scan_scattered_runs_stay_insufficient() {
    // Six qualifying days in total, but never five in a row
    let series = [0.20, 0.20, 0.20, 0.05, 0.20, 0.20, 0.20, 0.05, 0.05, 0.05];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::InsufficientRun);
    assert!(pixel.advance.is_nan());
    assert!(pixel.retreat.is_nan());
    assert!(pixel.duration.is_nan());
}

#[test]
fn test_scan_min_run_equals_series_length() {
    // Boundary: run length equal to the window resolves to always-ice
    let series = [0.30f32; 8];
    let pixel = scan_pixel(&series, 0.15, 8);

    assert_eq!(pixel.class, PixelClass::AlwaysIce);
    assert_eq!(pixel.advance, 0.0);
    assert_eq!(pixel.retreat, 8.0);
    assert_eq!(pixel.duration, 8.0);
}

#[test]
fn test_scan_threshold_is_inclusive() {
    // A value exactly at the threshold counts as ice covered
    let series = [0.15f32; 6];
    let pixel = scan_pixel(&series, 0.15, 3);
    assert_eq!(pixel.class, PixelClass::AlwaysIce);
}

#[test]
fn test_scan_retreat_follows_last_ice_day() {
    // A qualifying run early on, then a stray ice day near the end: the
    // retreat tracks the end of the last ice-covered stretch
    let series = [
        0.05, 0.05, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.05, 0.20, 0.20, 0.05, 0.05,
    ];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::Seasonal);
    assert_eq!(pixel.advance, 2.0);
    assert_eq!(pixel.retreat, 12.0);
    assert_eq!(pixel.duration, 10.0);
}

#[test]
fn test_scan_ice_through_season_end() {
    // Ice present from mid-window through the final step
    let series = [0.05, 0.05, 0.05, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20, 0.20];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::Seasonal);
    assert_eq!(pixel.advance, 3.0);
    assert_eq!(pixel.retreat, 10.0);
    assert_eq!(pixel.duration, 7.0);
}

#[test]
fn test_scan_all_missing_series() {
    // An all-missing cell degrades to never-ice rather than failing
    let series = [f32::NAN; 10];
    let pixel = scan_pixel(&series, 0.15, 5);

    assert_eq!(pixel.class, PixelClass::NeverIce);
    assert!(pixel.advance.is_nan());
    assert!(pixel.retreat.is_nan());
    assert!(pixel.duration.is_nan());
}

#[test]
fn test_scan_classification_totality() {
    // Every pattern lands in exactly one class, and the outputs always
    // follow the class
    let patterns: Vec<Vec<f32>> = vec![
        vec![0.0; 12],
        vec![0.5; 12],
        vec![f32::NAN; 12],
        vec![0.05, 0.2, 0.2, 0.2, 0.05, 0.2, 0.2, 0.2, 0.05, 0.05, 0.05, 0.05],
        vec![0.05, 0.2, 0.2, 0.2, 0.2, 0.2, 0.05, 0.05, 0.05, 0.05, 0.05, 0.05],
        vec![0.05, 0.05, 0.05, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.05],
        vec![0.2, 0.2, 0.2, 0.2, 0.2, 0.05, 0.05, 0.05, 0.05, 0.2, 0.2, 0.2],
    ];

    for series in &patterns {
        let pixel = scan_pixel(series, 0.15, 5);
        match pixel.class {
            PixelClass::NeverIce | PixelClass::InsufficientRun => {
                assert!(pixel.advance.is_nan());
                assert!(pixel.retreat.is_nan());
                assert!(pixel.duration.is_nan());
            }
            PixelClass::AlwaysIce => {
                assert_eq!(pixel.advance, 0.0);
                assert_eq!(pixel.retreat, series.len() as f32);
                assert_eq!(pixel.duration, series.len() as f32);
            }
            PixelClass::Seasonal => {
                assert!(pixel.advance.is_finite());
                assert!(pixel.retreat.is_finite());
                assert!(pixel.advance <= pixel.retreat);
                assert_eq!(pixel.duration, pixel.retreat - pixel.advance);
            }
        }
    }
}

#[test]
fn test_pixel_class_as_str() {
    assert_eq!(PixelClass::NeverIce.as_str(), "never ice");
    assert_eq!(PixelClass::AlwaysIce.as_str(), "always ice");
    assert_eq!(PixelClass::InsufficientRun.as_str(), "insufficient run");
    assert_eq!(PixelClass::Seasonal.as_str(), "seasonal");
}

#[test]
fn test_compute_season_fields() {
    // 10 time steps over a 2x2 grid with one cell of each regime
    let n_steps = 10;
    let mut data = Array3::<f32>::zeros((n_steps, 2, 2));
    for t in 0..n_steps {
        // (0, 0): open ocean
        data[[t, 0, 0]] = 0.02;
        // (0, 1): year-round ice
        data[[t, 0, 1]] = 0.90;
        // (1, 0): seasonal, above threshold for steps 4-8
        data[[t, 1, 0]] = if (4..9).contains(&t) { 0.20 } else { 0.05 };
        // (1, 1): a single short run
        data[[t, 1, 1]] = if (2..5).contains(&t) { 0.20 } else { 0.05 };
    }

    let params = SeasonParams::default();
    let fields =
        compute_season_fields(&data, &params, season_start()).expect("computation should succeed");

    assert_eq!(fields.advance.shape(), &[2, 2]);
    assert_eq!(fields.season_start, season_start());

    // Open ocean
    assert!(fields.advance[[0, 0]].is_nan());
    assert!(fields.retreat[[0, 0]].is_nan());
    assert!(fields.duration[[0, 0]].is_nan());

    // Year-round ice
    assert_eq!(fields.advance[[0, 1]], 0.0);
    assert_eq!(fields.retreat[[0, 1]], 10.0);
    assert_eq!(fields.duration[[0, 1]], 10.0);

    // Seasonal
    assert_eq!(fields.advance[[1, 0]], 4.0);
    assert_eq!(fields.retreat[[1, 0]], 9.0);
    assert_eq!(fields.duration[[1, 0]], 5.0);

    // Insufficient run
    assert!(fields.advance[[1, 1]].is_nan());
    assert!(fields.retreat[[1, 1]].is_nan());
    assert!(fields.duration[[1, 1]].is_nan());
}

#[test]
fn test_compute_season_fields_is_idempotent() {
    let n_steps = 20;
    let mut data = Array3::<f32>::zeros((n_steps, 3, 3));
    for t in 0..n_steps {
        for y in 0..3 {
            for x in 0..3 {
                let onset = 2 + 2 * y + x;
                let melt = 15 + y;
                data[[t, y, x]] = if t >= onset && t < melt { 0.7 } else { 0.02 };
            }
        }
    }

    let params = SeasonParams::default();
    let first = compute_season_fields(&data, &params, season_start()).unwrap();
    let second = compute_season_fields(&data, &params, season_start()).unwrap();

    assert_bit_identical(&first.advance, &second.advance);
    assert_bit_identical(&first.retreat, &second.retreat);
    assert_bit_identical(&first.duration, &second.duration);
}

#[test]
fn test_compute_season_fields_seasonal_invariants() {
    let n_steps = 30;
    let mut data = Array3::<f32>::zeros((n_steps, 4, 4));
    for t in 0..n_steps {
        for y in 0..4 {
            for x in 0..4 {
                let onset = 3 + y + 2 * x;
                let melt = 28 - y;
                data[[t, y, x]] = if t >= onset && t < melt { 0.6 } else { 0.01 };
            }
        }
    }

    let params = SeasonParams::default();
    let fields = compute_season_fields(&data, &params, season_start()).unwrap();

    for ((adv, ret), dur) in fields
        .advance
        .iter()
        .zip(fields.retreat.iter())
        .zip(fields.duration.iter())
    {
        if adv.is_finite() && ret.is_finite() {
            assert!(adv <= ret);
            assert_eq!(*dur, ret - adv);
        } else {
            assert!(dur.is_nan());
        }
    }
}

#[test]
fn test_compute_season_fields_rejects_bad_input() {
    let data = Array3::<f32>::zeros((10, 2, 2));
    let start = season_start();

    // Run length exceeding the window
    let too_long = SeasonParams {
        threshold: 0.15,
        min_run: 11,
    };
    match compute_season_fields(&data, &too_long, start) {
        Err(IceSeasonError::InvalidInput { message }) => {
            assert!(message.contains("run length"));
        }
        _ => panic!("Expected InvalidInput error"),
    }

    // Invalid threshold smuggled past the constructor
    let bad_threshold = SeasonParams {
        threshold: 1.2,
        min_run: 5,
    };
    assert!(compute_season_fields(&data, &bad_threshold, start).is_err());

    // Empty grid
    let empty = Array3::<f32>::zeros((0, 2, 2));
    assert!(compute_season_fields(&empty, &SeasonParams::default(), start).is_err());
}

#[test]
fn test_season_fields_clone_keeps_data() {
    let data = Array3::<f32>::from_elem((6, 2, 2), 0.5);
    let fields =
        compute_season_fields(&data, &SeasonParams::new(0.15, 3).unwrap(), season_start()).unwrap();
    let cloned: SeasonFields = fields.clone();
    assert_bit_identical(&fields.duration, &cloned.duration);
}
