//! IceSeason: sea-ice phenology from NetCDF concentration fields
//!
//! A Rust library for deriving per-pixel sea-ice season timing — day of
//! advance, day of retreat, and season duration — from a daily sea-ice
//! concentration field covering one sea-ice year (15 February to
//! 14 February, Massom et al. 2013). Grid cells are scanned independently
//! and in parallel using Rayon.
//!
//! ## Key Features
//!
//! - **Streak scan**: advance is the start of the first run of consecutive
//!   days at or above the concentration threshold, retreat the end of the
//!   last ice-covered day
//! - **Per-pixel classification**: open ocean, year-round ice, and cells
//!   whose ice never persists long enough are told apart from seasonal ice
//! - **NetCDF in, NetCDF out**: reads a (time, y, x) concentration variable
//!   and writes one self-describing file per output grid
//! - **Parallel Processing**: efficient computation using Rayon across the
//!   spatial grid
//!
//! ## Module Organization
//!
//! - [`phenology`]: the per-pixel scan, grid evaluation, and NetCDF front-end
//! - [`season_year`]: the 15 Feb - 14 Feb calendar window
//! - [`metadata`]: NetCDF file inspection and variable discovery
//! - [`netcdf_io`]: writing the computed grids back to NetCDF
//! - [`parallel`]: parallel processing configuration
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ice_season::prelude::*;
//! use netcdf::open;
//!
//! // Open a file holding one sea-ice year of daily concentration
//! let file = open("aice_2015.nc").unwrap();
//!
//! // Scan it with the standard 15% / 5-day definition
//! let year = SeaIceYear::new(2015).unwrap();
//! let params = SeasonParams::default();
//! let (fields, dims) =
//!     ice_season::phenology::season_fields_from_file(&file, "aice", year, &params).unwrap();
//!
//! println!("advance grid shape: {:?}", fields.advance.shape());
//! # let _ = dims;
//! ```

// Core modules
pub mod cli;
pub mod errors;
pub mod metadata;
pub mod netcdf_io;
pub mod parallel;
pub mod phenology;
pub mod season_year;

// Direct re-exports for the public API
pub use errors::*;
pub use phenology::*;
pub use season_year::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::errors::{IceSeasonError, Result};
    pub use crate::netcdf_io::SeasonWriter;
    pub use crate::parallel::ParallelConfig;
    pub use crate::phenology::{
        compute_season_fields, scan_pixel, season_fields_from_file, PixelClass, PixelSeason,
        SeasonFields, SeasonParams,
    };
    pub use crate::season_year::SeaIceYear;
}
