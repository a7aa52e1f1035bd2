//! Sea-ice year calendar handling
//!
//! Phenology is computed over a "sea-ice year" running from 15 February to
//! 14 February of the following calendar year, the window that brackets the
//! Antarctic summer concentration minimum (Massom et al. 2013). This module
//! owns that window: its boundary dates, its length in days, and the mapping
//! from a 0-based time-step index back to a calendar date.

use crate::errors::{IceSeasonError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// One sea-ice year: 15 February of the starting calendar year through
/// 14 February of the next, both ends inclusive.
///
/// The window contains 29 February exactly when the starting year is a leap
/// year, so [`SeaIceYear::num_days`] is 366 for leap starting years and 365
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeaIceYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl SeaIceYear {
    /// Creates the sea-ice year named by its starting calendar year.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the year falls outside the supported
    /// calendar range.
    pub fn new(start_year: i32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(start_year, 2, 15).ok_or_else(|| {
            IceSeasonError::InvalidInput {
                message: format!("year {} is outside the supported calendar range", start_year),
            }
        })?;
        let end = NaiveDate::from_ymd_opt(start_year + 1, 2, 14).ok_or_else(|| {
            IceSeasonError::InvalidInput {
                message: format!("year {} is outside the supported calendar range", start_year + 1),
            }
        })?;
        Ok(Self { start, end })
    }

    /// The calendar year the window starts in.
    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// First day of the window (15 February), inclusive.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (14 February of the next year), inclusive.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of daily time steps the window spans: 366 when the starting
    /// year is a leap year, 365 otherwise.
    #[must_use]
    pub fn num_days(&self) -> usize {
        self.end.signed_duration_since(self.start).num_days() as usize + 1
    }

    /// Converts a 0-based time-step index into the calendar date it falls
    /// on, or `None` when the index lies outside the window.
    #[must_use]
    pub fn date_of_step(&self, step: usize) -> Option<NaiveDate> {
        if step < self.num_days() {
            Some(self.start + Duration::days(step as i64))
        } else {
            None
        }
    }
}
