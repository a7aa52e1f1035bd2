//! Per-pixel streak scan and classification
//!
//! The scan walks one concentration time series once, tracking a streak
//! counter of consecutive steps at or above the threshold. The counter
//! resets on any step below it. The first streak to reach the required run
//! length fixes the advance; the last qualifying step fixes the retreat.

use crate::errors::{IceSeasonError, Result};

/// Detection parameters for the phenology scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonParams {
    /// Concentration at or above which a grid cell counts as ice covered
    pub threshold: f32,
    /// Consecutive qualifying days required for an advance
    pub min_run: usize,
}

impl SeasonParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the threshold lies outside (0, 1) or the
    /// run length is zero.
    pub fn new(threshold: f32, min_run: usize) -> Result<Self> {
        let params = Self { threshold, min_run };
        params.validate()?;
        Ok(params)
    }

    /// Checks the parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on a threshold outside (0, 1) or a zero run
    /// length.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(IceSeasonError::InvalidInput {
                message: format!(
                    "threshold must lie strictly between 0 and 1, got {}",
                    self.threshold
                ),
            });
        }
        if self.min_run == 0 {
            return Err(IceSeasonError::InvalidInput {
                message: "minimum run length must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SeasonParams {
    /// The Massom et al. (2013) values: 15% concentration held for 5 days.
    fn default() -> Self {
        Self {
            threshold: 0.15,
            min_run: 5,
        }
    }
}

/// How a grid cell's concentration series relates to the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Never at or above the threshold (an all-missing series lands here too)
    NeverIce,
    /// At or above the threshold on every time step
    AlwaysIce,
    /// Ice occurs but no run of consecutive qualifying days is long enough
    InsufficientRun,
    /// A qualifying advance run exists and the ice later clears
    Seasonal,
}

impl PixelClass {
    /// Get the string representation of the classification
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NeverIce => "never ice",
            Self::AlwaysIce => "always ice",
            Self::InsufficientRun => "insufficient run",
            Self::Seasonal => "seasonal",
        }
    }
}

/// Scan result for a single grid cell.
///
/// `f32::NAN` marks an undefined value. A valid advance of `0.0` (ice from
/// the first day of the window) is distinct from missing.
#[derive(Debug, Clone, Copy)]
pub struct PixelSeason {
    pub class: PixelClass,
    /// 0-based time step the first qualifying run starts on
    pub advance: f32,
    /// One past the last time step at or above the threshold
    pub retreat: f32,
    /// `retreat - advance` when both are defined
    pub duration: f32,
}

impl PixelSeason {
    const fn undefined(class: PixelClass) -> Self {
        Self {
            class,
            advance: f32::NAN,
            retreat: f32::NAN,
            duration: f32::NAN,
        }
    }
}

/// Scans one concentration time series for advance, retreat and duration.
///
/// Missing input values (NaN) compare below any threshold, so an
/// all-missing series classifies as [`PixelClass::NeverIce`] rather than
/// failing. A series at or above the threshold on every step classifies as
/// [`PixelClass::AlwaysIce`] even when `min_run` equals the series length.
#[must_use]
pub fn scan_pixel(series: &[f32], threshold: f32, min_run: usize) -> PixelSeason {
    let n_steps = series.len();

    let mut total_above = 0usize;
    let mut streak = 0usize;
    let mut advance_start: Option<usize> = None;
    let mut last_above: Option<usize> = None;

    for (t, &value) in series.iter().enumerate() {
        if value >= threshold {
            total_above += 1;
            streak += 1;
            last_above = Some(t);
            if streak == min_run && advance_start.is_none() {
                advance_start = Some(t + 1 - min_run);
            }
        } else {
            streak = 0;
        }
    }

    if total_above == 0 {
        return PixelSeason::undefined(PixelClass::NeverIce);
    }

    if total_above == n_steps {
        return PixelSeason {
            class: PixelClass::AlwaysIce,
            advance: 0.0,
            retreat: n_steps as f32,
            duration: n_steps as f32,
        };
    }

    if let (Some(adv), Some(last)) = (advance_start, last_above) {
        let advance = adv as f32;
        let retreat = (last + 1) as f32;
        return PixelSeason {
            class: PixelClass::Seasonal,
            advance,
            retreat,
            duration: retreat - advance,
        };
    }

    PixelSeason::undefined(PixelClass::InsufficientRun)
}
