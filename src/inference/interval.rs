//! inference::interval — normal-approximation confidence intervals.
//!
//! Purpose
//! -------
//! Turn a point estimate and its standard error into a two-sided interval at
//! a requested confidence level, and decide whether that interval excludes
//! zero.
//!
//! Conventions
//! -----------
//! - `alpha` is the *confidence* level (0.95 for a 95 % interval), not the
//!   test size. The quantile is `z = Φ⁻¹((1 + alpha) / 2)`.

use crate::causality::{errors::LiangResult, options::validate_alpha};
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided standard-normal quantile `Φ⁻¹((1 + alpha) / 2)`.
///
/// Errors
/// ------
/// - `LiangError::InvalidAlpha` when `alpha ∉ (0, 1)`.
/// - `LiangError::Quantile` is declared for `NormalError` passthrough only;
///   `N(0, 1)` always builds.
pub fn z_alpha(alpha: f64) -> LiangResult<f64> {
    validate_alpha(alpha)?;
    let std_normal = Normal::new(0.0, 1.0)?;
    Ok(std_normal.inverse_cdf((1.0 + alpha) / 2.0))
}

/// ConfidenceInterval — closed interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// `[center − half_width, center + half_width]`.
    pub fn symmetric(center: f64, half_width: f64) -> Self {
        ConfidenceInterval { lower: center - half_width, upper: center + half_width }
    }

    /// `true` when `lower ≤ value ≤ upper`; both bounds are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Significance at the interval's level: `upper < 0` or `lower > 0`.
    pub fn excludes_zero(&self) -> bool {
        !self.contains(0.0)
    }
}
