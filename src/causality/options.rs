//! causality::options — configuration for the information-flow estimator.
//!
//! Purpose
//! -------
//! Bundle the two tuning knobs of the Liang–Kleeman estimator, the
//! forward-difference advance `n` and the confidence level `alpha`, into a
//! single validated value so call sites pass explicit settings instead of
//! loose scalars.
//!
//! Key behaviors
//! -------------
//! - [`LiangOptions::new`] rejects `n = 0` and `alpha ∉ (0, 1)`.
//! - [`LiangOptions::default`] reproduces the conventional settings
//!   `n = 2`, `alpha = 0.95`.
//! - [`LiangOptions::with_alpha`] re-targets an existing configuration at a
//!   different confidence level.
//!
//! Conventions
//! -----------
//! - The sampling step is fixed at [`DT`] = 1; `n` is expressed in samples.

use crate::causality::errors::{LiangError, LiangResult};

/// Unit sampling interval. Irregular sampling is not supported.
pub const DT: f64 = 1.0;

/// Default forward-difference advance (Euler step of two samples).
pub const DEFAULT_ADVANCE: usize = 2;

/// Default two-sided confidence level.
pub const DEFAULT_ALPHA: f64 = 0.95;

/// Minimum number of effective samples `N = len − n`.
///
/// The model carries four free parameters (f1, a11, a12, b1). With `N ≤ 3`
/// the residuals vanish identically; `N = 4` leaves a single residual degree
/// of freedom and an information matrix on the edge of identification.
pub const MIN_EFFECTIVE_SAMPLES: usize = 5;

/// LiangOptions — validated estimator settings.
///
/// Fields
/// ------
/// - `advance`: `usize`
///   Forward-difference step `n ≥ 1` used for `dX[k] = (X[k+n] − X[k]) / n`.
/// - `alpha`: `f64`
///   Two-sided confidence level in the open interval (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiangOptions {
    pub advance: usize,
    pub alpha: f64,
}

impl LiangOptions {
    /// Build validated options.
    ///
    /// Errors
    /// ------
    /// - `LiangError::InvalidAdvance` when `advance == 0`.
    /// - `LiangError::InvalidAlpha` when `alpha` is not finite or lies outside
    ///   `(0, 1)`.
    pub fn new(advance: usize, alpha: f64) -> LiangResult<Self> {
        validate_advance(advance)?;
        validate_alpha(alpha)?;
        Ok(LiangOptions { advance, alpha })
    }

    /// Same advance, different confidence level.
    pub fn with_alpha(self, alpha: f64) -> LiangResult<Self> {
        LiangOptions::new(self.advance, alpha)
    }

    /// Shortest admissible series length for this advance.
    ///
    /// Returns `max(2·n + 2, n + MIN_EFFECTIVE_SAMPLES)`. Saturates for
    /// advances near `usize::MAX`.
    pub fn min_len(&self) -> usize {
        let two_steps = self.advance.saturating_mul(2).saturating_add(2);
        two_steps.max(self.advance.saturating_add(MIN_EFFECTIVE_SAMPLES))
    }
}

impl Default for LiangOptions {
    fn default() -> Self {
        LiangOptions { advance: DEFAULT_ADVANCE, alpha: DEFAULT_ALPHA }
    }
}

pub(crate) fn validate_advance(advance: usize) -> LiangResult<()> {
    if advance == 0 {
        return Err(LiangError::InvalidAdvance(advance));
    }
    Ok(())
}

pub(crate) fn validate_alpha(alpha: f64) -> LiangResult<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(LiangError::InvalidAlpha(alpha));
    }
    Ok(())
}
