//! causality::validation — shared input guards for the estimator.
//!
//! Purpose
//! -------
//! Check the call-level preconditions of the Liang–Kleeman estimator once,
//! before any moment is computed: matching lengths, finite observations,
//! valid settings, and enough effective samples after differencing.
//!
//! Invariants & assumptions
//! ------------------------
//! - On `Ok(())`, `x1.len() == x2.len()`, every value is finite, and
//!   `x1.len() ≥ max(2·n + 2, n + MIN_EFFECTIVE_SAMPLES)`
//!   (see [`LiangOptions::min_len`]).
//! - Data-dependent degeneracies (singular covariance, singular information
//!   matrix) are detected later by the numerical stages, not here.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and the boundary length.

use crate::causality::{
    errors::{LiangError, LiangResult},
    options::{LiangOptions, validate_advance, validate_alpha},
};

/// Validate the inputs of one estimator call.
///
/// Parameters
/// ----------
/// - `x1`: `&[f64]`
///   Target series (the one whose evolution is explained).
/// - `x2`: `&[f64]`
///   Source series.
/// - `opts`: `&LiangOptions`
///   Advance and confidence level. Re-checked here because the fields are
///   public and may have been set without [`LiangOptions::new`].
///
/// Errors
/// ------
/// - `LiangError::InvalidAdvance` / `LiangError::InvalidAlpha`
/// - `LiangError::LengthMismatch`
/// - `LiangError::InsufficientData`
/// - `LiangError::InvalidData` (first offending element, series 1 first)
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_input(x1: &[f64], x2: &[f64], opts: &LiangOptions) -> LiangResult<()> {
    validate_advance(opts.advance)?;
    validate_alpha(opts.alpha)?;

    if x1.len() != x2.len() {
        return Err(LiangError::LengthMismatch { len1: x1.len(), len2: x2.len() });
    }

    let required = opts.min_len();
    if x1.len() < required {
        return Err(LiangError::InsufficientData { len: x1.len(), advance: opts.advance, required });
    }

    for (series, data) in [(1, x1), (2, x2)] {
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LiangError::InvalidData { series, index, value });
        }
    }

    Ok(())
}
