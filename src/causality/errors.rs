//! causality::errors — error types for information-flow estimation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every stage of the
//! Liang–Kleeman estimator: input validation, moment estimation, drift
//! fitting, Fisher-information inversion, and the normal-quantile error
//! bound.
//!
//! Key behaviors
//! -------------
//! - Define [`LiangResult`] and [`LiangError`] as the canonical result and
//!   error types for the `causality` and `inference` subtrees.
//! - Attach human-readable `Display` messages that embed the offending
//!   value so diagnostics are useful without further context.
//! - Group argument-level failures behind
//!   [`LiangError::is_invalid_argument`] so callers can separate "bad call"
//!   from "bad data" without matching every variant.
//!
//! Invariants & assumptions
//! ------------------------
//! - No estimator stage returns `NaN` or `±∞` in place of an error; every
//!   undefined quantity is surfaced as one of these variants.
//! - `LiangError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("alpha must lie
//!   in (0, 1)", "det(C) vanishes") rather than implementation details.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding in `Display` and the
//!   invalid-argument grouping.

use statrs::distribution::NormalError;

pub type LiangResult<T> = Result<T, LiangError>;

/// LiangError — failure conditions for the information-flow estimator.
///
/// Variants
/// --------
/// - `LengthMismatch { len1, len2 }`
///   The two input series have different lengths.
/// - `InvalidAdvance(n)`
///   The time-advance order is zero.
/// - `InvalidAlpha(alpha)`
///   The confidence level is not a finite value in the open interval (0, 1).
/// - `InsufficientData { len, advance, required }`
///   The series has `len < required` observations, where
///   `required = max(2·advance + 2, advance + MIN_EFFECTIVE_SAMPLES)`.
/// - `InvalidData { series, index, value }`
///   An observation is `NaN` or `±∞`. `series` is 1 or 2.
/// - `DegenerateInput { det }`
///   The level covariance matrix `C` is singular or numerically singular:
///   `det(C)` is zero, non-finite, or at most `DET_REL_EPS · |C00·C11|`
///   (constant, collinear, or correlated to within ~1e-12 of collinear
///   series), so the drift coefficients are undefined.
/// - `SingularInformationMatrix { reason }`
///   The 4×4 Fisher information matrix cannot be inverted, or the residual
///   noise scale vanished so the matrix is undefined.
/// - `Quantile(msg)`
///   Passthrough for `statrs::distribution::NormalError`. The estimator only
///   builds `N(0, 1)`, which never fails, so this does not occur in practice.
#[derive(Debug, Clone, PartialEq)]
pub enum LiangError {
    // ---- Invalid arguments ----
    LengthMismatch { len1: usize, len2: usize },
    InvalidAdvance(usize),
    InvalidAlpha(f64),
    InsufficientData { len: usize, advance: usize, required: usize },
    InvalidData { series: usize, index: usize, value: f64 },

    // ---- Numerical degeneracies ----
    DegenerateInput { det: f64 },
    SingularInformationMatrix { reason: &'static str },

    // ---- statrs passthrough ----
    Quantile(String),
}

impl LiangError {
    /// `true` for every variant caused by the call arguments rather than by
    /// the numerical content of valid-looking data.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            LiangError::LengthMismatch { .. }
                | LiangError::InvalidAdvance(_)
                | LiangError::InvalidAlpha(_)
                | LiangError::InsufficientData { .. }
                | LiangError::InvalidData { .. }
        )
    }
}

impl std::error::Error for LiangError {}

impl std::fmt::Display for LiangError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Invalid arguments ----
            LiangError::LengthMismatch { len1, len2 } => {
                write!(f, "Series lengths differ: len(x1) = {len1}, len(x2) = {len2}.")
            }
            LiangError::InvalidAdvance(n) => {
                write!(f, "Invalid time advance n = {n}. Must satisfy n ≥ 1.")
            }
            LiangError::InvalidAlpha(alpha) => {
                write!(f, "Invalid confidence level alpha = {alpha}. Must lie in (0, 1).")
            }
            LiangError::InsufficientData { len, advance, required } => write!(
                f,
                "Series of length {len} is too short for advance {advance}; need at least {required} observations."
            ),
            LiangError::InvalidData { series, index, value } => write!(
                f,
                "Invalid value {value} in series {series} at index {index}. Must be a finite number."
            ),

            // ---- Numerical degeneracies ----
            LiangError::DegenerateInput { det } => write!(
                f,
                "Degenerate input: level covariance det(C) = {det} vanishes (constant or collinear series)."
            ),
            LiangError::SingularInformationMatrix { reason } => {
                write!(f, "Singular Fisher information matrix: {reason}.")
            }

            // ---- statrs passthrough ----
            LiangError::Quantile(msg) => write!(f, "Normal quantile error: {msg}"),
        }
    }
}

impl From<NormalError> for LiangError {
    fn from(err: NormalError) -> Self {
        LiangError::Quantile(err.to_string())
    }
}
