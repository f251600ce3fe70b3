//! causality — Liang–Kleeman information flow between two time series.
//!
//! Purpose
//! -------
//! Estimate the directional rate of information transfer `T21` from one
//! scalar series into another under a bivariate linear stochastic model,
//! with a normal-approximation confidence interval and significance flag.
//!
//! Key behaviors
//! -------------
//! - Expose the estimator via [`LiangOutcome::estimate`] and the scalar
//!   entry point [`estimate`]; [`estimate_pair`] covers both directions.
//! - Configure runs with [`LiangOptions`] (forward-difference advance and
//!   confidence level), validated once at construction and again at the
//!   call boundary by [`validate_input`].
//! - Report every failure through [`LiangError`] / [`LiangResult`]:
//!   invalid arguments, a singular level covariance, or a singular Fisher
//!   information matrix.
//!
//! Invariants & assumptions
//! ------------------------
//! - `estimate(x1, x2, ..)` measures flow **from `x2` into `x1`**. The
//!   argument order is part of the meaning of the result.
//! - Inputs are equal-length, finite, regularly sampled (dt = 1) series with
//!   at least `max(2·advance + 2, advance + MIN_EFFECTIVE_SAMPLES)`
//!   observations ([`LiangOptions::min_len`]).
//! - The estimator holds no state between calls and may be run concurrently
//!   on independent inputs.
//!
//! Conventions
//! -----------
//! - Numerical stages live in [`core`] (series, moments, drift); the
//!   variance machinery lives in [`crate::inference`].
//! - Error messages are phrased in terms of domain constraints.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use rust_infoflow::causality::{LiangError, estimate};
//!
//! let flat = vec![2.0; 32];
//! match estimate(&flat, &flat, 2, 0.95) {
//!     Err(LiangError::DegenerateInput { .. }) => (),
//!     other => panic!("expected DegenerateInput, got {other:?}"),
//! }
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each stage; `tests/integration_liang_pipeline.rs`
//!   exercises the estimator on simulated driven and independent processes.

pub mod core;
pub mod errors;
pub mod liang;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::DriftFit;
pub use self::errors::{LiangError, LiangResult};
pub use self::liang::{FlowPair, LiangOutcome, estimate, estimate_pair};
pub use self::options::{
    DEFAULT_ADVANCE, DEFAULT_ALPHA, DT, LiangOptions, MIN_EFFECTIVE_SAMPLES,
};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_infoflow::causality::prelude::*;
//
// to import the estimator surface in a single line.

pub mod prelude {
    pub use super::errors::{LiangError, LiangResult};
    pub use super::liang::{FlowPair, LiangOutcome, estimate, estimate_pair};
    pub use super::options::LiangOptions;
}
