//! rust_infoflow — Liang–Kleeman information-flow causality for time series.
//!
//! Purpose
//! -------
//! Serve as the crate root for the information-flow estimator: given two
//! equal-length series, estimate the rate `T21` at which information flows
//! from series 2 into series 1, with a normal-approximation error bound and a
//! significance flag.
//!
//! Key behaviors
//! -------------
//! - Re-export the estimator surface (`causality`) and the post-fit variance
//!   machinery (`inference`) as the public crate API.
//! - Keep every numerical stage a pure function of its inputs: no global
//!   state, no I/O unless the `obs_tracing` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Directionality is fixed by argument order: the first series is the
//!   target, the second the source.
//! - Failures are returned as `LiangError` values; no `NaN` or `±∞` is ever
//!   returned in place of an error.
//!
//! Conventions
//! -----------
//! - Sampling interval `dt = 1`; the forward-difference advance is measured
//!   in samples.
//! - Confidence levels are two-sided (0.95 → 95 % interval).
//!
//! Downstream usage
//! ----------------
//! - Most callers only need
//!   `rust_infoflow::causality::{estimate, LiangOptions, LiangOutcome}`.
//! - The `inference` module is public for callers who want the Fisher
//!   information or interval helpers on their own.
//!
//! Testing notes
//! -------------
//! - Unit tests sit in each module; the end-to-end statistical properties are
//!   covered by `tests/integration_liang_pipeline.rs`.

pub mod causality;
pub mod inference;

pub use crate::causality::{
    FlowPair, LiangError, LiangOptions, LiangOutcome, LiangResult, estimate, estimate_pair,
};
