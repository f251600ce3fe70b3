//! Level / derivative series for the Liang–Kleeman estimator.
//!
//! Purpose
//! -------
//! Turn two raw, equal-length series into the time-aligned level and
//! forward-difference derivative arrays that every later stage consumes.
//!
//! Key behaviors
//! -------------
//! - [`EulerSeries::new`] validates the call (via
//!   [`validate_input`](crate::causality::validation::validate_input)) and
//!   builds `x_i[k] = X_i[k]` and `dx_i[k] = (X_i[k+n] − X_i[k]) / (n·dt)`
//!   for `k = 0..N−1`, `N = M − n`.
//! - Levels are borrowed views into the caller's slices; only the two
//!   derivative arrays are allocated.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x1`, `x2`, `dx1`, `dx2` all have length `N ≥ MIN_EFFECTIVE_SAMPLES`,
//!   and the raw series spans at least `2·n + 2` samples.
//! - All entries are finite.
//!
//! Conventions
//! -----------
//! - Index 1 is the target series (whose rate of change is modelled),
//!   index 2 the source series. The forward difference looks *ahead*, so the
//!   last `n` raw observations appear only inside derivatives.
//!
//! Testing notes
//! -------------
//! - Unit tests check alignment and the `1 / n` scaling on hand-computed
//!   ramps, and that invalid calls are rejected before allocation.

use crate::causality::{
    errors::LiangResult,
    options::{DT, LiangOptions},
    validation::validate_input,
};
use ndarray::{Array1, ArrayView1, s};

/// EulerSeries — time-aligned levels and forward-difference derivatives.
///
/// Fields
/// ------
/// - `x1`, `x2`: `ArrayView1<'a, f64>`
///   First `N` observations of each input series.
/// - `dx1`, `dx2`: `Array1<f64>`
///   Euler-forward derivative estimates aligned with `x1`, `x2`.
/// - `advance`: `usize`
///   The step `n` used to build the derivatives.
#[derive(Debug, Clone)]
pub struct EulerSeries<'a> {
    pub x1: ArrayView1<'a, f64>,
    pub x2: ArrayView1<'a, f64>,
    pub dx1: Array1<f64>,
    pub dx2: Array1<f64>,
    pub advance: usize,
}

impl<'a> EulerSeries<'a> {
    /// Validate the raw series and build levels and derivatives.
    ///
    /// Parameters
    /// ----------
    /// - `xx1`: `&'a [f64]`
    ///   Raw target series `X1`.
    /// - `xx2`: `&'a [f64]`
    ///   Raw source series `X2`, same length as `xx1`.
    /// - `opts`: `&LiangOptions`
    ///   Supplies the advance `n`; `alpha` is validated but unused here.
    ///
    /// Errors
    /// ------
    /// - Any argument-level `LiangError` raised by `validate_input`.
    pub fn new(xx1: &'a [f64], xx2: &'a [f64], opts: &LiangOptions) -> LiangResult<Self> {
        validate_input(xx1, xx2, opts)?;
        let n_eff = xx1.len() - opts.advance;

        Ok(EulerSeries {
            x1: ArrayView1::from(&xx1[..n_eff]),
            x2: ArrayView1::from(&xx2[..n_eff]),
            dx1: forward_difference(xx1, opts.advance),
            dx2: forward_difference(xx2, opts.advance),
            advance: opts.advance,
        })
    }

    /// Effective sample count `N`; never below `MIN_EFFECTIVE_SAMPLES`.
    pub fn n_eff(&self) -> usize {
        self.x1.len()
    }
}

/// `(X[k+n] − X[k]) / (n·dt)` for `k = 0..len−n`.
///
/// Panics if `advance >= data.len()`; callers validate first.
fn forward_difference(data: &[f64], advance: usize) -> Array1<f64> {
    let raw = ArrayView1::from(data);
    let n_eff = data.len() - advance;
    let step = advance as f64 * DT;
    (&raw.slice(s![advance..]) - &raw.slice(s![..n_eff])) / step
}
