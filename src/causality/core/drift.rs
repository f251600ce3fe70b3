//! Drift and noise estimation for the linear stochastic model
//! `dx1/dt = f1 + a11·x1 + a12·x2 + b1·ẇ`.
//!
//! Purpose
//! -------
//! Solve the maximum-likelihood normal equations of the bivariate linear
//! model for the coefficients driving series 1, then measure the residual
//! noise scale `b1`.
//!
//! Key behaviors
//! -------------
//! - Reject a singular level covariance `C` with
//!   [`LiangError::DegenerateInput`] instead of dividing by zero.
//! - Closed-form (Cramer's rule) coefficients from `C` and `dC`.
//! - Residuals `R1 = dx1 − (f1 + a11·x1 + a12·x2)` and
//!   `b1 = sqrt(Σ R1² · dt / N)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - A returned [`DriftFit`] has finite coefficients and `b1 ≥ 0`.
//!   A vanishing `b1` is not rejected here; the Fisher-information stage
//!   treats it as a singular information matrix.

use crate::causality::{
    core::{data::EulerSeries, moments::Moments},
    errors::{LiangError, LiangResult},
    options::DT,
};
use ndarray::{Array1, Zip};

/// `|det(C)|` at or below this fraction of `C00·C11` is treated as zero.
/// Catches exactly collinear levels whose determinant rounds to ~1e-16.
/// Since `det(C) / (C00·C11) = 1 − ρ²`, pairs with `|ρ| ≥ 1 − 5e-13` are
/// rejected as well, even when not exactly collinear.
pub const DET_REL_EPS: f64 = 1e-12;

/// DriftFit — fitted coefficients of the equation for series 1.
///
/// Fields
/// ------
/// - `a11`: self-coupling of series 1.
/// - `a12`: coupling from series 2 into series 1's rate of change.
/// - `f1`: intercept.
/// - `b1`: residual noise scale.
/// - `n_eff`: effective sample count `N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftFit {
    pub a11: f64,
    pub a12: f64,
    pub f1: f64,
    pub b1: f64,
    pub n_eff: usize,
}

/// Fit the drift of series 1 and return it together with the residuals.
///
/// Errors
/// ------
/// - `LiangError::DegenerateInput { det }` when `det(C)` is zero, non-finite,
///   or at most [`DET_REL_EPS`]`·|C00·C11|`. The last case includes
///   near-singular `C` from highly correlated but not collinear levels.
pub fn fit_drift(
    series: &EulerSeries<'_>, moments: &Moments,
) -> LiangResult<(DriftFit, Array1<f64>)> {
    let det = moments.det_c();
    check_det(det, moments)?;

    let c = &moments.c;
    let dc = &moments.dc;
    let a11 = (c[[1, 1]] * dc[[0, 0]] - c[[0, 1]] * dc[[1, 0]]) / det;
    let a12 = (-c[[0, 1]] * dc[[0, 0]] + c[[0, 0]] * dc[[1, 0]]) / det;
    let f1 = moments.mean_dx1 - a11 * moments.mean_x1 - a12 * moments.mean_x2;

    let mut residuals = Array1::<f64>::zeros(series.n_eff());
    Zip::from(&mut residuals).and(&series.dx1).and(&series.x1).and(&series.x2).for_each(
        |r, &dx1, &x1, &x2| {
            *r = dx1 - (f1 + a11 * x1 + a12 * x2);
        },
    );
    let q1: f64 = residuals.iter().map(|r| r * r).sum();
    let b1 = (q1 * DT / series.n_eff() as f64).sqrt();

    Ok((DriftFit { a11, a12, f1, b1, n_eff: series.n_eff() }, residuals))
}

fn check_det(det: f64, moments: &Moments) -> LiangResult<()> {
    let scale = (moments.c[[0, 0]] * moments.c[[1, 1]]).abs();
    if !det.is_finite() || det == 0.0 || det.abs() <= DET_REL_EPS * scale {
        return Err(LiangError::DegenerateInput { det });
    }
    Ok(())
}
