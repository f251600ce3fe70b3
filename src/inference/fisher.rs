//! inference::fisher — analytic Fisher information of the drift model.
//!
//! Purpose
//! -------
//! Build the 4×4 observed Fisher information matrix `NI` of the Gaussian
//! linear model `dx1/dt = f1 + a11·x1 + a12·x2 + b1·ẇ` over the parameter
//! vector `θ = (f1, a11, a12, b1)`, invert it, and extract the sampling
//! variance of `a12`.
//!
//! Key behaviors
//! -------------
//! - [`information_matrix`] evaluates the closed-form negative Hessian of the
//!   log-likelihood
//!   `ℓ(θ) = −N·ln b1 − Σ R1² / (2·b1²)` (dt = 1) from one sweep over
//!   `x1`, `x2` and the residuals, filling the upper triangle and mirroring
//!   it.
//! - [`invert_information`] copies `NI` into a `nalgebra::Matrix4`, runs a
//!   symmetric eigendecomposition and forms `NI⁻¹ = Q Λ⁻¹ Qᵀ`.
//! - [`a12_variance`] reads `NI⁻¹[2, 2]`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `NI` is exactly symmetric on return.
//! - A zero (or negligible) noise scale `b1` leaves `NI` undefined and is
//!   reported as [`LiangError::SingularInformationMatrix`].
//! - Eigenvalues with `|λ| ≤ EIGEN_REL_EPS · max|λ|` mark `NI` as singular;
//!   no pseudoinverse is taken.
//!
//! Conventions
//! -----------
//! - Parameter order is `(f1, a11, a12, b1)`; [`A12_INDEX`] = 2.
//! - `NI` is on the *sum* log-likelihood scale, so `NI⁻¹` is directly the
//!   asymptotic covariance of `θ̂`.
//!
//! Testing notes
//! -------------
//! - The analytic matrix is checked against a central finite-difference
//!   Hessian of the log-likelihood (`finitediff`), and the inverse against
//!   hand-built diagonal and rank-deficient matrices.

use crate::causality::{
    core::{DriftFit, EulerSeries},
    errors::{LiangError, LiangResult},
    options::DT,
};
use nalgebra::Matrix4;
use ndarray::{Array1, Array2, Zip};

/// Position of `a12` in `θ = (f1, a11, a12, b1)`.
pub const A12_INDEX: usize = 2;

/// Numerical-rank tolerance: dimension × machine epsilon, relative to the
/// largest eigenvalue magnitude.
pub const EIGEN_REL_EPS: f64 = 4.0 * f64::EPSILON;

/// `b1` at or below this fraction of the RMS of `dx1` counts as zero noise.
pub const NOISE_REL_EPS: f64 = 1e-10;

/// Sums over the effective sample that enter `NI`.
#[derive(Debug, Default, Clone, Copy)]
struct InformationSums {
    x1: f64,
    x2: f64,
    x1x1: f64,
    x2x2: f64,
    x1x2: f64,
    r: f64,
    rr: f64,
    rx1: f64,
    rx2: f64,
}

/// information_matrix — closed-form Fisher information `NI`.
///
/// Parameters
/// ----------
/// - `series`: `&EulerSeries`
///   Levels and derivatives the drift was fitted on.
/// - `fit`: `&DriftFit`
///   Fitted coefficients; only `b1` is read directly.
/// - `residuals`: `&Array1<f64>`
///   `R1` from [`fit_drift`](crate::causality::core::fit_drift), same length
///   as `series`.
///
/// Returns
/// -------
/// `LiangResult<Array2<f64>>`
///   Symmetric 4×4 matrix with entries
///   `NI00 = N·dt/b²`, `NI11 = dt/b²·Σx1²`, `NI22 = dt/b²·Σx2²`,
///   `NI33 = 3·dt/b⁴·ΣR² − N/b²`, `NI01 = dt/b²·Σx1`, `NI02 = dt/b²·Σx2`,
///   `NI03 = 2·dt/b³·ΣR`, `NI12 = dt/b²·Σx1·x2`, `NI13 = 2·dt/b³·ΣR·x1`,
///   `NI23 = 2·dt/b³·ΣR·x2`.
///
/// Errors
/// ------
/// - `LiangError::SingularInformationMatrix` when `b1` is zero, not finite,
///   or negligible relative to the scale of `dx1`.
pub fn information_matrix(
    series: &EulerSeries<'_>, fit: &DriftFit, residuals: &Array1<f64>,
) -> LiangResult<Array2<f64>> {
    let b1 = fit.b1;
    let n = series.n_eff() as f64;
    let rms_dx1 = (series.dx1.iter().map(|v| v * v).sum::<f64>() / n).sqrt();
    if !b1.is_finite() || b1 <= 0.0 || b1 <= NOISE_REL_EPS * rms_dx1 {
        return Err(LiangError::SingularInformationMatrix {
            reason: "residual noise scale b1 vanishes (exact linear fit)",
        });
    }

    let mut sums = InformationSums::default();
    Zip::from(&series.x1).and(&series.x2).and(residuals).for_each(|&x1, &x2, &r| {
        sums.x1 += x1;
        sums.x2 += x2;
        sums.x1x1 += x1 * x1;
        sums.x2x2 += x2 * x2;
        sums.x1x2 += x1 * x2;
        sums.r += r;
        sums.rr += r * r;
        sums.rx1 += r * x1;
        sums.rx2 += r * x2;
    });

    let b2 = b1 * b1;
    let b3 = b2 * b1;
    let b4 = b2 * b2;

    let mut ni = Array2::<f64>::zeros((4, 4));
    ni[[0, 0]] = n * DT / b2;
    ni[[1, 1]] = DT / b2 * sums.x1x1;
    ni[[2, 2]] = DT / b2 * sums.x2x2;
    ni[[3, 3]] = 3.0 * DT / b4 * sums.rr - n / b2;
    ni[[0, 1]] = DT / b2 * sums.x1;
    ni[[0, 2]] = DT / b2 * sums.x2;
    ni[[0, 3]] = 2.0 * DT / b3 * sums.r;
    ni[[1, 2]] = DT / b2 * sums.x1x2;
    ni[[1, 3]] = 2.0 * DT / b3 * sums.rx1;
    ni[[2, 3]] = 2.0 * DT / b3 * sums.rx2;
    mirror_upper(&mut ni);

    Ok(ni)
}

/// invert_information — `NI⁻¹` via symmetric eigendecomposition.
///
/// Errors
/// ------
/// - `LiangError::SingularInformationMatrix` when `NI` has a non-finite entry
///   or an eigenvalue that is zero up to [`EIGEN_REL_EPS`].
///
/// Panics
/// ------
/// - Panics if `ni` is not 4×4; callers pass the output of
///   [`information_matrix`].
pub fn invert_information(ni: &Array2<f64>) -> LiangResult<Matrix4<f64>> {
    let mut ni_nalg = Matrix4::<f64>::zeros();
    fill_matrix4(ni, &mut ni_nalg);
    if ni_nalg.iter().any(|v| !v.is_finite()) {
        return Err(LiangError::SingularInformationMatrix {
            reason: "information matrix has non-finite entries",
        });
    }

    let eigen_decomp = ni_nalg.symmetric_eigen();
    let eigenvals = eigen_decomp.eigenvalues;
    let lambda_max = eigenvals.iter().fold(0.0_f64, |acc, l| acc.max(l.abs()));
    if lambda_max == 0.0 || eigenvals.iter().any(|l| l.abs() <= EIGEN_REL_EPS * lambda_max) {
        return Err(LiangError::SingularInformationMatrix {
            reason: "information matrix is not invertible",
        });
    }

    let q = eigen_decomp.eigenvectors;
    let inv_lambda = Matrix4::from_diagonal(&eigenvals.map(|l| 1.0 / l));
    Ok(q * inv_lambda * q.transpose())
}

/// a12_variance — `NI⁻¹[2, 2]`, the sampling variance of `â12`.
///
/// Errors
/// ------
/// - `LiangError::SingularInformationMatrix` when the entry is not a finite
///   positive number (an indefinite `NI`).
pub fn a12_variance(inv_ni: &Matrix4<f64>) -> LiangResult<f64> {
    let var_a12 = inv_ni[(A12_INDEX, A12_INDEX)];
    if !var_a12.is_finite() || var_a12 <= 0.0 {
        return Err(LiangError::SingularInformationMatrix {
            reason: "variance of a12 is not positive",
        });
    }
    Ok(var_a12)
}

// ---- Helper methods ----

/// Copy the upper triangle onto the lower one.
fn mirror_upper(m: &mut Array2<f64>) {
    let n = m.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            m[[j, i]] = m[[i, j]];
        }
    }
}

/// Column-major copy of a 4×4 `ndarray` matrix into a `nalgebra::Matrix4`.
fn fill_matrix4(src: &Array2<f64>, dst: &mut Matrix4<f64>) {
    for j in 0..4 {
        for i in 0..4 {
            dst[(i, j)] = src[[i, j]];
        }
    }
}
