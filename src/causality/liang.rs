//! causality::liang — the Liang–Kleeman information-flow estimator.
//!
//! Purpose
//! -------
//! Estimate `T21`, the rate of information flowing **from series 2 into
//! series 1**, together with a normal-approximation error bound and a
//! significance flag. The estimator follows Liang (2014, 2015): fit the
//! linear stochastic model `dx1/dt = f1 + a11·x1 + a12·x2 + b1·ẇ` by maximum
//! likelihood, then
//!
//! `T21 = (C12 / C11) · a12`,
//! `Var(T21) = (C12 / C11)² · Var(a12)`,
//!
//! with `Var(a12)` read from the inverse Fisher information.
//!
//! Key behaviors
//! -------------
//! - [`LiangOutcome::estimate`] runs the full pipeline: validation,
//!   forward differences, moments, drift fit, Fisher information, variance
//!   propagation, and the two-sided interval at `alpha`.
//! - [`estimate`] is the scalar-argument entry point
//!   `estimate(x1, x2, n, alpha)`.
//! - [`estimate_pair`] runs both directions and names them `t21` / `t12`.
//! - [`LiangOutcome::err_at`] rescales the stored standard error to another
//!   confidence level without refitting.
//! - [`LiangOutcome::tau21`] reports the normalized flow
//!   `τ21 = T21 / (|T21| + |a11| + |b1²·dt / (2·C11)|)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Argument order carries meaning: `x1` is the target whose evolution is
//!   explained, `x2` the candidate source. Swapping them estimates `T12`,
//!   which is generally a different number, not `−T21`.
//! - Every field of a returned [`LiangOutcome`] is finite; undefined
//!   quantities surface as [`LiangError`] instead.
//!
//! Conventions
//! -----------
//! - `dt = 1`; the advance `n` is measured in samples.
//! - `alpha` is a confidence level (0.95 → 95 % interval).
//! - With the `obs_tracing` feature, fitted coefficients and the final
//!   statistic are emitted as `tracing` debug events and rejections as warn
//!   events. Without it the module performs no I/O.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use rust_infoflow::causality::{LiangOptions, LiangOutcome};
//!
//! let x2: Vec<f64> = (0..200).map(|k| (0.37 * k as f64).sin()).collect();
//! let mut x1 = vec![0.0; 200];
//! for k in 0..199 {
//!     x1[k + 1] = 0.5 * x1[k] + 0.8 * x2[k] + 0.1 * (2.1 * k as f64).cos();
//! }
//!
//! let outcome = LiangOutcome::estimate(&x1, &x2, &LiangOptions::default()).unwrap();
//! assert!(outcome.info().is_finite());
//! assert!(outcome.err() >= 0.0);
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests pin the full pipeline to reference values computed
//!   independently from the closed-form expressions, and check the
//!   `alpha` / `n` / argument-order properties. Statistical behavior on
//!   simulated processes lives in `tests/integration_liang_pipeline.rs`.

use crate::{
    causality::{
        core::{DriftFit, EulerSeries, Moments, fit_drift},
        errors::{LiangError, LiangResult},
        options::{DT, LiangOptions},
    },
    inference::{ConfidenceInterval, a12_variance, information_matrix, invert_information, z_alpha},
};

/// LiangOutcome — result of one information-flow estimate (2 → 1).
///
/// Fields
/// ------
/// - `t21`: `f64`
///   Estimated information flow from series 2 to series 1, in nats per unit
///   time.
/// - `h`: `bool`
///   `true` when `[t21 − err, t21 + err]` excludes zero.
/// - `err`: `f64`
///   Half-width of the interval, `sqrt(Var(T21)) · Φ⁻¹((1 + alpha) / 2)`.
/// - `alpha`: `f64`
///   Confidence level the interval was built at.
/// - `std_error`: `f64`
///   `sqrt(Var(T21))`.
/// - `z_alpha`: `f64`
///   The normal quantile used for `err`.
/// - `tau21`: `f64`
///   Normalized flow in `[−1, 1]`.
/// - `advance`: `usize`
///   Forward-difference step used.
/// - `drift`: [`DriftFit`]
///   Fitted `a11`, `a12`, `f1`, `b1` and effective sample count.
///
/// Invariants
/// ----------
/// - All floating-point fields are finite; `err ≥ 0`, `std_error ≥ 0`.
/// - `h == confidence_interval().excludes_zero()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiangOutcome {
    t21: f64,
    h: bool,
    err: f64,
    alpha: f64,
    std_error: f64,
    z_alpha: f64,
    tau21: f64,
    advance: usize,
    drift: DriftFit,
}

impl LiangOutcome {
    /// Estimate the information flow from `x2` to `x1`.
    ///
    /// Parameters
    /// ----------
    /// - `x1`: `&[f64]`
    ///   Target series.
    /// - `x2`: `&[f64]`
    ///   Source series; same length as `x1`.
    /// - `opts`: `&LiangOptions`
    ///   Forward-difference advance and confidence level.
    ///
    /// Errors
    /// ------
    /// - Argument errors (`LengthMismatch`, `InvalidAdvance`, `InvalidAlpha`,
    ///   `InsufficientData`, `InvalidData`).
    /// - `LiangError::DegenerateInput` when the level covariance is singular.
    /// - `LiangError::SingularInformationMatrix` when the Fisher information
    ///   cannot be inverted or the residual noise vanishes.
    ///
    /// Panics
    /// ------
    /// - Never panics on user input.
    pub fn estimate(x1: &[f64], x2: &[f64], opts: &LiangOptions) -> LiangResult<Self> {
        let result = run_pipeline(x1, x2, opts);
        if let Err(err) = &result {
            trace_rejection(err);
        }
        result
    }

    /// Estimated information flow `T21` (series 2 → series 1).
    pub fn info(&self) -> f64 {
        self.t21
    }

    /// Alias of [`info`](Self::info) that spells out the direction.
    pub fn t21(&self) -> f64 {
        self.t21
    }

    /// Significance flag at [`alpha`](Self::alpha).
    pub fn h(&self) -> bool {
        self.h
    }

    /// Interval half-width at [`alpha`](Self::alpha).
    pub fn err(&self) -> f64 {
        self.err
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// `sqrt(Var(T21))`.
    pub fn std_error(&self) -> f64 {
        self.std_error
    }

    pub fn z_alpha(&self) -> f64 {
        self.z_alpha
    }

    /// Normalized information flow `τ21`.
    pub fn tau21(&self) -> f64 {
        self.tau21
    }

    pub fn advance(&self) -> usize {
        self.advance
    }

    pub fn drift(&self) -> &DriftFit {
        &self.drift
    }

    /// `[T21 − err, T21 + err]`.
    pub fn confidence_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::symmetric(self.t21, self.err)
    }

    /// Interval half-width at another confidence level, from the same fit.
    pub fn err_at(&self, alpha: f64) -> LiangResult<f64> {
        Ok(self.std_error * z_alpha(alpha)?)
    }

    /// Significance flag at another confidence level, from the same fit.
    pub fn is_significant_at(&self, alpha: f64) -> LiangResult<bool> {
        let err = self.err_at(alpha)?;
        Ok(ConfidenceInterval::symmetric(self.t21, err).excludes_zero())
    }
}

/// FlowPair — both directional estimates for one pair of series.
///
/// - `t21`: flow from series 2 into series 1 (`estimate(x1, x2)`).
/// - `t12`: flow from series 1 into series 2 (`estimate(x2, x1)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowPair {
    pub t21: LiangOutcome,
    pub t12: LiangOutcome,
}

/// `estimate(x1, x2, n, alpha)` — information flow from `x2` to `x1`.
///
/// Convenience wrapper that validates `n` and `alpha` through
/// [`LiangOptions::new`] and runs [`LiangOutcome::estimate`]. Use
/// [`LiangOptions::default`] for the conventional `n = 2`, `alpha = 0.95`.
pub fn estimate(x1: &[f64], x2: &[f64], n: usize, alpha: f64) -> LiangResult<LiangOutcome> {
    let opts = LiangOptions::new(n, alpha)?;
    LiangOutcome::estimate(x1, x2, &opts)
}

/// Estimate the flow in both directions with the same settings.
pub fn estimate_pair(x1: &[f64], x2: &[f64], opts: &LiangOptions) -> LiangResult<FlowPair> {
    Ok(FlowPair {
        t21: LiangOutcome::estimate(x1, x2, opts)?,
        t12: LiangOutcome::estimate(x2, x1, opts)?,
    })
}

//
// ---------- Private helpers ----------
//

fn run_pipeline(x1: &[f64], x2: &[f64], opts: &LiangOptions) -> LiangResult<LiangOutcome> {
    let series = EulerSeries::new(x1, x2, opts)?;
    let moments = Moments::from_series(&series);
    let (drift, residuals) = fit_drift(&series, &moments)?;
    trace_drift(&drift);

    let ni = information_matrix(&series, &drift, &residuals)?;
    let inv_ni = invert_information(&ni)?;
    let var_a12 = a12_variance(&inv_ni)?;

    let c = &moments.c;
    let coupling = c[[0, 1]] / c[[0, 0]];
    let t21 = coupling * drift.a12;
    let std_error = (coupling * coupling * var_a12).sqrt();

    let z = z_alpha(opts.alpha)?;
    let err = std_error * z;
    if !t21.is_finite() || !err.is_finite() {
        return Err(LiangError::SingularInformationMatrix {
            reason: "information flow or its error bound is not finite",
        });
    }

    let outcome = LiangOutcome {
        t21,
        h: ConfidenceInterval::symmetric(t21, err).excludes_zero(),
        err,
        alpha: opts.alpha,
        std_error,
        z_alpha: z,
        tau21: normalized_flow(t21, &drift, c[[0, 0]]),
        advance: opts.advance,
        drift,
    };
    trace_outcome(&outcome);
    Ok(outcome)
}

/// `T21 / Z` with `Z = |T21| + |a11| + |b1²·dt / (2·C11)|`; zero when `Z = 0`.
fn normalized_flow(t21: f64, drift: &DriftFit, c11: f64) -> f64 {
    let noise = drift.b1 * drift.b1 * DT / (2.0 * c11);
    let z = t21.abs() + drift.a11.abs() + noise.abs();
    if z > 0.0 { t21 / z } else { 0.0 }
}

#[inline]
fn trace_drift(_drift: &DriftFit) {
    #[cfg(feature = "obs_tracing")]
    tracing::debug!(
        a11 = _drift.a11,
        a12 = _drift.a12,
        f1 = _drift.f1,
        b1 = _drift.b1,
        n_eff = _drift.n_eff,
        "drift fitted"
    );
}

#[inline]
fn trace_outcome(_outcome: &LiangOutcome) {
    #[cfg(feature = "obs_tracing")]
    tracing::debug!(
        t21 = _outcome.t21,
        err = _outcome.err,
        alpha = _outcome.alpha,
        h = _outcome.h,
        tau21 = _outcome.tau21,
        "information flow estimated"
    );
}

#[inline]
fn trace_rejection(_err: &LiangError) {
    #[cfg(feature = "obs_tracing")]
    tracing::warn!(error = %_err, "information flow estimate rejected");
}
