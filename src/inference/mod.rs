//! inference — uncertainty quantification for the drift coefficient `a12`.
//!
//! Purpose
//! -------
//! Provide the post-fit machinery of the information-flow estimator: the
//! analytic Fisher information of the linear drift model, its inversion, and
//! the normal-approximation interval built from the resulting variance.
//!
//! Key behaviors
//! -------------
//! - [`information_matrix`] builds the symmetric 4×4 observed information
//!   over `(f1, a11, a12, b1)` in closed form.
//! - [`invert_information`] inverts it through a symmetric
//!   eigendecomposition and refuses numerically singular input.
//! - [`z_alpha`] and [`ConfidenceInterval`] convert a standard error into a
//!   two-sided interval and significance decision.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs come from a successful drift fit; the information matrix is
//!   evaluated at the maximum-likelihood estimate.
//! - Failures are reported as
//!   [`LiangError`](crate::causality::errors::LiangError) values; nothing in
//!   this subtree returns `NaN` in place of an error.
//!
//! Conventions
//! -----------
//! - The information matrix is on the *sum* log-likelihood scale, so its
//!   inverse is the covariance of the estimates without further scaling.
//! - All functions are pure: no logging, no global state, no `unsafe`.

pub mod fisher;
pub mod interval;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::fisher::{A12_INDEX, a12_variance, information_matrix, invert_information};
pub use self::interval::{ConfidenceInterval, z_alpha};
