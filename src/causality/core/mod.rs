//! causality::core — the numerical stages in front of inference.
//!
//! - [`data`]: validated level / forward-difference series.
//! - [`moments`]: the `C` and `dC` moment matrices.
//! - [`drift`]: closed-form drift coefficients, residuals, noise scale.
//!
//! Each stage consumes the previous one by reference; nothing here holds
//! state across estimator calls.

pub mod data;
pub mod drift;
pub mod moments;

pub use self::data::EulerSeries;
pub use self::drift::{DriftFit, fit_drift};
pub use self::moments::Moments;
