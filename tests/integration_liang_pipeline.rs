//! Integration tests for the Liang–Kleeman information-flow estimator.
//!
//! Purpose
//! -------
//! - Validate the end-to-end estimator on simulated linear stochastic
//!   processes: one where series 2 drives series 1, and one where the two
//!   series are independent.
//! - Exercise the public API exactly as downstream callers use it:
//!   `estimate`, `LiangOutcome::estimate`, `estimate_pair`, `LiangOptions`.
//!
//! Coverage
//! --------
//! - Detection of a genuine 2 → 1 coupling (sign, significance, direction).
//! - Near-zero, mostly insignificant flow between independent series.
//! - Dependence on the advance `n`, monotonicity in `alpha`.
//! - Degenerate, noiseless, minimal-length and one-too-short inputs.
//! - Concurrent use from several threads.
//!
//! Exclusions
//! ----------
//! - Hand-computed reference values and per-stage numerics; those are unit
//!   tests inside the crate.
use rand::{SeedableRng, distributions::Distribution, rngs::StdRng};
use rust_infoflow::causality::{LiangError, LiangOptions, LiangOutcome, estimate, estimate_pair};
use statrs::distribution::Normal;

/// Purpose
/// -------
/// Simulate a unidirectionally coupled pair.
///
/// Model
/// -----
/// - `x2[k+1] = 0.7·x2[k] + ε2[k]`
/// - `x1[k+1] = x1[k] + (−0.5·x1[k] + c·x2[k]) + ε1[k]`
///
/// with independent standard-normal ε1, ε2. Series 1 never feeds back into
/// series 2, so the only flow is 2 → 1.
fn simulate_driven(len: usize, c: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).expect("standard normal");
    let mut x1 = vec![0.0; len];
    let mut x2 = vec![0.0; len];
    for k in 0..len - 1 {
        x2[k + 1] = 0.7 * x2[k] + noise.sample(&mut rng);
        x1[k + 1] = x1[k] + (-0.5 * x1[k] + c * x2[k]) + noise.sample(&mut rng);
    }
    (x1, x2)
}

/// Purpose
/// -------
/// Simulate an AR(1) series and an unrelated white-noise series.
fn simulate_independent(len: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).expect("standard normal");
    let mut x1 = vec![0.0; len];
    for k in 0..len - 1 {
        x1[k + 1] = 0.5 * x1[k] + noise.sample(&mut rng);
    }
    let x2 = (0..len).map(|_| noise.sample(&mut rng)).collect();
    (x1, x2)
}

#[test]
// Purpose
// -------
// Verify that a positive coupling c > 0 from series 2 into series 1 yields a
// positive, significant T21 on a long sample.
//
// Given
// -----
// - `simulate_driven(2000, 0.8, 7)`, default options (n = 2, alpha = 0.95).
//
// Expect
// ------
// - T21 > 0, h = true, a12 > 0.
fn driven_process_positive_coupling_is_detected() {
    // Arrange
    let (x1, x2) = simulate_driven(2000, 0.8, 7);

    // Act
    let outcome = LiangOutcome::estimate(&x1, &x2, &LiangOptions::default())
        .expect("driven process should be estimable");

    // Assert
    assert!(outcome.info() > 0.0, "T21 = {}", outcome.info());
    assert!(outcome.h(), "expected significance, err = {}", outcome.err());
    assert!(outcome.drift().a12 > 0.0);
    assert!(outcome.drift().n_eff >= 1000);
}

#[test]
// Purpose
// -------
// Check the negative-coupling case. T21 = (C12 / C11)·a12 and both factors
// follow the sign of c, so the flow stays positive while a12 turns negative.
//
// Given
// -----
// - `simulate_driven(2000, −0.8, 11)`.
//
// Expect
// ------
// - a12 < 0 (sign of c), T21 ≠ 0 and significant.
fn driven_process_negative_coupling_is_detected() {
    let (x1, x2) = simulate_driven(2000, -0.8, 11);

    let outcome = estimate(&x1, &x2, 2, 0.95).expect("driven process should be estimable");

    assert!(outcome.drift().a12 < 0.0, "a12 = {}", outcome.drift().a12);
    assert!(outcome.info() > 0.0);
    assert!(outcome.h());
}

#[test]
// Purpose
// -------
// Verify direction: on a 2 → 1 system the reverse flow is much smaller and
// the two directions are neither equal nor negatives of each other.
fn driven_process_reverse_direction_is_weaker() {
    let (x1, x2) = simulate_driven(3000, 0.8, 19);

    let pair = estimate_pair(&x1, &x2, &LiangOptions::default()).expect("both directions");

    assert!(pair.t21.h());
    assert!(
        pair.t12.info().abs() < 0.2 * pair.t21.info().abs(),
        "T21 = {}, T12 = {}",
        pair.t21.info(),
        pair.t12.info()
    );
    assert!((pair.t21.info() + pair.t12.info()).abs() > 1e-6);
}

#[test]
// Purpose
// -------
// Check that independent series give a flow close to zero.
//
// Given
// -----
// - AR(1) series 1 and white-noise series 2, 2000 samples, seed 3.
//
// Expect
// ------
// - |T21| < 0.01 and a normalized flow close to zero.
fn independent_series_flow_is_near_zero() {
    let (x1, x2) = simulate_independent(2000, 3);

    let outcome = estimate(&x1, &x2, 2, 0.95).expect("independent series are estimable");

    assert!(outcome.info().abs() < 0.01, "T21 = {}", outcome.info());
    assert!(outcome.tau21().abs() < 0.05, "tau21 = {}", outcome.tau21());
}

#[test]
// Purpose
// -------
// Check that the significance flag behaves like a test at level 1 − alpha
// under independence: across many seeds it fires only occasionally.
//
// Given
// -----
// - 40 independent pairs of length 1000, alpha = 0.95.
//
// Expect
// ------
// - At most 10 of 40 estimates flagged significant (nominal rate 5 %).
fn independent_series_are_rarely_flagged() {
    let opts = LiangOptions::default();

    let flagged = (0..40)
        .map(|seed| {
            let (x1, x2) = simulate_independent(1000, 100 + seed);
            LiangOutcome::estimate(&x1, &x2, &opts).expect("estimable").h()
        })
        .filter(|&h| h)
        .count();

    assert!(flagged <= 10, "{flagged} of 40 independent pairs flagged");
}

#[test]
// Purpose
// -------
// Verify that the advance n changes the estimate and that alpha widens the
// interval without touching T21.
fn advance_and_alpha_act_on_the_expected_quantities() {
    let (x1, x2) = simulate_driven(1500, 0.5, 23);

    let n1 = estimate(&x1, &x2, 1, 0.95).unwrap();
    let n2 = estimate(&x1, &x2, 2, 0.95).unwrap();
    assert_ne!(n1.info(), n2.info());
    assert_ne!(n1.err(), n2.err());

    let errs: Vec<f64> = [0.90, 0.95, 0.99]
        .iter()
        .map(|&alpha| {
            let out = estimate(&x1, &x2, 2, alpha).unwrap();
            assert_eq!(out.info(), n2.info());
            assert_eq!(out.alpha(), alpha);
            out.err()
        })
        .collect();
    assert!(errs[0] < errs[1] && errs[1] < errs[2], "errs = {errs:?}");
}

#[test]
// Purpose
// -------
// Ensure constant inputs raise DegenerateInput rather than returning NaN.
fn constant_series_raise_degenerate_input() {
    let flat1 = vec![4.2; 100];
    let flat2 = vec![-1.0; 100];

    let result = estimate(&flat1, &flat2, 2, 0.95);

    assert!(matches!(result, Err(LiangError::DegenerateInput { .. })), "got {result:?}");
}

#[test]
// Purpose
// -------
// Check the length boundary for small and large advances.
//
// Given
// -----
// - n ∈ {1, 2, 3, 4, 10} and random series of length
//   `min_len() = max(2·n + 2, n + MIN_EFFECTIVE_SAMPLES)` and one element
//   shorter. For n ≥ 4 the 2·n + 2 term is the binding one.
//
// Expect
// ------
// - Minimal length: no panic; a finite estimate or a singular information
//   matrix.
// - One shorter: `InsufficientData` carrying `required = min_len()`.
fn minimal_length_succeeds_and_one_shorter_is_rejected() {
    for n in [1, 2, 3, 4, 10] {
        let len = LiangOptions::new(n, 0.95).unwrap().min_len();
        let (x1, x2) = simulate_independent(len, 40 + n as u64);

        let minimal = estimate(&x1, &x2, n, 0.95);
        match minimal {
            Ok(out) => assert!(out.info().is_finite() && out.err().is_finite()),
            Err(err) => assert!(
                matches!(err, LiangError::SingularInformationMatrix { .. }),
                "unexpected error at minimal length for n = {n}: {err:?}"
            ),
        }

        let short = estimate(&x1[..len - 1], &x2[..len - 1], n, 0.95).unwrap_err();
        assert!(short.is_invalid_argument(), "got {short:?}");
        assert_eq!(
            short,
            LiangError::InsufficientData { len: len - 1, advance: n, required: len }
        );
    }
}

#[test]
// Purpose
// -------
// Ensure a series shorter than 2·n + 2 is rejected even when it leaves
// plenty of effective samples.
//
// Given
// -----
// - Deterministic sinusoids of length 15 with n = 10 (2·n + 2 = 22).
//
// Expect
// ------
// - `InsufficientData { len: 15, advance: 10, required: 22 }`, no estimate.
fn large_advance_on_short_series_is_rejected() {
    let x1: Vec<f64> = (0..15).map(|k| (0.9 * k as f64).sin()).collect();
    let x2: Vec<f64> = (0..15).map(|k| (0.4 * k as f64).cos()).collect();

    let result = estimate(&x1, &x2, 10, 0.95);

    assert_eq!(result, Err(LiangError::InsufficientData { len: 15, advance: 10, required: 22 }));
}

#[test]
// Purpose
// -------
// Verify that an exact linear fit reaches the caller as its own error kind.
//
// Given
// -----
// - A noiseless Euler recursion x1[k+1] = x1[k] + 0.1 − 0.5·x1[k] + 0.7·x2[k]
//   driven by a deterministic x2, estimated with n = 1, so the residual
//   noise b1 vanishes up to rounding.
//
// Expect
// ------
// - `Err(SingularInformationMatrix { .. })`, not a finite or NaN estimate,
//   and not classified as an invalid argument.
fn noiseless_recursion_reports_singular_information_matrix() {
    let len = 200;
    let x2: Vec<f64> =
        (0..len).map(|k| (0.77 * k as f64).cos() + 0.4 * (1.9 * k as f64).sin()).collect();
    let mut x1 = vec![1.0; len];
    for k in 0..len - 1 {
        x1[k + 1] = x1[k] + 0.1 - 0.5 * x1[k] + 0.7 * x2[k];
    }

    let err = estimate(&x1, &x2, 1, 0.95).unwrap_err();

    assert!(matches!(err, LiangError::SingularInformationMatrix { .. }), "got {err:?}");
    assert!(!err.is_invalid_argument());
}

#[test]
// Purpose
// -------
// Verify the estimator can run concurrently on independent inputs and
// returns the same results as a sequential run.
fn estimates_are_reproducible_across_threads() {
    let inputs: Vec<(Vec<f64>, Vec<f64>)> =
        (0..4).map(|seed| simulate_driven(800, 0.6, 500 + seed)).collect();
    let opts = LiangOptions::default();

    let sequential: Vec<LiangOutcome> =
        inputs.iter().map(|(x1, x2)| LiangOutcome::estimate(x1, x2, &opts).unwrap()).collect();

    let concurrent: Vec<LiangOutcome> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(x1, x2)| scope.spawn(move || LiangOutcome::estimate(x1, x2, &opts).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().expect("worker panicked")).collect()
    });

    assert_eq!(sequential, concurrent);
}
