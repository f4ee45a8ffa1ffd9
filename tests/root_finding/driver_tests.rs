//! tests for the convergence driver and its reports
use std::f64::consts::{FRAC_PI_2, FRAC_PI_8};

use approx::assert_abs_diff_eq;
use rootrace::root_finding::algorithms::{Algorithm, BracketFamily, OpenFamily, DEFAULT_MAX_ITER};
use rootrace::root_finding::config::{DriverCfg, DEFAULT_ABS_FX};
use rootrace::root_finding::driver::run;
use rootrace::root_finding::errors::{ConfigError, LookupError, NotApplicableReason, StepError};
use rootrace::root_finding::functions::{exact_root, TestFunction};
use rootrace::root_finding::report::{ConvergenceReport, RunOutcome, TerminationReason};
use rootrace::root_finding::state::{IterState, Side};

type TestResult = Result<(), StepError>;

const BISECTION:    Algorithm = Algorithm::Bracket(BracketFamily::Bisection);
const REGULA_FALSI: Algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsi);
const SECANT:       Algorithm = Algorithm::Open(OpenFamily::Secant);
const NEWTON:       Algorithm = Algorithm::Open(OpenFamily::Newton);
const CORRECTED:    Algorithm = Algorithm::Open(OpenFamily::CorrectedNewton);

const SEED: (f64, f64) = (0.0, FRAC_PI_2);

fn completed(algorithm: Algorithm, func: TestFunction) -> Result<ConvergenceReport, StepError> {
    match run(algorithm, func, SEED, exact_root(), &DriverCfg::new())? {
        RunOutcome::Completed(report) => Ok(report),
        RunOutcome::Skipped { reason, .. } => panic!("{algorithm} skipped: {reason}"),
    }
}

#[test]
fn defaults() {
    let cfg = DriverCfg::default();
    assert_eq!(cfg.abs_fx(), DEFAULT_ABS_FX);
    assert_eq!(cfg.abs_fx(), 1e-15);
    assert_eq!(cfg.max_iter(), DEFAULT_MAX_ITER);
    assert_eq!(cfg.max_iter(), 1000);
}

#[test]
fn invalid_config() {
    assert_eq!(DriverCfg::new().set_abs_fx(0.0), Err(ConfigError::InvalidAbsFx { got: 0.0 }));
    assert_eq!(DriverCfg::new().set_abs_fx(-1e-3), Err(ConfigError::InvalidAbsFx { got: -1e-3 }));
    assert!(DriverCfg::new().set_abs_fx(f64::NAN).is_err());
    assert!(DriverCfg::new().set_abs_fx(f64::INFINITY).is_err());
    assert_eq!(DriverCfg::new().set_max_iter(0), Err(ConfigError::InvalidMaxIter { got: 0 }));
}

#[test]
fn initial_states() {
    assert_eq!(BISECTION.initial_state(SEED), IterState::Bracket { low: 0.0, high: FRAC_PI_2 });
    assert_eq!(
        REGULA_FALSI.initial_state(SEED),
        IterState::FalsiBracket { low: 0.0, high: FRAC_PI_2, side: Side::Neutral }
    );
    assert_eq!(SECANT.initial_state(SEED), IterState::Secant { previous: 0.0, current: FRAC_PI_2 });
    assert_eq!(NEWTON.initial_state(SEED), IterState::Point { x: 0.0 });
    assert_eq!(CORRECTED.initial_state(SEED), IterState::Point { x: 0.0 });
}

#[test]
fn simple_root_errors_shrink() -> TestResult {
    for algorithm in [BISECTION, REGULA_FALSI, SECANT, NEWTON] {
        let report = completed(algorithm, TestFunction::Base)?;

        let first = report.errors[0];
        let last  = *report.errors.last().expect("non-empty trace");
        assert!(last < first, "{algorithm}");
        assert!(report.errors.len() <= DEFAULT_MAX_ITER + 1, "{algorithm}");
        assert_eq!(report.errors.len(), report.iterations + 1, "{algorithm}");
        assert_eq!(report.termination, TerminationReason::ToleranceReached, "{algorithm}");
        assert!(report.residual.abs() < DEFAULT_ABS_FX, "{algorithm}");
        assert!(last < 1e-14, "{algorithm}");
    }
    Ok(())
}

#[test]
fn bisection_trace_starts_at_narrowed_midpoint() -> TestResult {
    let report = completed(BISECTION, TestFunction::Base)?;
    assert_eq!(report.errors[0], (exact_root() - FRAC_PI_8).abs());
    assert_eq!(report.algorithm, BISECTION);
    assert_eq!(report.label, BISECTION.label());
    Ok(())
}

#[test]
fn regula_falsi_estimate_stalls_at_half_root() -> TestResult {
    let report = completed(REGULA_FALSI, TestFunction::Base)?;

    assert!(report.errors.len() <= DEFAULT_MAX_ITER + 1);
    assert!(report.errors.iter().all(|e| e.is_finite()));
    assert_abs_diff_eq!(report.errors[3], exact_root() / 2.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn iteration_cap() -> TestResult {
    let cfg = DriverCfg::new().set_max_iter(3).expect("valid max_iter");
    let RunOutcome::Completed(report) = run(BISECTION, TestFunction::Base, SEED, exact_root(), &cfg)? else {
        panic!("bisection skipped");
    };

    assert_eq!(report.errors.len(), 4);
    assert_eq!(report.iterations, 3);
    assert_eq!(report.termination, TerminationReason::IterationLimit);
    Ok(())
}

#[test]
fn loose_tolerance_stops_early() -> TestResult {
    let cfg = DriverCfg::new().set_abs_fx(1e-3).expect("valid abs_fx");
    let RunOutcome::Completed(report) = run(NEWTON, TestFunction::Base, SEED, exact_root(), &cfg)? else {
        panic!("newton skipped");
    };

    // 0.4 -> |f| ~ 1e-2, next step |f| ~ 3e-5
    assert_eq!(report.iterations, 1);
    assert_eq!(report.termination, TerminationReason::ToleranceReached);
    Ok(())
}

#[test]
fn inapplicable_pairs_are_skipped() -> TestResult {
    let cases = [
        (BISECTION,    TestFunction::Squared, NotApplicableReason::NoSignChange),
        (REGULA_FALSI, TestFunction::Squared, NotApplicableReason::NoSignChange),
        (CORRECTED,    TestFunction::Base,    NotApplicableReason::NotDoubleRoot),
    ];
    for (algorithm, func, reason) in cases {
        let outcome = run(algorithm, func, SEED, exact_root(), &DriverCfg::new())?;
        assert_eq!(outcome, RunOutcome::Skipped { algorithm, reason });
        assert!(outcome.report().is_none());
    }
    Ok(())
}

#[test]
fn halving_that_loses_the_bracket_skips_the_pair() -> TestResult {
    // second call halves the high end 3.0 -> 1.5, where f > 0 like the low end
    let outcome = run(REGULA_FALSI, TestFunction::Base, (2.0, 3.0), exact_root(), &DriverCfg::new())?;
    assert_eq!(outcome, RunOutcome::Skipped {
        algorithm: REGULA_FALSI,
        reason:    NotApplicableReason::NoSignChange,
    });
    Ok(())
}

#[test]
fn fatal_errors_propagate() {
    let func = TestFunction::TransformDerivative;
    let err  = run(NEWTON, func, SEED, exact_root(), &DriverCfg::new()).unwrap_err();
    assert_eq!(err, StepError::Lookup(LookupError::Unregistered { function: func }));

    let err = run(SECANT, TestFunction::Base, (1.0, 1.0), exact_root(), &DriverCfg::new()).unwrap_err();
    assert_eq!(err, StepError::ZeroDenominator { algorithm: SECANT, x: 1.0 });
}

#[test]
fn newton_is_linear_on_double_root() -> TestResult {
    let report = completed(NEWTON, TestFunction::Squared)?;

    assert!(report.errors.len() > 10);
    for ratio in report.ratios() {
        assert!((0.45..0.6).contains(&ratio), "ratio {ratio}");
    }
    let order = report.observed_order().expect("enough errors");
    assert!((order - 1.0).abs() < 0.1, "order {order}");
    Ok(())
}

#[test]
fn corrected_newton_is_quadratic_on_double_root() -> TestResult {
    let plain     = completed(NEWTON, TestFunction::Squared)?;
    let corrected = completed(CORRECTED, TestFunction::Squared)?;

    assert_eq!(corrected.termination, TerminationReason::ToleranceReached);
    assert!(corrected.errors.len() < plain.errors.len());

    let mut checked = 0;
    for pair in corrected.errors.windows(2) {
        if pair[1] > 1e-14 {
            assert!(pair[1] <= pair[0].powf(1.5), "{} -> {}", pair[0], pair[1]);
            checked += 1;
        }
    }
    assert!(checked > 0);

    let order = corrected.observed_order().expect("enough errors");
    assert!((1.7..2.5).contains(&order), "order {order}");
    Ok(())
}

#[test]
fn report_instrumentation() {
    let report = ConvergenceReport {
        algorithm   : NEWTON,
        label       : NEWTON.label(),
        errors      : vec![1e-1, 1e-2, 1e-4, 1e-8],
        estimate    : 0.0,
        residual    : 0.0,
        iterations  : 3,
        termination : TerminationReason::ToleranceReached,
    };

    let ratios = report.ratios();
    assert_eq!(ratios.len(), 3);
    assert_abs_diff_eq!(ratios[2], 1e-4, epsilon = 1e-12);
    assert_abs_diff_eq!(report.observed_order().expect("order"), 2.0, epsilon = 1e-9);

    let short = ConvergenceReport { errors: vec![1e-1, 0.0, 1e-3], ..report.clone() };
    assert_eq!(short.observed_order(), None);

    let stalled = ConvergenceReport { errors: vec![0.5, 0.5, 0.5], ..report };
    assert_eq!(stalled.observed_order(), None);
}
