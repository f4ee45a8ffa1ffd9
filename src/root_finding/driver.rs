//! Convergence driver.
//!
//! Runs one [`Algorithm`] against one [`TestFunction`] from a seed pair
//! until the residual tolerance or the iteration cap of [`DriverCfg`] is
//! reached, recording `|exact_root - estimate|` after every step.

use log::{debug, info, warn};

use super::algorithms::{Algorithm, BracketFamily, OpenFamily};
use super::config::DriverCfg;
use super::errors::StepError;
use super::functions::TestFunction;
use super::report::{ConvergenceReport, RunOutcome, TerminationReason};
use super::state::{IterState, Step};
use super::{bisection, corrected_newton, newton, regula_falsi, secant};


impl Algorithm {
    /// Dispatches one step of `self`.
    ///
    /// # Errors
    /// Whatever the selected strategy returns; see the `step` function of
    /// each strategy module.
    pub fn step(self, func: TestFunction, state: IterState) -> Result<Step, StepError> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => bisection::step(func, state),
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => regula_falsi::step(func, state),
            Algorithm::Open(OpenFamily::Secant)            => secant::step(func, state),
            Algorithm::Open(OpenFamily::Newton)            => newton::step(func, state),
            Algorithm::Open(OpenFamily::CorrectedNewton)   => corrected_newton::step(func, state),
        }
    }
}


fn skipped(error: StepError) -> Result<RunOutcome, StepError> {
    match error {
        StepError::NotApplicable { algorithm, reason } => {
            warn!("{}: skipped, {reason}", algorithm.label());
            Ok(RunOutcome::Skipped { algorithm, reason })
        },
        other => Err(other),
    }
}


/// Drives `algorithm` on `func` and records its error trace.
///
/// # Arguments
/// - `algorithm`  : strategy to run
/// - `func`       : target function
/// - `seed`       : `(a, b)`, turned into the first state by
///                  [`Algorithm::initial_state`]
/// - `exact_root` : reference root for the error trace
/// - `cfg`        : [`DriverCfg`] (residual tolerance, iteration cap)
///
/// # Behavior
/// - One seeding step, then up to `cfg.max_iter()` steps; the trace holds
///   at most `max_iter + 1` errors.
/// - Stops once `|f(estimate)| < abs_fx`, checked after each loop step.
///   The residual is used rather than the displacement of the estimate.
/// - [`StepError::NotApplicable`] at any step yields [`RunOutcome::Skipped`]
///   and discards the partial trace.
///
/// # Errors
/// Any other [`StepError`] is fatal for the run and returned as is.
pub fn run(
    algorithm: Algorithm,
    func: TestFunction,
    seed: (f64, f64),
    exact_root: f64,
    cfg: &DriverCfg,
) -> Result<RunOutcome, StepError> {
    let label    = algorithm.label();
    let abs_fx   = cfg.abs_fx();
    let max_iter = cfg.max_iter();

    let Step { mut estimate, mut state } = match algorithm.step(func, algorithm.initial_state(seed)) {
        Ok(step) => step,
        Err(e)   => return skipped(e),
    };

    let mut errors = Vec::with_capacity(max_iter + 1);
    errors.push((exact_root - estimate).abs());
    debug!("{label}: i=0 x={estimate:e}");

    let mut residual    = func.eval(estimate);
    let mut iterations  = 0;
    let mut termination = TerminationReason::IterationLimit;

    for iter in 1..=max_iter {
        Step { estimate, state } = match algorithm.step(func, state) {
            Ok(step) => step,
            Err(e)   => return skipped(e),
        };

        errors.push((exact_root - estimate).abs());
        residual   = func.eval(estimate);
        iterations = iter;
        debug!("{label}: i={iter} x={estimate:e} f(x)={residual:e}");

        if residual.abs() < abs_fx {
            termination = TerminationReason::ToleranceReached;
            break;
        }
    }

    info!("{label}: {termination:?} after {iterations} iterations, x={estimate}");

    Ok(RunOutcome::Completed(ConvergenceReport {
        algorithm,
        label,
        errors,
        estimate,
        residual,
        iterations,
        termination,
    }))
}
