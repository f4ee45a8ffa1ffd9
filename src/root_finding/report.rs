//! Defines the [`ConvergenceReport`] struct returned by the driver for
//! every completed run, and the [`RunOutcome`] wrapping it.

use super::algorithms::Algorithm;
use super::errors::NotApplicableReason;


/// Reasons a run may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Final report of one (function, algorithm) run.
///
/// [`ConvergenceReport`]
/// - `algorithm`   : algorithm that produced the trace
/// - `label`       : display label of the error curve
/// - `errors`      : `|exact_root - estimate_i|`, index = iteration
/// - `estimate`    : last estimate
/// - `residual`    : `f(estimate)`
/// - `iterations`  : steps taken after the seeding step
/// - `termination` : why the driver stopped ([`TerminationReason`])
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport {
    pub algorithm   : Algorithm,
    pub label       : &'static str,
    pub errors      : Vec<f64>,
    pub estimate    : f64,
    pub residual    : f64,
    pub iterations  : usize,
    pub termination : TerminationReason,
}

impl ConvergenceReport {
    /// Successive error ratios `e_{k+1} / e_k`. Roughly constant for linear
    /// convergence, tending to zero for superlinear convergence.
    pub fn ratios(&self) -> Vec<f64> {
        self.errors
            .windows(2)
            .map(|w| w[1] / w[0])
            .collect()
    }

    /// Observed convergence order from the last three non-zero errors:
    /// `q ≈ ln(e_{k+1} / e_k) / ln(e_k / e_{k-1})`.
    ///
    /// Returns `None` with fewer than three non-zero errors or when the
    /// estimate is undefined (stalled errors).
    pub fn observed_order(&self) -> Option<f64> {
        let nonzero: Vec<f64> = self.errors
            .iter()
            .copied()
            .filter(|e| *e > 0.0)
            .collect();

        let [e0, e1, e2] = nonzero.get(nonzero.len().checked_sub(3)?..)? else {
            return None;
        };

        let q = (e2 / e1).ln() / (e1 / e0).ln();
        q.is_finite().then_some(q)
    }
}


/// Result of driving one algorithm against one function.
/// - [`RunOutcome::Completed`] : run finished, trace recorded
/// - [`RunOutcome::Skipped`]   : algorithm not applicable, no trace
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(ConvergenceReport),
    Skipped { algorithm: Algorithm, reason: NotApplicableReason },
}
impl RunOutcome {
    pub fn report(&self) -> Option<&ConvergenceReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            RunOutcome::Skipped { .. }    => None,
        }
    }

    pub fn into_report(self) -> Option<ConvergenceReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            RunOutcome::Skipped { .. }    => None,
        }
    }
}
