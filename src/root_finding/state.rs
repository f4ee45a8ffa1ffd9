//! Per-strategy iterate state.
//!
//! `IterState` : state threaded from one step to the next
//! - `Bracket`      : bisection
//! - `FalsiBracket` : regula falsi, with the stagnation [`Side`] memory
//! - `Secant`       : secant
//! - `Point`        : newton and corrected newton
//!
//! A step only accepts the variant its own strategy produced.

use super::algorithms::{Algorithm, BracketFamily, OpenFamily};
use super::errors::StepError;


/// Which end of a regula falsi bracket the previous step replaced.
/// `Neutral` until the first step has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Neutral,
    High,
    Low,
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterState {
    Bracket      { low: f64, high: f64 },
    FalsiBracket { low: f64, high: f64, side: Side },
    Secant       { previous: f64, current: f64 },
    Point        { x: f64 },
}


/// Output of one strategy step: the new estimate and the state for the
/// next step of the same strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub estimate: f64,
    pub state:    IterState,
}
impl Step {
    /// Builds a step, rejecting a NaN or infinite estimate.
    #[inline]
    pub(crate) fn checked(
        algorithm: Algorithm,
        estimate: f64,
        state: IterState,
    ) -> Result<Step, StepError> {
        if !estimate.is_finite() {
            return Err(StepError::NonFiniteEstimate { algorithm, estimate });
        }
        Ok(Step { estimate, state })
    }
}


impl Algorithm {
    /// Builds the first state of `self` from the seed pair `(a, b)`.
    /// - bracket methods : `[a, b]`, regula falsi starts [`Side::Neutral`]
    /// - secant          : previous `a`, current `b`
    /// - newton variants : `a`, `b` unused
    #[must_use]
    pub fn initial_state(self, seed: (f64, f64)) -> IterState {
        let (a, b) = seed;
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => {
                IterState::Bracket { low: a, high: b }
            },
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => {
                IterState::FalsiBracket { low: a, high: b, side: Side::Neutral }
            },
            Algorithm::Open(OpenFamily::Secant) => {
                IterState::Secant { previous: a, current: b }
            },
            Algorithm::Open(OpenFamily::Newton | OpenFamily::CorrectedNewton) => {
                IterState::Point { x: a }
            },
        }
    }
}
