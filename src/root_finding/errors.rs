//! Root-finding error types.
//!
//! ┌ [`LookupError`] : derivative registry misses
//! │  └ function has no tabulated derivative
//! │
//! ├ [`StepError`]   : failures of a single strategy step
//! │   ├ strategy not applicable (no sign change, wrong function family)
//! │   ├ zero denominator in the update formula
//! │   ├ non-finite estimate
//! │   └ state built for another strategy
//! │
//! ├ [`ConfigError`] : invalid driver configuration
//! │   ├ invalid `abs_fx`
//! │   └ invalid `max_iter`
//! │
//! └ [`FamilyError`] : unknown function family selector


use thiserror::Error;
use super::algorithms::Algorithm;
use super::functions::TestFunction;


/// Derivative registry errors.
///
/// - Raised when a function outside the closed derivative table is
///   differentiated. Every function driven through a derivative-based
///   strategy must be registered, so this is a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no derivative registered for {function}")]
    Unregistered { function: TestFunction },
}


/// Why a strategy refused to run on its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotApplicableReason {
    /// `f(low)` and `f(high)` share a sign.
    NoSignChange,
    /// Only the double-root family can be rewritten as `g / g'`.
    NotDoubleRoot,
}
impl std::fmt::Display for NotApplicableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotApplicableReason::NoSignChange  => write!(f, "no sign change across bracket"),
            NotApplicableReason::NotDoubleRoot => write!(f, "target has no double root"),
        }
    }
}


/// Strategy step errors.
///
/// ┌ [`StepError::NotApplicable`] is recoverable: the driver skips the pair.
/// └ every other variant is fatal for the pair and propagates.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    #[error("{algorithm} not applicable: {reason}")]
    NotApplicable { algorithm: Algorithm, reason: NotApplicableReason },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("{algorithm}: zero denominator at x={x}")]
    ZeroDenominator { algorithm: Algorithm, x: f64 },

    #[error("{algorithm}: non-finite estimate {estimate}")]
    NonFiniteEstimate { algorithm: Algorithm, estimate: f64 },

    #[error("{algorithm}: state was built for another strategy")]
    StateMismatch { algorithm: Algorithm },
}
impl StepError {
    /// `true` if the driver should skip the pair instead of failing.
    #[inline]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, StepError::NotApplicable { .. })
    }
}


/// Driver configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Function family selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    #[error("unknown function family `{got}`: expected `f` or `g`")]
    Unknown { got: String },
}
