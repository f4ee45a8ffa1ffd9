//! Bisection step.

use super::algorithms::{Algorithm, BracketFamily};
use super::errors::{NotApplicableReason, StepError};
use super::functions::TestFunction;
use super::signs::{opposite_sign, sign};
use super::state::{IterState, Step};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Halves the bracket `[low, high]` once.
///
/// # Arguments
/// ├ `func` - function whose root is bracketed
/// ├ `low`  - one end of the bracket
/// └ `high` - other end of the bracket
///
/// # Returns
/// ├ `estimate` - midpoint of the *narrowed* bracket
/// └ `(low', high')` - narrowed bracket
///     ├ `(mid, high)` if `sign f(mid) == sign f(low)`
///     └ `(low, mid)`  otherwise
///
/// # Errors
/// └ [`StepError::NotApplicable`] - `f(low)` and `f(high)` share a sign
pub fn bisect(
    func: TestFunction,
    low: f64,
    high: f64,
) -> Result<(f64, (f64, f64)), StepError> {
    let flow  = func.eval(low);
    let fhigh = func.eval(high);

    if !opposite_sign(flow, fhigh) {
        return Err(StepError::NotApplicable {
            algorithm: ALGORITHM,
            reason:    NotApplicableReason::NoSignChange,
        });
    }

    let mid = calculate_bisection(low, high);
    if sign(func.eval(mid)) == sign(flow) {
        Ok((calculate_bisection(mid, high), (mid, high)))
    } else {
        Ok((calculate_bisection(low, mid), (low, mid)))
    }
}


/// One bisection step on [`IterState::Bracket`].
///
/// # Errors
/// ├ [`StepError::NotApplicable`] - no sign change across the bracket
/// └ [`StepError::StateMismatch`] - `state` is not a plain bracket
pub fn step(func: TestFunction, state: IterState) -> Result<Step, StepError> {
    let IterState::Bracket { low, high } = state else {
        return Err(StepError::StateMismatch { algorithm: ALGORITHM });
    };

    let (estimate, (low, high)) = bisect(func, low, high)?;
    Step::checked(ALGORITHM, estimate, IterState::Bracket { low, high })
}
