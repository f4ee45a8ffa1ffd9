//! Newton's method corrected for a double root.
//!
//! At a double root of `g`, `u = g / g'` has a simple root, so Newton on `u`
//! restores quadratic convergence. `u'` comes from the registry as
//! [`TestFunction::TransformDerivative`].

use super::algorithms::{Algorithm, OpenFamily};
use super::errors::{NotApplicableReason, StepError};
use super::functions::TestFunction;
use super::newton::newton_update;
use super::state::{IterState, Step};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::CorrectedNewton);


/// One corrected Newton step on [`IterState::Point`].
///
/// # Errors
/// ├ [`StepError::NotApplicable`]     - `func` is not [`TestFunction::Squared`]
/// ├ [`StepError::ZeroDenominator`]   - `u'(x) == 0`
/// ├ [`StepError::NonFiniteEstimate`] - update NaN or infinite, e.g. `g'(x) == 0`
/// └ [`StepError::StateMismatch`]     - `state` is not a point
pub fn step(func: TestFunction, state: IterState) -> Result<Step, StepError> {
    if func != TestFunction::Squared {
        return Err(StepError::NotApplicable {
            algorithm: ALGORITHM,
            reason:    NotApplicableReason::NotDoubleRoot,
        });
    }

    let IterState::Point { x } = state else {
        return Err(StepError::StateMismatch { algorithm: ALGORITHM });
    };

    let x_next = newton_update(ALGORITHM, TestFunction::Transform, x)?;
    Step::checked(ALGORITHM, x_next, IterState::Point { x: x_next })
}
