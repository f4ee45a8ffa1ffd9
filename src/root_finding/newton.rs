//! Newton-Raphson step

use super::algorithms::{Algorithm, OpenFamily};
use super::errors::StepError;
use super::functions::TestFunction;
use super::state::{IterState, Step};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


/// Newton update `x - f(x) / f'(x)` with `f'` taken from the derivative
/// registry. `algorithm` tags the errors so that the corrected variant can
/// reuse this update.
///
/// # Errors
/// ├ [`StepError::Lookup`]          - `func` has no registered derivative
/// └ [`StepError::ZeroDenominator`] - `f'(x) == 0`
pub(crate) fn newton_update(
    algorithm: Algorithm,
    func: TestFunction,
    x: f64,
) -> Result<f64, StepError> {
    let dfunc = func.derivative()?;

    let dfx = dfunc.eval(x);
    if dfx == 0.0 {
        return Err(StepError::ZeroDenominator { algorithm, x });
    }

    Ok(x - func.eval(x) / dfx)
}


/// One [Newton–Raphson](https://en.wikipedia.org/wiki/Newton_method) step
/// on [`IterState::Point`].
///
/// # Notes
/// - Convergence is quadratic at simple roots only. At the double root of
///   [`TestFunction::Squared`] the error shrinks by a roughly constant
///   factor of 1/2 per step; see [`super::corrected_newton`].
///
/// # Errors
/// ├ [`StepError::Lookup`]            - `func` has no registered derivative
/// ├ [`StepError::ZeroDenominator`]   - `f'(x) == 0`
/// ├ [`StepError::NonFiniteEstimate`] - update NaN or infinite
/// └ [`StepError::StateMismatch`]     - `state` is not a point
pub fn step(func: TestFunction, state: IterState) -> Result<Step, StepError> {
    let IterState::Point { x } = state else {
        return Err(StepError::StateMismatch { algorithm: ALGORITHM });
    };

    let x_next = newton_update(ALGORITHM, func, x)?;
    Step::checked(ALGORITHM, x_next, IterState::Point { x: x_next })
}
