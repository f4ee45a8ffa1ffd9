use super::algorithms::{Algorithm, OpenFamily};
use super::errors::StepError;
use super::functions::TestFunction;
use super::state::{IterState, Step};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


/// Calculates the secant x-intercept for the line
/// connecting `(start, f(start))` and `(end, f(end))`:
/// `end - f(end) * (end - start) / (f(end) - f(start))`
///
/// # Errors
/// └ [`StepError::ZeroDenominator`] - `f(end) == f(start)`, which includes
///   `start == end`
#[inline]
pub fn calculate_secant_x_intercept(
    func: TestFunction,
    start: f64,
    end: f64,
) -> Result<f64, StepError> {
    let fend  = func.eval(end);
    let denom = fend - func.eval(start);
    if denom == 0.0 {
        return Err(StepError::ZeroDenominator { algorithm: ALGORITHM, x: end });
    }
    Ok(end - fend * (end - start) / denom)
}


/// One secant step on [`IterState::Secant`]. The new state is
/// `(current, x_next)`.
///
/// # Errors
/// ├ [`StepError::ZeroDenominator`]   - flat secant line
/// ├ [`StepError::NonFiniteEstimate`] - `x_next` NaN or infinite
/// └ [`StepError::StateMismatch`]     - `state` is not a secant pair
pub fn step(func: TestFunction, state: IterState) -> Result<Step, StepError> {
    let IterState::Secant { previous, current } = state else {
        return Err(StepError::StateMismatch { algorithm: ALGORITHM });
    };

    let x_next = calculate_secant_x_intercept(func, previous, current)?;
    Step::checked(ALGORITHM, x_next, IterState::Secant { previous: current, current: x_next })
}
