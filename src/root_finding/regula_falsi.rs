//! Regula falsi step with endpoint-halving stagnation correction.

use super::algorithms::{Algorithm, BracketFamily};
use super::errors::{NotApplicableReason, StepError};
use super::functions::TestFunction;
use super::signs::{opposite_sign, sign};
use super::state::{IterState, Side, Step};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsi);


/// Calculates the x-intercept of the line through `(low, flow)` and
/// `(high, fhigh)`:
/// `(flow * high - fhigh * low) / (flow - fhigh)`
///
/// # Errors
/// └ [`StepError::ZeroDenominator`] - `flow == fhigh`
#[inline]
pub fn calculate_between(
    (low, flow): (f64, f64),
    (high, fhigh): (f64, f64),
) -> Result<f64, StepError> {
    let denom = flow - fhigh;
    if denom == 0.0 {
        return Err(StepError::ZeroDenominator { algorithm: ALGORITHM, x: low });
    }
    Ok((flow * high - fhigh * low) / denom)
}


/// One false-position update of `[low, high]`.
///
/// The crossing point `between` replaces the end whose sign it shares. When
/// the same end is replaced twice in a row, the retained end is halved
/// (`x / 2`) before use, so that it does not stay frozen.
///
/// ┌ `sign f(between) == sign f(high)`
/// │   ├ previous side [`Side::High`] → `low' = low / 2`, else `low' = low`
/// │   └ returns `((low' + between) / 2, (low', between, Side::High))`
/// └ otherwise
///     ├ previous side [`Side::Low`]  → `high' = high / 2`, else `high' = high`
///     └ returns `((between + high') / 2, (between, high', Side::Low))`
///
/// A first call with [`Side::Neutral`] never halves.
///
/// # Errors
/// ├ [`StepError::NotApplicable`]   - `f(low)` and `f(high)` share a sign
/// └ [`StepError::ZeroDenominator`] - `f(low) == f(high)`
pub fn false_position(
    func: TestFunction,
    low: f64,
    high: f64,
    last: Side,
) -> Result<(f64, (f64, f64, Side)), StepError> {
    let flow  = func.eval(low);
    let fhigh = func.eval(high);

    if !opposite_sign(flow, fhigh) {
        return Err(StepError::NotApplicable {
            algorithm: ALGORITHM,
            reason:    NotApplicableReason::NoSignChange,
        });
    }

    let between = calculate_between((low, flow), (high, fhigh))?;

    if sign(func.eval(between)) == sign(fhigh) {
        let low = if last == Side::High { low / 2.0 } else { low };
        Ok(((low + between) / 2.0, (low, between, Side::High)))
    } else {
        let high = if last == Side::Low { high / 2.0 } else { high };
        Ok(((between + high) / 2.0, (between, high, Side::Low)))
    }
}


/// One regula falsi step on [`IterState::FalsiBracket`].
///
/// # Errors
/// ├ [`StepError::NotApplicable`]     - no sign change across the bracket
/// ├ [`StepError::ZeroDenominator`]   - equal function values at both ends
/// ├ [`StepError::NonFiniteEstimate`] - estimate NaN or infinite
/// └ [`StepError::StateMismatch`]     - `state` is not a falsi bracket
pub fn step(func: TestFunction, state: IterState) -> Result<Step, StepError> {
    let IterState::FalsiBracket { low, high, side } = state else {
        return Err(StepError::StateMismatch { algorithm: ALGORITHM });
    };

    let (estimate, (low, high, side)) = false_position(func, low, high, side)?;
    Step::checked(ALGORITHM, estimate, IterState::FalsiBracket { low, high, side })
}
