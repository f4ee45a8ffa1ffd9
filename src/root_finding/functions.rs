//! Closed registry of test functions and their exact derivatives.
//!
//! [`TestFunction`] enumerates every function a strategy may be asked to
//! evaluate or differentiate. Identity is the variant: differentiation is a
//! table lookup over the tag, not a symbolic operation.
//!
//! Registered derivatives
//! ┌ `Base`              → `BaseDerivative`
//! ├ `BaseDerivative`    → `BaseSecondDerivative`
//! ├ `Squared`           → `SquaredDerivative`
//! ├ `SquaredDerivative` → `SquaredSecondDerivative`
//! └ `Transform`         → `TransformDerivative`
//!
//! Anything else fails with [`LookupError::Unregistered`].

use std::str::FromStr;

use super::errors::{FamilyError, LookupError};


/// Constant shift of the base function `sin(x) - SHIFT`.
pub const SHIFT: f64 = 0.4;


/// Exact root of `sin(x) - SHIFT` used as the error reference.
#[inline]
#[must_use]
pub fn exact_root() -> f64 {
    SHIFT.asin()
}


/// Known test functions.
///
/// With `f(x) = sin(x) - 0.4` and `g = f²`:
/// - `Base`                    : `f`, simple root at `asin(0.4)`
/// - `BaseDerivative`          : `f' = cos x`
/// - `BaseSecondDerivative`    : `f'' = -sin x`
/// - `Squared`                 : `g`, double root at `asin(0.4)`
/// - `SquaredDerivative`       : `g' = 2 f f'`
/// - `SquaredSecondDerivative` : `g'' = 2 f'² + 2 f f''`
/// - `Transform`               : `u = g / g'`, simple root where `g` has a double one
/// - `TransformDerivative`     : `u' = (g'² - g g'') / g'²`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestFunction {
    Base,
    BaseDerivative,
    BaseSecondDerivative,
    Squared,
    SquaredDerivative,
    SquaredSecondDerivative,
    Transform,
    TransformDerivative,
}

impl TestFunction {
    #[must_use]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            TestFunction::Base                    => x.sin() - SHIFT,
            TestFunction::BaseDerivative          => x.cos(),
            TestFunction::BaseSecondDerivative    => -x.sin(),
            TestFunction::Squared                 => (x.sin() - SHIFT).powi(2),
            TestFunction::SquaredDerivative       => 2.0 * (x.sin() - SHIFT) * x.cos(),
            TestFunction::SquaredSecondDerivative => {
                2.0 * x.cos().powi(2) - 2.0 * (x.sin() - SHIFT) * x.sin()
            },
            TestFunction::Transform => {
                TestFunction::Squared.eval(x) / TestFunction::SquaredDerivative.eval(x)
            },
            TestFunction::TransformDerivative => {
                let g   = TestFunction::Squared.eval(x);
                let dg  = TestFunction::SquaredDerivative.eval(x);
                let ddg = TestFunction::SquaredSecondDerivative.eval(x);
                (dg * dg - g * ddg) / (dg * dg)
            },
        }
    }

    /// Exact derivative from the closed table.
    ///
    /// # Errors
    /// - [`LookupError::Unregistered`] : `self` has no tabulated derivative
    pub fn derivative(self) -> Result<TestFunction, LookupError> {
        match self {
            TestFunction::Base              => Ok(TestFunction::BaseDerivative),
            TestFunction::BaseDerivative    => Ok(TestFunction::BaseSecondDerivative),
            TestFunction::Squared           => Ok(TestFunction::SquaredDerivative),
            TestFunction::SquaredDerivative => Ok(TestFunction::SquaredSecondDerivative),
            TestFunction::Transform         => Ok(TestFunction::TransformDerivative),
            TestFunction::BaseSecondDerivative
            | TestFunction::SquaredSecondDerivative
            | TestFunction::TransformDerivative => {
                Err(LookupError::Unregistered { function: self })
            },
        }
    }

    pub const fn function_name(self) -> &'static str {
        match self {
            TestFunction::Base                    => "f",
            TestFunction::BaseDerivative          => "f'",
            TestFunction::BaseSecondDerivative    => "f''",
            TestFunction::Squared                 => "g",
            TestFunction::SquaredDerivative       => "g'",
            TestFunction::SquaredSecondDerivative => "g''",
            TestFunction::Transform               => "u",
            TestFunction::TransformDerivative     => "u'",
        }
    }
}
impl std::fmt::Display for TestFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.function_name())
    }
}


/// Target function families selectable from the command line.
/// - [`Family::Simple`] : `f`, simple root
/// - [`Family::Double`] : `g = f²`, double root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Simple,
    Double,
}
impl Family {
    #[must_use]
    pub const fn target(self) -> TestFunction {
        match self {
            Family::Simple => TestFunction::Base,
            Family::Double => TestFunction::Squared,
        }
    }
}
impl FromStr for Family {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(Family::Simple),
            "g" => Ok(Family::Double),
            _   => Err(FamilyError::Unknown { got: s.to_owned() }),
        }
    }
}
