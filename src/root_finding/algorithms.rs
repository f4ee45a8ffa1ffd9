//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the five compared
//! methods, along with the [`DEFAULT_MAX_ITER`] cap shared by the driver.


/// Iteration cap applied by the driver when none is configured.
/// Counts steps taken after the seeding step.
pub const DEFAULT_MAX_ITER: usize = 1000;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods, seeded with `[a, b]`
/// - [`Algorithm::Open`]    contains open methods, seeded with one or two points
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BracketFamily {
    Bisection,
    RegulaFalsi,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OpenFamily {
    Secant,
    Newton,
    CorrectedNewton,
}

impl Algorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bracket(BracketFamily::Bisection),
        Algorithm::Bracket(BracketFamily::RegulaFalsi),
        Algorithm::Open(OpenFamily::Secant),
        Algorithm::Open(OpenFamily::Newton),
        Algorithm::Open(OpenFamily::CorrectedNewton),
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "regula_falsi",
            Algorithm::Open(OpenFamily::Secant)            => "secant",
            Algorithm::Open(OpenFamily::Newton)            => "newton",
            Algorithm::Open(OpenFamily::CorrectedNewton)   => "corrected_newton",
        }
    }

    /// Display label attached to the error curve of this algorithm.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => "a (bisection)",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "b (regula falsi)",
            Algorithm::Open(OpenFamily::Secant)            => "c (secant)",
            Algorithm::Open(OpenFamily::Newton)            => "d (newton)",
            Algorithm::Open(OpenFamily::CorrectedNewton)   => "e (corrected newton)",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
