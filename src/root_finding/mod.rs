// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod functions;
pub mod report;
pub mod state;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod secant;
pub mod newton;
pub mod corrected_newton;

// runner
pub mod driver;
