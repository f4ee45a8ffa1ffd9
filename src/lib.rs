//! Convergence comparison of classical scalar root-finding methods.
//!
//! [`root_finding`] holds the closed function registry, the five step
//! strategies and the driver that records error traces against a known
//! root. [`compare`] runs every strategy for one function family and hands
//! the traces to [`compare::TraceSink`]s.

pub mod compare;
pub mod root_finding;
