//! Runs every algorithm against one function family and hands the
//! resulting error traces to [`TraceSink`]s.
//!
//! ┌ [`ConsoleSink`]    : prints `label [e0, e1, ...]` per trace
//! └ [`CurveCollector`] : keeps `(label, errors)` curves for plotting

use std::f64::consts::FRAC_PI_2;
use std::io::{self, Write};

use thiserror::Error;

use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::config::DriverCfg;
use crate::root_finding::driver;
use crate::root_finding::errors::StepError;
use crate::root_finding::functions::{exact_root, Family};
use crate::root_finding::report::ConvergenceReport;


/// Seed used for every algorithm: bracket `[0, π/2]`, secant points `0` and
/// `π/2`, Newton start `0`.
pub const SEED: (f64, f64) = (0.0, FRAC_PI_2);


#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    Step(#[from] StepError),

    #[error("failed to write trace: {0}")]
    Io(#[from] io::Error),
}


/// Consumer of completed error traces.
pub trait TraceSink {
    fn record(&mut self, report: &ConvergenceReport) -> io::Result<()>;
}


/// Writes each trace as `label [e0, e1, ...]` on its own line.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}
impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
impl<W: Write> TraceSink for ConsoleSink<W> {
    fn record(&mut self, report: &ConvergenceReport) -> io::Result<()> {
        writeln!(self.out, "{} {:?}", report.label, report.errors)
    }
}


/// Collects labelled error curves, one per completed run, in run order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurveCollector {
    pub curves: Vec<(String, Vec<f64>)>,
}
impl CurveCollector {
    pub fn new() -> Self {
        Self::default()
    }
}
impl TraceSink for CurveCollector {
    fn record(&mut self, report: &ConvergenceReport) -> io::Result<()> {
        self.curves.push((report.label.to_owned(), report.errors.clone()));
        Ok(())
    }
}


/// Runs every [`Algorithm`] in [`Algorithm::ALL`] order on the target of
/// `family`, seeded with [`SEED`] and measured against [`exact_root`].
///
/// Inapplicable algorithms are skipped. Each completed report is passed to
/// every sink, then returned.
///
/// # Errors
/// - [`CompareError::Step`] : a run failed with a fatal [`StepError`]
/// - [`CompareError::Io`]   : a sink failed to record
pub fn compare(
    family: Family,
    cfg: &DriverCfg,
    sinks: &mut [&mut dyn TraceSink],
) -> Result<Vec<ConvergenceReport>, CompareError> {
    let target = family.target();
    let root   = exact_root();

    let mut reports = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let Some(report) = driver::run(algorithm, target, SEED, root, cfg)?.into_report() else {
            continue;
        };

        for sink in sinks.iter_mut() {
            sink.record(&report)?;
        }
        reports.push(report);
    }
    Ok(reports)
}
