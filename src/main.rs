use std::io;
use std::process::ExitCode;

use log::error;

use rootrace::compare::{compare, ConsoleSink, TraceSink};
use rootrace::root_finding::config::DriverCfg;
use rootrace::root_finding::functions::Family;

const USAGE: &str = "usage: rootrace f | rootrace g\n  \
                     f : sin(x) - 0.4, simple root\n  \
                     g : (sin(x) - 0.4)^2, double root";

fn main() -> ExitCode {
    env_logger::builder().init();

    let family = match std::env::args().nth(1).map(|arg| arg.parse::<Family>()) {
        Some(Ok(family)) => family,
        Some(Err(e)) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::FAILURE;
        },
        None => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        },
    };

    let mut console = ConsoleSink::new(io::stdout().lock());
    match compare(family, &DriverCfg::new(), &mut [&mut console as &mut dyn TraceSink]) {
        Ok(_)  => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}
