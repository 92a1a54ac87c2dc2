use std::io;

use color_eyre::eyre::Result;
use tracing::error;
use two_sum::{config, telemetry};

fn main() -> Result<()> {
    color_eyre::install()?;
    telemetry::init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // The report is best effort: the exit status stays successful.
    if let Err(e) = two_sum::run(&mut out, config::get()) {
        error!(error = %e, "report aborted");
    }

    Ok(())
}
