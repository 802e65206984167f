//! Generate command - writes one page per video record

use std::{path::Path, process::ExitCode, time::Instant};

use color_eyre::eyre::Result;
use vidpages_generator::{Generator, Reporter};

use super::{InputArgs, resolve_config};

/// Run the generate command.
///
/// Record-level failures are part of a successful run and only show up in
/// the summary. A missing input or unreadable data file has already been
/// reported on the console and yields a failing exit code.
pub fn run(config_path: Option<&Path>, args: &InputArgs) -> Result<ExitCode> {
    let start = Instant::now();
    tracing::info!(?config_path, ?args, "Starting generation");

    let config = resolve_config(config_path, args)?;
    let generator = Generator::new(config);
    let mut reporter = Reporter::console();

    match generator.run(&mut reporter) {
        Ok(summary) => {
            tracing::info!(
                created = summary.created,
                skipped = summary.skipped,
                errors = summary.errors,
                duration = ?start.elapsed(),
                "Generation finished"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Generation aborted");
            Ok(ExitCode::FAILURE)
        }
    }
}
