use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::processors::DocumentAssembler;
use crate::readers::CategoryReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::{DocumentWriter, OutputFormat};
use std::path::PathBuf;
use tracing::info;

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub placemark_count: usize,
    pub folders: Vec<(String, usize)>,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl RunSummary {
    pub fn message(&self) -> String {
        format!("Successfully processed {} data points.", self.placemark_count)
    }
}

/// Load every requested source, assemble one document and write it.
///
/// Either every source is processed and the output file written, or an
/// error is returned and nothing is written.
pub fn run(cli: Cli) -> Result<RunSummary> {
    let sources = cli.sources();
    if sources.is_empty() {
        return Err(ProcessingError::NoSourceSpecified);
    }

    // Reject the output path before doing any work.
    OutputFormat::from_path(&cli.output)?;

    let progress = ProgressReporter::new_spinner("Loading sources...", cli.quiet);

    let mut groups = Vec::with_capacity(sources.len());
    for (category, path) in sources {
        progress.set_message(&format!("Loading {} from {}", category, path.display()));
        groups.push(CategoryReader::new(category).read_group(path)?);
    }

    let folders = groups
        .iter()
        .map(|g| (g.name().to_string(), g.len()))
        .collect();

    progress.set_message("Assembling document...");
    let (document, placemark_count) =
        DocumentAssembler::new(cli.doc_name, cli.doc_id).assemble(groups);

    let format = DocumentWriter::new().write(&document, &cli.output)?;
    progress.finish_with_message(&format!("Wrote {}", cli.output.display()));

    info!(
        "Processed {} placemarks into {}",
        placemark_count,
        cli.output.display()
    );

    Ok(RunSummary {
        placemark_count,
        folders,
        output: cli.output,
        format,
    })
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the level.
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kmz_processor={}", level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
