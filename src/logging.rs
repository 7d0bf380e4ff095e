// Log routing: warnings and errors (failed draws, null frames) go to stderr,
// informational traces (frame creation, draw notes, timings) go to stdout.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Send WARN and ERROR events to `diagnostics`, everything else to `output`.
pub fn split_writer<D, O>(diagnostics: D, output: O) -> impl for<'w> MakeWriter<'w> + Send + Sync + 'static
where
    D: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    diagnostics.with_max_level(Level::WARN).or_else(output)
}

/// Install the global subscriber: filter from `RUST_LOG` (default `info`),
/// diagnostics on stderr, traces on stdout.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(split_writer(std::io::stderr, std::io::stdout))
        .init();
}
