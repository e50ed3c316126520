//! Logging setup for the bot binaries: one line per event, teed to stdout and a log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset: this crate and the bundled binaries at `info`,
/// dependencies (reqwest, hyper, rustls) only at `warn`.
pub const DEFAULT_LOG_FILTER: &str =
    "warn,telegram_bot=info,linecount_bot=info,echo_bot=info,clock_bot=info";

/// `YYYY-MM-DD HH:MM:SS.mmm` local time.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Opens `path` for appending, creating it and any missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber.
///
/// Lines look like `2026-01-29 12:00:00.123  INFO telegram_bot::runner: step: batch processed
/// dispatched=1 offset=12`. No ANSI codes, so the file stays greppable. `RUST_LOG` overrides
/// [`DEFAULT_LOG_FILTER`]; load `.env` before calling. Fails if a subscriber is already set.
pub fn init_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let log_file = log_file.as_ref();
    let file = open_log_file(log_file)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", log_file.display(), e))?;
    let writer = io::stdout.and(Arc::new(file));

    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
