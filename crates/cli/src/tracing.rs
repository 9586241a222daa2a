use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::debug;
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Logs to stderr at the requested verbosity and, when a trace file is given, everything to that file.
///
/// stdout is left for command output.
pub fn configure_tracing(trace: Option<PathBuf>, verbosity: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(verbosity.log_level_filter().as_trace());

    let trace_layer = match &trace {
        Some(trace_path) => {
            let file = File::create(trace_path)
                .with_context(|| format!("Creating trace log. file: {}", trace_path.display()))?;

            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(LevelFilter::TRACE),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(trace_layer)
        .try_init()
        .context("Configuring tracing")?;

    debug!("Configured tracing. trace: {:?}", trace);

    Ok(())
}
