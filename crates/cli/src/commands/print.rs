//! `print` command implementation.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use registry::{install, Registry};

use crate::cli::PrintArgs;

/// Execute the `print` command
pub async fn run_print(args: &PrintArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    let registry = Registry::instance();
    install(registry, &blueprint).context("Failed to install stream bindings")?;

    if !registry.has_stream(&args.stream) {
        warn!(stream = %args.stream, "Stream has no sink; messages will be discarded");
    }

    let mut interrupted = false;

    if args.message.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());

        tokio::select! {
            result = pump_lines(stdin, registry, &args.stream) => {
                let lines = result?;
                info!(stream = %args.stream, lines, "Input closed");
            }
            _ = shutdown_signal() => {
                warn!("Received shutdown signal, stopping");
                interrupted = true;
            }
        }
    } else {
        registry
            .print(&args.stream, &args.message.join(" "))
            .with_context(|| format!("Failed to print to stream '{}'", args.stream))?;
    }

    registry.flush().context("Failed to flush sinks")?;

    if args.summary {
        print_summary(registry);
    }

    // The stdin reader sits on a blocking thread that would keep the
    // runtime from shutting down.
    if interrupted {
        std::process::exit(130);
    }

    Ok(())
}

/// Print every line from `reader` to `stream` until EOF
///
/// Returns the number of lines read.
pub async fn pump_lines<R>(reader: R, registry: &Registry, stream: &str) -> Result<u64>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut count = 0u64;

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        registry
            .print(stream, &line)
            .with_context(|| format!("Failed to print to stream '{}'", stream))?;
        count += 1;
    }

    Ok(count)
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn print_summary(registry: &Registry) {
    eprintln!("\n=== Dispatch Summary ===");
    for (stream, snapshot) in registry.metrics() {
        eprintln!(
            "  {:?}: {} emitted, {} failed",
            stream.as_str(),
            snapshot.emit_count,
            snapshot.failure_count
        );
    }
    eprintln!("  unrouted: {}", registry.unrouted_count());
}
