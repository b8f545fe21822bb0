// spmdocs - terminal documentation browser for the SharePoint Storage Monitor
//
// Presents the monitor's documentation (overview, code listings, deployment
// steps, dashboard queries, troubleshooting) as navigable sections in a
// terminal UI, with clipboard export for the code listings.
//
// Architecture:
// - content: the static section/block data (opaque display text)
// - tui: ratatui event loop, section navigation, copy widgets
// - logging: in-memory capture so tracing output never garbles the TUI
// - config/cli: TOML config with env and flag overrides

mod cli;
mod config;
mod content;
mod logging;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show, --reset, --edit, --path).
    // If a command was handled, exit early.
    let cli = cli::Cli::parse();
    if cli::handle_cli(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration, then apply per-session flag overrides
    let mut config = Config::from_env();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(section) = cli.section {
        config.start_section = section;
    }

    // Capture logs in memory while the alternate screen is active
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("spmdocs={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional rotating file output. The guard must be kept alive for the
    // duration of the program so buffered writes flush on exit.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    );
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!(version = config::VERSION, "starting spmdocs");

    let result = tui::run_tui(config).await;

    // Terminal is restored now; replay anything that went wrong during the
    // session so it isn't silently lost with the alternate screen.
    for entry in log_buffer.errors() {
        eprintln!(
            "[{}] {}: {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.target,
            entry.message
        );
    }

    result
}
