use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;

use termfolio::config::Config;
use termfolio::contact::build_transport;
use termfolio::logging;
use termfolio::shutdown::{ShutdownHandle, SignalListener};
use termfolio::ui::{self, App, Page};

#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about = "Portfolio in your terminal")]
struct Cli {
    /// Config file (default: <config_dir>/termfolio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulate sends instead of calling EmailJS
    #[arg(long)]
    dry_run: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log file (default: <data_dir>/termfolio/termfolio.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Page shown first
    #[arg(long, value_enum, default_value = "web")]
    page: Page,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from(path)
        }
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let log_path = logging::init_tracing(cli.log_file.as_deref(), &cli.log_level);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = ?log_path,
        page = cli.page.title(),
        "Starting termfolio"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let transport = build_transport(&config, cli.dry_run)?;
    tracing::info!(transport = transport.name(), "Contact transport ready");

    let shutdown = ShutdownHandle::new();
    let _signals = SignalListener::install(shutdown.clone())
        .context("Failed to install signal handlers")?;

    let app = App::new(&config, cli.page).context("Invalid animation settings")?;
    let tick_rate = Duration::from_millis(config.motion.tick_ms);
    ui::run(app, transport, runtime.handle().clone(), shutdown, tick_rate)?;

    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("Exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["termfolio"]);
        assert_eq!(cli.page, Page::WebDev);
        assert!(!cli.dry_run);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn page_and_dry_run() {
        let cli = Cli::parse_from(["termfolio", "--page", "contact", "--dry-run"]);
        assert_eq!(cli.page, Page::Contact);
        assert!(cli.dry_run);
    }
}
