mod app;
mod convert;
mod headless;
mod panels;

use anyhow::{bail, Context, Result};
use clap::Parser;
use lumen_core::consts::DEFAULT_DEVICE_INDEX;
use lumen_core::pipeline::config::PreviewConfig;
use lumen_core::pipeline::StopReason;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lumen", about = "Live CLAHE + gamma enhancement preview")]
#[command(version)]
struct Cli {
    /// Capture device index
    #[arg(short, long, default_value_t = DEFAULT_DEVICE_INDEX)]
    device: u32,

    /// Enable verbose output (per-frame metrics)
    #[arg(short, long)]
    verbose: bool,

    /// Run without a window, logging metrics for every frame
    #[arg(long)]
    headless: bool,

    /// Stop after this many frames
    #[arg(long, requires = "headless", value_parser = clap::value_parser!(u64).range(1..))]
    frames: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config = PreviewConfig {
        device_index: cli.device,
        ..Default::default()
    };

    if cli.print_config {
        let text = toml::to_string_pretty(&config).context("Failed to serialize config")?;
        print!("{text}");
        return Ok(());
    }

    let reason = if cli.headless {
        headless::run(&config, cli.frames)?
    } else {
        app::run(config)?
    };
    finish(reason)
}

/// Map the loop outcome to the process exit status.
fn finish(reason: StopReason) -> Result<()> {
    if reason.is_fatal() {
        bail!("{reason}");
    }
    match reason {
        StopReason::ReadFailed(msg) => eprintln!("Frame not received, exiting: {msg}"),
        other => info!("Exiting: {other}"),
    }
    Ok(())
}
