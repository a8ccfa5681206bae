//! mybar — an i3bar status line: media, network, sensors, volume, weather,
//! battery and a clock, fed by external collectors over a Unix socket.
//!
//! Run with:  `RUST_LOG=info mybar`  (as `status_command` in the i3 config)

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mybar")]
#[command(version, about = "Status line generator for i3bar")]
struct Args {
    /// Config file (default: $XDG_CONFIG_HOME/mybar/mybar.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the config, print the resolved layout and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the i3bar protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("mybar v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = match args.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file '{}' does not exist", path.display());
            }
            path
        }
        None => mybar_config::default_path(),
    };

    let config = mybar_config::load(&config_path)
        .with_context(|| format!("loading '{}'", config_path.display()))?;

    if args.check {
        mybar_theme::Theme::from_config(&config).context("building theme")?;
        let layout = mybar_renderer::BarLayout::from_config(&config);
        println!("{}", layout.kinds().join(" "));
        return Ok(());
    }

    mybar_i3bar::run(config_path, config).await?;
    Ok(())
}
