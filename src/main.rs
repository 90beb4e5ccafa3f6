use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use demoreel::config::Config;
use demoreel::logging;
use demoreel::ui;

#[derive(Parser)]
#[command(
    name = "demoreel",
    about = "Five classic front-end exercises, rebuilt for the terminal"
)]
struct Cli {
    /// Demo to open at startup: drum-kit, video-player, speech-detection,
    /// speech-synthesis or sticky-nav
    #[arg(long)]
    demo: Option<String>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if let Some(demo) = cli.demo {
        config.start_demo = demo;
    }

    ui::run(config).context("running terminal ui")?;
    Ok(())
}
