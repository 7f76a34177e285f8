use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use dressup::logging;
use dressup::ui::runtime::{run, RunOptions};

/// Terminal dress-up toy: pick an outfit, watch the layer stack, save a
/// PNG snapshot.
#[derive(Parser, Debug)]
#[command(name = "dressup", version, about)]
struct Cli {
    /// Directory holding the base figure and catalog images.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Where the exported PNG is written.
    #[arg(long, default_value = "maduro-fit.png")]
    out: PathBuf,

    /// Log file; defaults to the user state dir.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dressup starting");

    run(RunOptions {
        assets_dir: cli.assets,
        out_path: cli.out,
    })?;
    Ok(())
}
