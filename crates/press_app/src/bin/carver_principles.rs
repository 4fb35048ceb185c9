use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use press_app::principles;
use press_core::logging;
use press_core::{ConfigOverrides, PressConfig};

#[derive(Parser)]
#[command(
    name = "carver-principles",
    about = "Render the George Washington Carver principles sheet to PDF"
)]
struct Cli {
    /// Output PDF path (default: George_Washington_Carver_Principles.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        pdf_path: cli.output,
        tables_dir: None,
    };
    let config = PressConfig::resolve(cli.config.as_deref(), overrides)?;
    let _guard = logging::init_logging(&config)?;
    debug!("Resolved config: {config:?}");

    let path = principles::render(&config, Local::now().date_naive())?;
    println!("Saved: {}", path.display());
    Ok(())
}
