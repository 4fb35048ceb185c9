use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use press_app::roadmap;
use press_core::logging;
use press_core::{ConfigOverrides, PressConfig};

#[derive(Parser)]
#[command(
    name = "roadmap-tables",
    about = "Write the certification, service and roadmap tables as CSV and bundle them into a ZIP"
)]
struct Cli {
    /// Output directory (default: out_revised_tables)
    #[arg(short = 'd', long)]
    out_dir: Option<PathBuf>,
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        pdf_path: None,
        tables_dir: cli.out_dir,
    };
    let config = PressConfig::resolve(cli.config.as_deref(), overrides)?;
    let _guard = logging::init_logging(&config)?;
    debug!("Resolved config: {config:?}");

    let report = roadmap::export(&config.tables_dir)?;
    println!("{report}");
    Ok(())
}
