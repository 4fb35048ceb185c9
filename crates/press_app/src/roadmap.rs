use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use press_docs::{archive, csv};

use crate::plan;

/// Name of the ZIP bundle written next to the tables.
pub const ARCHIVE_NAME: &str = "Revised_Roadmap_Tables.zip";

/// Paths produced by one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub tables: Vec<PathBuf>,
    pub archive: PathBuf,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created:")?;
        for path in &self.tables {
            writeln!(f, " - {}", path.display())?;
        }
        write!(f, "Zipped -> {}", self.archive.display())
    }
}

/// Write the three plan tables as CSV under `out_dir` and bundle them into
/// [`ARCHIVE_NAME`] in the same directory.
///
/// The directory is created if missing. Existing files are overwritten.
pub fn export(out_dir: &Path) -> Result<ExportReport> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let tables = plan::all_tables()?;
    let mut written = Vec::with_capacity(tables.len());
    for table in &tables {
        written.push(csv::write_csv_file(out_dir, table)?);
    }

    let archive_path = out_dir.join(ARCHIVE_NAME);
    archive::bundle_files(&archive_path, &written)?;
    info!("Exported {} tables to {}", written.len(), out_dir.display());

    Ok(ExportReport {
        tables: written,
        archive: archive_path,
    })
}
