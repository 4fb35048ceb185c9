use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::table::Table;

/// Generate a CSV string from headers and rows.
///
/// Fields are quoted only when they contain a comma, a quote or a line
/// break; records end with CRLF.
pub fn generate_csv<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> Result<String> {
    let bytes = write_delimited(Vec::new(), headers, rows)?;
    String::from_utf8(bytes).context("CSV output contained invalid UTF-8")
}

/// Write `table` as UTF-8 CSV to `dir/<table file name>`, replacing any
/// existing file. Returns the path written.
pub fn write_csv_file(dir: &Path, table: &Table) -> Result<PathBuf> {
    let path = dir.join(table.file_name());
    let file = File::create(&path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    let mut file = write_delimited(file, table.headers(), table.rows())
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush CSV file: {}", path.display()))?;

    debug!("Wrote {} ({} rows)", path.display(), table.rows().len());
    Ok(path)
}

/// Read a CSV file back into its header and data records.
pub fn read_csv_file(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Missing header record in {}", path.display()))?
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            record
                .map(|r| r.iter().map(String::from).collect())
                .with_context(|| format!("Bad record #{} in {}", i + 1, path.display()))
        })
        .collect::<Result<Vec<Vec<String>>>>()?;

    Ok((headers, rows))
}

fn write_delimited<W: Write, H: AsRef<str>>(
    sink: W,
    headers: &[H],
    rows: &[Vec<String>],
) -> Result<W> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(sink);

    let header_fields: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();
    writer
        .write_record(&header_fields)
        .context("Failed to write header record")?;

    for row in rows {
        writer
            .write_record(row)
            .context("Failed to write data record")?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))
}
