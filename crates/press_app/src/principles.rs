use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

use press_core::PressConfig;
use press_docs::normalize;
use press_docs::pdf::{BodyStyle, Section, Sheet, SheetLayout, render_sheet};

use crate::carver::{CARVER_QUOTE, PRINCIPLES_HEADING, PRINCIPLES_TEXT, REMINDER_HEADING, TITLE};

/// Render the principles sheet to PDF bytes.
///
/// The principles and the quotation are folded to ASCII first; the sheet
/// fonts cannot encode curly quotes.
pub fn render_bytes(generated: NaiveDate) -> Result<Vec<u8>> {
    let principles = normalize::to_ascii(PRINCIPLES_TEXT);
    let quote = normalize::to_ascii(CARVER_QUOTE);

    let sheet = Sheet {
        title: TITLE,
        sections: vec![
            Section {
                heading: PRINCIPLES_HEADING,
                body: &principles,
                style: BodyStyle::Regular,
            },
            Section {
                heading: REMINDER_HEADING,
                body: &quote,
                style: BodyStyle::Italic,
            },
        ],
    };

    render_sheet(&sheet, &SheetLayout::default(), generated)
}

/// Write the principles sheet to `config.pdf_path`, replacing any existing
/// file, and return its absolute path.
pub fn render(config: &PressConfig, generated: NaiveDate) -> Result<PathBuf> {
    let bytes = render_bytes(generated)?;
    let path = &config.pdf_path;

    std::fs::write(path, &bytes)
        .with_context(|| format!("Failed to write PDF: {}", path.display()))?;
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Cannot resolve path: {}", path.display()))?;

    info!("Wrote principles sheet ({} bytes)", bytes.len());
    Ok(absolute)
}
