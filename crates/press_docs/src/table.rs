use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("table '{table}' has no columns")]
    NoColumns { table: String },

    #[error("table '{table}' row {row} has {found} fields, header has {expected}")]
    RowWidth {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A named table: one header row plus data rows of the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    file_name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, rejecting any row whose field count differs from the header.
    ///
    /// `row` in [`TableError::RowWidth`] is the zero-based data row index.
    pub fn new(
        file_name: impl Into<String>,
        headers: &[&str],
        rows: Vec<Vec<String>>,
    ) -> Result<Self, TableError> {
        let file_name = file_name.into();
        if headers.is_empty() {
            return Err(TableError::NoColumns { table: file_name });
        }
        if let Some((row, fields)) = rows
            .iter()
            .enumerate()
            .find(|(_, fields)| fields.len() != headers.len())
        {
            return Err(TableError::RowWidth {
                table: file_name,
                row,
                expected: headers.len(),
                found: fields.len(),
            });
        }

        Ok(Self {
            file_name,
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows,
        })
    }

    /// Build a table from borrowed literal rows.
    pub fn from_literals(
        file_name: impl Into<String>,
        headers: &[&str],
        rows: &[&[&str]],
    ) -> Result<Self, TableError> {
        let rows = rows
            .iter()
            .map(|fields| fields.iter().map(|f| (*f).to_string()).collect())
            .collect();
        Self::new(file_name, headers, rows)
    }

    /// Base name of the file this table is written to.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
