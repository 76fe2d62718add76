//! In-memory tabular data with CSV import and export.
//!
//! Cells are kept as the strings they were read as, so columns a caller does
//! not touch are written back byte-for-byte.

use thiserror::Error;

/// Errors raised while reading or writing delimited text.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input contained no header row.
    #[error("The file is empty or has no header row")]
    Empty,
    /// The CSV reader rejected the input (ragged rows, invalid UTF-8, ...).
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The CSV writer failed to flush its buffer.
    #[error("Failed to finish CSV output: {0}")]
    Flush(String),
    /// A row's width does not match the header.
    #[error("Row {row} has {found} cells but the header has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A column being set has a different length than the table.
    #[error("Column {column} has {found} values but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Header plus rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking every row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != headers.len())
        {
            return Err(TableError::RowWidth {
                row,
                expected: headers.len(),
                found: cells.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    /// One-row table from column/value pairs.
    pub fn from_row<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values): (Vec<String>, Vec<String>) = fields
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .unzip();
        Self {
            headers,
            rows: vec![values],
        }
    }

    /// Parse comma-delimited text with a header row.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(TableError::Empty);
        }
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Self::new(headers, rows)
    }

    /// Serialize to UTF-8 comma-delimited text with a header row and no index column.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, TableError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|err| TableError::Flush(err.error().to_string()))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[index].as_str())
    }

    /// First `n` rows, keeping the header.
    pub fn head(&self, n: usize) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Replace the named column's values, or append the column when absent.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}
