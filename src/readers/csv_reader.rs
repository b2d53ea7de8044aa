use crate::error::{ProcessingError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Every row of a CSV export, held alongside its header row.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl CsvTable {
    /// Read a whole CSV file. The file handle is closed before this returns.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let records = reader
            .records()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.records.iter().map(move |record| RawRow {
            headers: &self.headers,
            record,
        })
    }
}

/// One data row viewed as a column-name to value mapping.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    headers: &'a [String],
    record: &'a StringRecord,
}

impl<'a> RawRow<'a> {
    /// Exact, case-sensitive lookup. A duplicated header resolves to its
    /// last occurrence; a short row yields `""` for its missing cells.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.headers.iter().rposition(|h| h == column)?;
        Some(self.record.get(index).unwrap_or(""))
    }

    /// Like [`RawRow::get`] but a missing column is an error naming the
    /// column and the source category.
    pub fn require(&self, column: &str, category: &str) -> Result<&'a str> {
        self.get(column).ok_or_else(|| ProcessingError::MissingColumn {
            column: column.to_string(),
            category: category.to_string(),
        })
    }

    /// Case-insensitive lookup, used only for the coordinate presence check.
    pub fn get_ignore_case(&self, column: &str) -> Option<&'a str> {
        let index = self
            .headers
            .iter()
            .rposition(|h| h.to_lowercase() == column.to_lowercase())?;
        Some(self.record.get(index).unwrap_or(""))
    }

    /// Line number in the source file, for diagnostics.
    pub fn line(&self) -> Option<u64> {
        self.record.position().map(|p| p.line())
    }
}
