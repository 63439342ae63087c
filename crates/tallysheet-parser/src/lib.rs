//! # tallysheet-parser
//!
//! CSV ingestion for tallysheet.
//!
//! Splits a timesheet export into its header row and data rows. Column
//! meaning is not interpreted here; the core crate resolves logical columns
//! against the header.
//!
//! ## Example
//!
//! ```rust
//! use tallysheet_parser::parse_sheet;
//!
//! let sheet = parse_sheet("Task,Hours,Notes\nDev,1.5,Fix the build\n").unwrap();
//! assert_eq!(sheet.header, ["Task", "Hours", "Notes"]);
//! assert_eq!(sheet.rows.len(), 1);
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Parsing error
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Input contains no header row")]
    EmptyInput,

    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A tokenized timesheet: one header row plus zero or more data rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    /// The first record of the file, consumed by column resolution
    pub header: Vec<String>,
    /// Every remaining record, field for field as written
    pub rows: Vec<Vec<String>>,
}

/// Read and tokenize a timesheet CSV from a path.
///
/// The path must exist; a missing file is fatal and surfaced verbatim,
/// never recovered.
pub fn read_sheet(path: &Path) -> Result<Sheet, ParseError> {
    if !path.exists() {
        return Err(ParseError::InputNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_sheet(&content)
}

/// Tokenize a timesheet CSV from a string.
///
/// The reader is flexible: ragged rows are tolerated (missing trailing
/// fields read as empty downstream) and quoting follows standard CSV rules,
/// so descriptions may contain commas and newlines.
pub fn parse_sheet(input: &str) -> Result<Sheet, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => to_fields(&record?),
        None => return Err(ParseError::EmptyInput),
    };

    let mut rows = Vec::new();
    for record in records {
        rows.push(to_fields(&record?));
    }

    Ok(Sheet { header, rows })
}

fn to_fields(record: &csv::StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}
