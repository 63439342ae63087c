//! # tallysheet-core
//!
//! Core domain model and consolidation pipeline for the tallysheet
//! timesheet reporting tool.
//!
//! This crate provides:
//! - Domain types: `Entry`, `ColumnSet`, `ReportOptions`, `Summary`
//! - The pipeline stages: column resolution, per-description consolidation,
//!   quarter-hour rounding, ranking, and summary assembly
//! - Error types and the `Renderer` trait
//!
//! ## Example
//!
//! ```rust
//! use tallysheet_core::{build_report, ReportOptions, RoundingMode};
//!
//! let header = vec!["Task".to_string(), "Hours".to_string(), "Notes".to_string()];
//! let rows = vec![
//!     vec!["Dev".to_string(), "1.0".to_string(), "(1) Fix X".to_string()],
//!     vec!["Dev".to_string(), "2.5".to_string(), "(1) Fix X".to_string()],
//! ];
//!
//! let options = ReportOptions::new().rounding(RoundingMode::None);
//! let summary = build_report(&header, &rows, &options).unwrap();
//! assert_eq!(summary.entries.len(), 1);
//! assert_eq!(summary.entries[0].name, "Fix X");
//! assert_eq!(summary.total, 3.5);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod consolidate;
pub mod resolve;
pub mod round;
pub mod summary;

pub use consolidate::consolidate;
pub use resolve::resolve_columns;
pub use round::round_quarter;
pub use summary::{summarize, Summary};

// ============================================================================
// Configuration
// ============================================================================

/// How rounding is applied to a report.
///
/// `PerEntry` and `TotalOnly` are deliberately distinct deployments of the
/// same rounding rule: summing rounded entries and rounding a raw sum do
/// not agree in general.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Raw values everywhere, no rounding at all
    None,
    /// Round every consolidated entry, then total the rounded values
    #[default]
    PerEntry,
    /// Keep entries raw and round only the grand total
    TotalOnly,
}

/// Options controlling column resolution and rounding
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Header name of the category column
    pub task_column: String,
    /// Header name of the time column
    pub time_column: String,
    /// Header name of the description column
    pub notes_column: String,
    /// Active rounding mode
    pub rounding: RoundingMode,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            task_column: "Task".into(),
            time_column: "Hours".into(),
            notes_column: "Notes".into(),
            rounding: RoundingMode::PerEntry,
        }
    }
}

impl ReportOptions {
    /// Create options with the default column names and per-entry rounding
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header name of the category column
    pub fn task_column(mut self, name: impl Into<String>) -> Self {
        self.task_column = name.into();
        self
    }

    /// Set the header name of the time column
    pub fn time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = name.into();
        self
    }

    /// Set the header name of the description column
    pub fn notes_column(mut self, name: impl Into<String>) -> Self {
        self.notes_column = name.into();
        self
    }

    /// Set the rounding mode
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}

// ============================================================================
// Domain Types
// ============================================================================

/// Resolved positional indexes of the three logical columns.
///
/// Invariant: every index was found in the header row, or resolution failed
/// before this value existed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSet {
    /// Index of the category column
    pub task: usize,
    /// Index of the time column
    pub time: usize,
    /// Index of the description column
    pub notes: usize,
}

/// One consolidated line of the report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Category label, copied verbatim from the task column on first sighting
    pub category: String,
    /// Description with the estimate marker stripped
    pub name: String,
    /// Hours accumulated across every row sharing the raw description
    pub hours: f64,
}

// ============================================================================
// Errors
// ============================================================================

/// Report construction error
#[derive(Debug, Error)]
pub enum ReportError {
    /// A configured logical column is absent from the header row.
    /// Raised before any row is processed; there is no partial resolution.
    #[error("Unable to find column for {role}: {name}")]
    ColumnNotFound {
        /// Which logical column was being resolved (task, time, notes)
        role: &'static str,
        /// The configured header name that was not found
        name: String,
    },
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),
}

// ============================================================================
// Traits
// ============================================================================

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a summary to the output format
    fn render(&self, summary: &Summary) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run the full pipeline: resolve columns, consolidate, round, rank, total.
///
/// `header` is the first record of the export and is not part of the data
/// set; `rows` are everything after it.
pub fn build_report(
    header: &[String],
    rows: &[Vec<String>],
    options: &ReportOptions,
) -> Result<Summary, ReportError> {
    let columns = resolve_columns(header, options)?;
    let consolidated = consolidate(rows, &columns);
    Ok(summarize(consolidated, options.rounding))
}

// ============================================================================
// Tests
// ============================================================================
