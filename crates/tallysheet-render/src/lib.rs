//! # tallysheet-render
//!
//! Rendering backends for tallysheet summaries.
//!
//! This crate provides:
//! - Borderless text tables for terminals
//! - Markdown pipe tables (for pasting into PRs and wikis)
//! - CSV re-export (for feeding numbers back into a spreadsheet)
//! - JSON output (for scripting consumers)
//! - Shared hour formatting
//!
//! ## Example
//!
//! ```rust
//! use tallysheet_core::{Entry, Renderer, RoundingMode, Summary};
//! use tallysheet_render::TextRenderer;
//!
//! let summary = Summary {
//!     entries: vec![Entry {
//!         category: "Dev".into(),
//!         name: "Fix X".into(),
//!         hours: 3.5,
//!     }],
//!     total: 3.5,
//!     rounding: RoundingMode::None,
//! };
//!
//! let table = TextRenderer::new().render(&summary).unwrap();
//! assert!(table.contains("Fix X"));
//! ```

pub mod csv;
pub mod json;
pub mod markdown;

pub use self::csv::CsvRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

use tallysheet_core::{RenderError, Renderer, Summary};
use unicode_width::UnicodeWidthStr;

/// Format an hour value for display: up to two decimals, trailing zeros
/// trimmed, so `3.50` prints as `3.5` and `4.00` as `4`.
pub fn format_hours(hours: f64) -> String {
    let fixed = format!("{hours:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Borderless text table renderer.
///
/// Left-aligned category and description columns, a right-aligned hours
/// column, and a rule separating the entries from the total row.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Column headers
    pub headers: [String; 3],
    /// Spaces between columns
    pub column_gap: usize,
    /// Emit the header row
    pub show_headers: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            headers: ["Task".into(), "Description".into(), "Hours".into()],
            column_gap: 2,
            show_headers: true,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the column headers
    pub fn headers(mut self, headers: [&str; 3]) -> Self {
        self.headers = headers.map(str::to_string);
        self
    }

    /// Configure the gap between columns
    pub fn column_gap(mut self, gap: usize) -> Self {
        self.column_gap = gap;
        self
    }

    /// Suppress the header row
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, summary: &Summary) -> Result<String, RenderError> {
        let mut rows: Vec<[String; 3]> = Vec::with_capacity(summary.entries.len() + 1);
        if self.show_headers {
            rows.push(self.headers.clone());
        }
        for entry in &summary.entries {
            rows.push([
                entry.category.clone(),
                entry.name.clone(),
                format_hours(entry.hours),
            ]);
        }
        let total_row = [
            summary.total_label().to_string(),
            String::new(),
            format_hours(summary.total),
        ];

        // Column widths by display width, not byte length.
        let mut widths = [0usize; 3];
        for row in rows.iter().chain(std::iter::once(&total_row)) {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.width());
            }
        }

        let mut out = String::new();
        for row in &rows {
            push_row(&mut out, row, &widths, self.column_gap);
        }
        let rule_width = widths.iter().sum::<usize>() + self.column_gap * 2;
        out.push_str(&"-".repeat(rule_width));
        out.push('\n');
        push_row(&mut out, &total_row, &widths, self.column_gap);

        Ok(out)
    }
}

fn push_row(out: &mut String, row: &[String; 3], widths: &[usize; 3], gap: usize) {
    let pad = " ".repeat(gap);

    out.push_str(&row[0]);
    out.push_str(&" ".repeat(widths[0].saturating_sub(row[0].width())));
    out.push_str(&pad);

    out.push_str(&row[1]);
    out.push_str(&" ".repeat(widths[1].saturating_sub(row[1].width())));
    out.push_str(&pad);

    // Right-align the hours column; no trailing spaces after it.
    out.push_str(&" ".repeat(widths[2].saturating_sub(row[2].width())));
    out.push_str(&row[2]);
    out.push('\n');
}
