//! Markdown pipe-table rendering.

use tallysheet_core::{RenderError, Renderer, Summary};

use crate::format_hours;

/// Markdown pipe-table renderer. The hours column is right-aligned and the
/// total row is bolded.
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MarkdownRenderer {
    type Output = String;

    fn render(&self, summary: &Summary) -> Result<String, RenderError> {
        let mut out = String::from("| Task | Description | Hours |\n| --- | --- | ---: |\n");

        for entry in &summary.entries {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                escape(&entry.category),
                escape(&entry.name),
                format_hours(entry.hours),
            ));
        }

        out.push_str(&format!(
            "| **{}** | | **{}** |\n",
            summary.total_label(),
            format_hours(summary.total),
        ));

        Ok(out)
    }
}

/// Escape pipe characters so cell text cannot break the table.
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
