//! CSV re-export of a consolidated summary.
//!
//! The output parses with the same reader the input came through, so a
//! consolidated sheet can be consolidated again or opened in a spreadsheet.

use tallysheet_core::{RenderError, Renderer, Summary};

use crate::format_hours;

/// CSV renderer. The total row is appended with an empty description field.
#[derive(Clone, Debug, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for CsvRenderer {
    type Output = String;

    fn render(&self, summary: &Summary) -> Result<String, RenderError> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());

        write_record(&mut writer, ["Task", "Description", "Hours"])?;
        for entry in &summary.entries {
            let hours = format_hours(entry.hours);
            write_record(
                &mut writer,
                [entry.category.as_str(), entry.name.as_str(), hours.as_str()],
            )?;
        }
        let total = format_hours(summary.total);
        write_record(&mut writer, [summary.total_label(), "", total.as_str()])?;

        let bytes = writer
            .into_inner()
            .map_err(|e| RenderError::Format(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| RenderError::Format(e.to_string()))
    }
}

fn write_record(
    writer: &mut ::csv::Writer<Vec<u8>>,
    record: [&str; 3],
) -> Result<(), RenderError> {
    writer
        .write_record(record)
        .map_err(|e| RenderError::Format(e.to_string()))
}
