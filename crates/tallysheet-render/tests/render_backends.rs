//! Integration tests for the render backends, driven through the public
//! `Renderer` trait the way the CLI drives them.

use pretty_assertions::assert_eq;
use tallysheet_core::{Entry, Renderer, RoundingMode, Summary};
use tallysheet_render::{CsvRenderer, JsonRenderer, MarkdownRenderer, TextRenderer};

fn entry(category: &str, name: &str, hours: f64) -> Entry {
    Entry {
        category: category.to_string(),
        name: name.to_string(),
        hours,
    }
}

fn sample_summary() -> Summary {
    Summary {
        entries: vec![entry("Dev", "Fix X", 3.5), entry("QA", "Test Y", 0.5)],
        total: 4.0,
        rounding: RoundingMode::None,
    }
}

// ============================================================================
// Text Renderer
// ============================================================================

#[test]
fn text_table_layout() {
    let table = TextRenderer::new().render(&sample_summary()).unwrap();

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Task   Description  Hours");
    assert_eq!(lines[1], "Dev    Fix X          3.5");
    assert_eq!(lines[2], "QA     Test Y         0.5");
    assert_eq!(lines[3], "-".repeat(25));
    assert_eq!(lines[4], format!("Total{}4", " ".repeat(19)));

    // Every line spans the same width; hours stay right-aligned.
    assert!(lines.iter().all(|line| line.chars().count() == 25));
}

#[test]
fn text_table_without_headers() {
    let table = TextRenderer::new()
        .without_headers()
        .render(&sample_summary())
        .unwrap();

    assert!(!table.contains("Description"));
    assert!(table.contains("Fix X"));
    assert!(table.contains("Total"));
}

#[test]
fn text_table_labels_a_rounded_total() {
    let summary = Summary {
        entries: vec![entry("Dev", "Fix X", 1.1)],
        total: 1.25,
        rounding: RoundingMode::TotalOnly,
    };

    let table = TextRenderer::new().render(&summary).unwrap();
    assert!(table.contains("Total (rounded)"));
}

#[test]
fn text_table_custom_headers() {
    let table = TextRenderer::new()
        .headers(["Projekt", "Beschreibung", "Stunden"])
        .render(&sample_summary())
        .unwrap();

    assert!(table.starts_with("Projekt"));
    assert!(table.contains("Stunden"));
}

// ============================================================================
// Markdown Renderer
// ============================================================================

#[test]
fn markdown_pipe_table() {
    let markdown = MarkdownRenderer::new().render(&sample_summary()).unwrap();

    let expected = "\
| Task | Description | Hours |
| --- | --- | ---: |
| Dev | Fix X | 3.5 |
| QA | Test Y | 0.5 |
| **Total** | | **4** |
";
    assert_eq!(markdown, expected);
}

// ============================================================================
// CSV Renderer
// ============================================================================

#[test]
fn csv_output_round_trips_through_the_parser() {
    let csv = CsvRenderer::new().render(&sample_summary()).unwrap();

    let sheet = tallysheet_parser::parse_sheet(&csv).unwrap();
    assert_eq!(sheet.header, ["Task", "Description", "Hours"]);
    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(sheet.rows[0], ["Dev", "Fix X", "3.5"]);
    assert_eq!(sheet.rows[2], ["Total", "", "4"]);
}

#[test]
fn csv_quotes_embedded_commas() {
    let summary = Summary {
        entries: vec![entry("Dev", "Fix build, then deploy", 2.0)],
        total: 2.0,
        rounding: RoundingMode::None,
    };

    let csv = CsvRenderer::new().render(&summary).unwrap();
    assert!(csv.contains("\"Fix build, then deploy\""));

    let sheet = tallysheet_parser::parse_sheet(&csv).unwrap();
    assert_eq!(sheet.rows[0][1], "Fix build, then deploy");
}

// ============================================================================
// JSON Renderer
// ============================================================================

#[test]
fn json_output_carries_the_whole_summary() {
    let json = JsonRenderer::new().render(&sample_summary()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total"], 4.0);
    assert_eq!(value["rounding"], "None");
    assert_eq!(value["entries"][0]["category"], "Dev");
    assert_eq!(value["entries"][0]["name"], "Fix X");
    assert_eq!(value["entries"][1]["hours"], 0.5);
}

#[test]
fn json_pretty_output_is_still_valid() {
    let json = JsonRenderer::new().pretty().render(&sample_summary()).unwrap();

    assert!(json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["entries"].as_array().unwrap().len(), 2);
}
