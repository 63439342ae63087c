//! Column resolution: mapping logical field names to header positions.

use crate::{ColumnSet, ReportError, ReportOptions};

/// Resolve the three logical columns against a header row.
///
/// Matching is exact; the first occurrence wins. Fails on the first
/// configured name that is absent, before any row processing happens.
pub fn resolve_columns(
    header: &[String],
    options: &ReportOptions,
) -> Result<ColumnSet, ReportError> {
    Ok(ColumnSet {
        task: position(header, &options.task_column, "task")?,
        time: position(header, &options.time_column, "time")?,
        notes: position(header, &options.notes_column, "notes")?,
    })
}

fn position(header: &[String], name: &str, role: &'static str) -> Result<usize, ReportError> {
    header
        .iter()
        .position(|cell| cell == name)
        .ok_or_else(|| ReportError::ColumnNotFound {
            role,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn resolves_default_columns() {
        let columns =
            resolve_columns(&header(&["Task", "Hours", "Notes"]), &ReportOptions::default())
                .unwrap();

        assert_eq!(columns, ColumnSet { task: 0, time: 1, notes: 2 });
    }

    #[test]
    fn resolves_reordered_columns() {
        let columns = resolve_columns(
            &header(&["Notes", "Task", "Started", "Hours"]),
            &ReportOptions::default(),
        )
        .unwrap();

        assert_eq!(columns, ColumnSet { task: 1, time: 3, notes: 0 });
    }

    #[test]
    fn missing_column_is_fatal() {
        let err = resolve_columns(&header(&["Foo", "Bar"]), &ReportOptions::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "Unable to find column for task: Task");
    }

    #[test]
    fn missing_time_column_names_the_configured_header() {
        let options = ReportOptions::new().time_column("Duration");
        let err = resolve_columns(&header(&["Task", "Hours", "Notes"]), &options).unwrap_err();

        assert_eq!(err.to_string(), "Unable to find column for time: Duration");
    }

    #[test]
    fn matching_is_exact() {
        // Case and whitespace differences do not match.
        let err = resolve_columns(&header(&["task", "Hours ", "Notes"]), &ReportOptions::default())
            .unwrap_err();

        assert!(err.to_string().contains("task"));
    }

    #[test]
    fn duplicate_header_uses_first_occurrence() {
        let columns = resolve_columns(
            &header(&["Task", "Hours", "Hours", "Notes"]),
            &ReportOptions::default(),
        )
        .unwrap();

        assert_eq!(columns.time, 1);
    }
}
