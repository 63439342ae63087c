//! Consolidation engine: folding raw rows into one entry per description.
//!
//! The raw, un-normalized description is the grouping key. The display name
//! (estimate marker stripped) and the category are derived from the first
//! sighting of a key only; later duplicate rows just accumulate hours, in
//! row order, so floating-point totals are reproducible.

use indexmap::map::Entry as Slot;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{ColumnSet, Entry};

/// A parenthesized integer followed by a single space, e.g. `(3) `.
static ESTIMATE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d+\) ").expect("estimate marker pattern is valid"));

/// Fold data rows into one entry per distinct raw description.
///
/// Fields beyond a row's length read as empty strings, matching the
/// tolerance of the flexible CSV reader upstream.
pub fn consolidate(rows: &[Vec<String>], columns: &ColumnSet) -> IndexMap<String, Entry> {
    let mut consolidated: IndexMap<String, Entry> = IndexMap::new();

    for row in rows {
        let name = field(row, columns.notes);
        let category = field(row, columns.task);
        let hours = parse_hours(field(row, columns.time));

        match consolidated.entry(name.to_string()) {
            Slot::Occupied(mut slot) => {
                let entry = slot.get_mut();
                if entry.category != category {
                    // Policy: first-seen category wins. Surface the conflict
                    // in logs rather than silently dropping it.
                    tracing::warn!(
                        description = name,
                        kept = %entry.category,
                        ignored = %category,
                        "duplicate description with conflicting category"
                    );
                }
                entry.hours += hours;
            }
            Slot::Vacant(slot) => {
                slot.insert(Entry {
                    category: category.to_string(),
                    name: strip_estimate_marker(name),
                    hours,
                });
            }
        }
    }

    consolidated
}

/// Strip the first estimate marker (`(<digits>) `) from a description.
///
/// Only the first match is removed; a description with no marker comes back
/// unchanged. The marker is display noise, never part of the grouping key.
pub fn strip_estimate_marker(name: &str) -> String {
    ESTIMATE_MARKER.replace(name, "").into_owned()
}

/// Parse a time field the way the exports are actually filled in: a clean
/// float when possible, otherwise the longest numeric prefix ("1.5h" is
/// 1.5), otherwise 0.0. Malformed values never fail the run, and the
/// non-finite spellings `f64::parse` accepts ("nan", "inf") count as
/// malformed: one such cell must not poison the grand total.
pub fn parse_hours(raw: &str) -> f64 {
    let value = raw.trim();
    if let Some(parsed) = parse_finite(value) {
        return parsed;
    }

    let mut best = 0.0;
    for end in 1..=value.len() {
        if !value.is_char_boundary(end) {
            continue;
        }
        if let Some(parsed) = parse_finite(&value[..end]) {
            best = parsed;
        }
    }
    best
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn field(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}
