//! Ranking and summary assembly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{round_quarter, Entry, RoundingMode};

/// Final report: ranked entries plus a grand total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Entries sorted by category ascending, then hours descending
    pub entries: Vec<Entry>,
    /// Sum of the hour values actually present in `entries`, rounded
    /// itself only in `TotalOnly` mode
    pub total: f64,
    /// The rounding mode that produced this summary
    pub rounding: RoundingMode,
}

impl Summary {
    /// Label for the total row. A total that was itself rounded is marked,
    /// so it cannot be mistaken for a plain sum of the printed entries.
    pub fn total_label(&self) -> &'static str {
        match self.rounding {
            RoundingMode::TotalOnly => "Total (rounded)",
            RoundingMode::None | RoundingMode::PerEntry => "Total",
        }
    }
}

/// Apply the rounding mode, rank the entries, and compute the grand total.
pub fn summarize(consolidated: IndexMap<String, Entry>, rounding: RoundingMode) -> Summary {
    let mut entries: Vec<Entry> = consolidated.into_values().collect();

    if rounding == RoundingMode::PerEntry {
        for entry in &mut entries {
            entry.hours = round_quarter(entry.hours);
        }
    }

    rank(&mut entries);

    let raw_total: f64 = entries.iter().map(|entry| entry.hours).sum();
    let total = match rounding {
        RoundingMode::TotalOnly => round_quarter(raw_total),
        RoundingMode::None | RoundingMode::PerEntry => raw_total,
    };

    Summary { entries, total, rounding }
}

/// Sort entries by category ascending, then hours descending.
///
/// The sort is stable, so insertion order decides full ties.
pub fn rank(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| b.hours.total_cmp(&a.hours))
    });
}
