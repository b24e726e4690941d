//! Query strings understood by the records backend.

use crate::model::SortColumn;
use crate::validation::RangeFilter;

/// What to ask the backend for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchQuery {
    /// The full, unsorted dataset.
    All,
    /// The full dataset ordered by `column`.
    Sorted { column: SortColumn, asc: bool },
    /// Rows whose `column` falls inside `range`.
    Filtered { column: SortColumn, range: RangeFilter },
}

impl FetchQuery {
    /// Query pairs in the order they appear on the wire.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            FetchQuery::All => Vec::new(),
            FetchQuery::Sorted { column, asc } => vec![
                ("column", column.wire_name().to_string()),
                ("asc", asc.to_string()),
            ],
            FetchQuery::Filtered { column, range } => vec![
                ("column", column.wire_name().to_string()),
                ("min", range.min().to_string()),
                ("max", range.max().to_string()),
            ],
        }
    }
}
