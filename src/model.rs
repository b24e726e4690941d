//! Financial record model and the sort vocabulary shared by the controller,
//! the network layer and the table view.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One row of an annual income statement as served by the backend.
///
/// The backend contract is exactly these six fields; anything else in the
/// payload is rejected at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Record {
    pub date: String,
    pub revenue: f64,
    pub net_income: f64,
    pub gross_profit: f64,
    pub eps: f64,
    pub operating_income: f64,
}

/// Columns that can drive ordering or a range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Date,
    Revenue,
    NetIncome,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [SortColumn::Date, SortColumn::Revenue, SortColumn::NetIncome];

    /// Name used in query strings.
    pub fn wire_name(self) -> &'static str {
        match self {
            SortColumn::Date => "date",
            SortColumn::Revenue => "revenue",
            SortColumn::NetIncome => "netIncome",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Date => "Date",
            SortColumn::Revenue => "Revenue",
            SortColumn::NetIncome => "Net Income",
        }
    }

    /// Compare two records on this column, ascending.
    ///
    /// Dates compare as strings; numeric columns by value.
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortColumn::Date => a.date.cmp(&b.date),
            SortColumn::Revenue => a.revenue.total_cmp(&b.revenue),
            SortColumn::NetIncome => a.net_income.total_cmp(&b.net_income),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active ordering. `None` means the server order is shown untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<(SortColumn, bool)>,
}

impl SortState {
    /// State ordering by `column` in the given direction.
    pub fn sorted(column: SortColumn, ascending: bool) -> Self {
        SortState {
            active: Some((column, ascending)),
        }
    }

    pub fn column(&self) -> Option<SortColumn> {
        self.active.map(|(column, _)| column)
    }

    pub fn ascending(&self) -> Option<bool> {
        self.active.map(|(_, asc)| asc)
    }

    /// Direction shown for `column`, if it is the active one.
    pub fn direction_of(&self, column: SortColumn) -> Option<bool> {
        match self.active {
            Some((active, asc)) if active == column => Some(asc),
            _ => None,
        }
    }

    /// Next state after a click on `column`: a new column starts ascending,
    /// the active column flips.
    pub fn toggled(self, column: SortColumn) -> SortState {
        let asc = match self.active {
            Some((active, asc)) if active == column => !asc,
            _ => true,
        };
        SortState::sorted(column, asc)
    }
}

/// Where a sort request is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// The server holds the full dataset and sorts it.
    ServerAuthoritative,
    /// The resident records are a filtered subset; sort them in memory.
    LocalSubset,
}

/// Sort `records` in place. Stable, so equal keys keep server order.
pub fn sort_records(records: &mut [Record], column: SortColumn, ascending: bool) {
    records.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}
