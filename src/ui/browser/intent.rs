use crate::api::FetchQuery;
use crate::model::{Record, SortColumn, SortState};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// A fetch tagged `seq` was handed to the fetch worker.
    FetchIssued { seq: u64, query: FetchQuery },
    /// The fetch tagged `seq` returned rows.
    FetchSucceeded { seq: u64, records: Vec<Record> },
    /// The fetch tagged `seq` failed. Rows already shown stay.
    FetchFailed { seq: u64 },
    /// The fetch tagged `seq` never left the UI (worker unavailable).
    FetchAbandoned { seq: u64 },
    /// Reorder the resident rows in memory and show `sort` as active.
    SortResident { sort: SortState },
    SetFilterColumn { column: Option<SortColumn> },
}

impl Intent for BrowserIntent {}
