//! View state of the record browser.

use crate::api::FetchQuery;
use crate::model::{Record, SortColumn, SortPolicy, SortState};
use crate::ui::mvi::UiState;

/// Everything the table view needs, plus the bookkeeping that keeps stale
/// fetch results out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowserState {
    /// Rows in display order.
    pub records: Vec<Record>,
    /// True once any fetch has succeeded; an empty result still counts.
    pub loaded: bool,
    /// True while the latest issued fetch is outstanding.
    pub loading: bool,
    pub sort: SortState,
    pub filter_column: Option<SortColumn>,
    /// Sequence number of the most recently issued fetch. Zero before the first.
    pub latest_seq: u64,
    /// Query of the latest issued fetch while it is outstanding.
    pub pending_query: Option<FetchQuery>,
    /// Query whose result is currently shown.
    pub shown_query: Option<FetchQuery>,
}

impl UiState for BrowserState {}

impl BrowserState {
    /// Sequence number the next fetch will carry.
    pub fn next_seq(&self) -> u64 {
        self.latest_seq + 1
    }

    /// Whether a completion tagged `seq` may still update the view.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest_seq
    }

    /// Sort the user is heading towards: the outstanding server sort if one
    /// is in flight, otherwise what is shown.
    pub fn requested_sort(&self) -> SortState {
        match self.pending_query {
            Some(FetchQuery::Sorted { column, asc }) => SortState::sorted(column, asc),
            _ => self.sort,
        }
    }

    /// With a filter column selected and rows resident, the rows are a small
    /// filtered subset and are sorted in memory; otherwise the server sorts.
    pub fn sort_policy(&self) -> SortPolicy {
        if self.filter_column.is_some() && self.loaded {
            SortPolicy::LocalSubset
        } else {
            SortPolicy::ServerAuthoritative
        }
    }
}
