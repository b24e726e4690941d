//! Record browser reducer: sequencing, sort state and failure handling.

mod common;

use common::{five_records, record};
use finview::api::FetchQuery;
use finview::model::{SortColumn, SortPolicy, SortState};
use finview::ui::browser::{BrowserIntent, BrowserReducer, BrowserState};
use finview::ui::mvi::Reducer;

fn reduce(state: BrowserState, intent: BrowserIntent) -> BrowserState {
    BrowserReducer::reduce(state, intent)
}

fn issued(state: BrowserState, query: FetchQuery) -> (BrowserState, u64) {
    let seq = state.next_seq();
    (reduce(state, BrowserIntent::FetchIssued { seq, query }), seq)
}

#[test]
fn initial_state_is_empty_and_idle() {
    let state = BrowserState::default();
    assert!(state.records.is_empty());
    assert!(!state.loaded);
    assert!(!state.loading);
    assert_eq!(state.sort.column(), None);
    assert_eq!(state.latest_seq, 0);
    assert!(!state.is_latest(0));
}

#[test]
fn issued_fetch_sets_loading() {
    let (state, seq) = issued(BrowserState::default(), FetchQuery::All);
    assert_eq!(seq, 1);
    assert!(state.loading);
    assert!(state.is_latest(1));
    assert_eq!(state.pending_query, Some(FetchQuery::All));
}

#[test]
fn stale_issue_does_not_rewind_sequence() {
    let (state, _) = issued(BrowserState::default(), FetchQuery::All);
    let (state, _) = issued(state, FetchQuery::All);
    let state = reduce(
        state,
        BrowserIntent::FetchIssued {
            seq: 1,
            query: FetchQuery::All,
        },
    );
    assert_eq!(state.latest_seq, 2);
}

#[test]
fn success_replaces_records() {
    let (state, seq) = issued(BrowserState::default(), FetchQuery::All);
    let state = reduce(
        state,
        BrowserIntent::FetchSucceeded {
            seq,
            records: five_records(),
        },
    );
    assert_eq!(state.records, five_records());
    assert!(state.loaded);
    assert!(!state.loading);
    assert_eq!(state.shown_query, Some(FetchQuery::All));
    assert_eq!(state.pending_query, None);
}

#[test]
fn empty_result_still_counts_as_loaded() {
    let (state, seq) = issued(BrowserState::default(), FetchQuery::All);
    let state = reduce(
        state,
        BrowserIntent::FetchSucceeded {
            seq,
            records: Vec::new(),
        },
    );
    assert!(state.loaded);
    assert!(state.records.is_empty());
}

#[test]
fn superseded_success_is_ignored() {
    let (state, first) = issued(BrowserState::default(), FetchQuery::All);
    let (state, _second) = issued(state, FetchQuery::All);
    let state = reduce(
        state,
        BrowserIntent::FetchSucceeded {
            seq: first,
            records: five_records(),
        },
    );
    assert!(state.records.is_empty());
    assert!(state.loading);
    assert!(!state.loaded);
}

#[test]
fn failure_keeps_previous_records() {
    let (state, seq) = issued(BrowserState::default(), FetchQuery::All);
    let state = reduce(
        state,
        BrowserIntent::FetchSucceeded {
            seq,
            records: five_records(),
        },
    );
    let (state, seq) = issued(state, FetchQuery::All);
    let state = reduce(state, BrowserIntent::FetchFailed { seq });
    assert_eq!(state.records, five_records());
    assert!(!state.loading);
    assert!(state.loaded);
}

#[test]
fn superseded_failure_leaves_loading_alone() {
    let (state, first) = issued(BrowserState::default(), FetchQuery::All);
    let (state, _second) = issued(state, FetchQuery::All);
    let state = reduce(state, BrowserIntent::FetchFailed { seq: first });
    assert!(state.loading);
}

#[test]
fn sorted_result_sets_indicator_and_unsorted_result_clears_it() {
    let (state, seq) = issued(
        BrowserState::default(),
        FetchQuery::Sorted {
            column: SortColumn::Date,
            asc: true,
        },
    );
    // Nothing shown until the sorted rows arrive.
    assert_eq!(state.sort.column(), None);
    assert_eq!(
        state.requested_sort(),
        SortState::sorted(SortColumn::Date, true)
    );
    let state = reduce(
        state,
        BrowserIntent::FetchSucceeded {
            seq,
            records: five_records(),
        },
    );
    assert_eq!(state.sort.direction_of(SortColumn::Date), Some(true));

    let (state, seq) = issued(state, FetchQuery::All);
    let state = reduce(
        state,
        BrowserIntent::FetchSucceeded {
            seq,
            records: five_records(),
        },
    );
    assert_eq!(state.sort.column(), None);
}

#[test]
fn failed_sorted_fetch_keeps_shown_sort() {
    let (state, seq) = issued(BrowserState::default(), FetchQuery::All);
    let state = reduce(
        state,
        BrowserIntent::FetchSucceeded {
            seq,
            records: five_records(),
        },
    );
    let (state, seq) = issued(
        state,
        FetchQuery::Sorted {
            column: SortColumn::Revenue,
            asc: true,
        },
    );
    let state = reduce(state, BrowserIntent::FetchFailed { seq });
    assert_eq!(state.sort.column(), None);
    assert_eq!(state.requested_sort(), SortState::default());
    assert_eq!(state.records, five_records());
}

#[test]
fn sort_resident_orders_in_memory() {
    let mut state = BrowserState {
        records: vec![
            record("2022-09-24", 300.0, 1.0),
            record("2024-09-28", 100.0, 3.0),
            record("2023-09-30", 200.0, 2.0),
        ],
        loaded: true,
        ..BrowserState::default()
    };
    let ascending = SortState::sorted(SortColumn::Revenue, true);
    state = reduce(state, BrowserIntent::SortResident { sort: ascending });
    let revenues: Vec<f64> = state.records.iter().map(|r| r.revenue).collect();
    assert_eq!(revenues, vec![100.0, 200.0, 300.0]);
    assert_eq!(state.sort, ascending);

    state = reduce(
        state,
        BrowserIntent::SortResident {
            sort: SortState::sorted(SortColumn::Revenue, false),
        },
    );
    let revenues: Vec<f64> = state.records.iter().map(|r| r.revenue).collect();
    assert_eq!(revenues, vec![300.0, 200.0, 100.0]);
}

#[test]
fn sort_resident_without_sort_is_noop() {
    let state = BrowserState {
        records: five_records(),
        ..BrowserState::default()
    };
    let state = reduce(
        state,
        BrowserIntent::SortResident {
            sort: SortState::default(),
        },
    );
    assert_eq!(state.records, five_records());
}

#[test]
fn sort_policy_depends_on_filter_column_and_load() {
    let mut state = BrowserState::default();
    assert_eq!(state.sort_policy(), SortPolicy::ServerAuthoritative);

    state = reduce(
        state,
        BrowserIntent::SetFilterColumn {
            column: Some(SortColumn::Revenue),
        },
    );
    // Nothing resident yet.
    assert_eq!(state.sort_policy(), SortPolicy::ServerAuthoritative);

    state.loaded = true;
    assert_eq!(state.sort_policy(), SortPolicy::LocalSubset);

    state = reduce(state, BrowserIntent::SetFilterColumn { column: None });
    assert_eq!(state.sort_policy(), SortPolicy::ServerAuthoritative);
}
