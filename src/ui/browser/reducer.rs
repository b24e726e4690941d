use crate::api::FetchQuery;
use crate::model::{sort_records, SortState};
use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::state::BrowserState;
use crate::ui::mvi::Reducer;

pub struct BrowserReducer;

impl Reducer for BrowserReducer {
    type State = BrowserState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::FetchIssued { seq, query } => {
                // Sequence numbers only move forward.
                if seq <= state.latest_seq {
                    return state;
                }
                BrowserState {
                    loading: true,
                    latest_seq: seq,
                    pending_query: Some(query),
                    ..state
                }
            }
            BrowserIntent::FetchSucceeded { seq, records } => {
                if !state.is_latest(seq) {
                    return state;
                }
                let shown_query = state.pending_query.or(state.shown_query);
                // The arrow follows the rows: a sorted result shows the order
                // it was asked for, anything else arrives in server order.
                let sort = match shown_query {
                    Some(FetchQuery::Sorted { column, asc }) => SortState::sorted(column, asc),
                    _ => SortState::default(),
                };
                BrowserState {
                    records,
                    loaded: true,
                    loading: false,
                    sort,
                    pending_query: None,
                    shown_query,
                    ..state
                }
            }
            BrowserIntent::FetchFailed { seq } | BrowserIntent::FetchAbandoned { seq } => {
                if !state.is_latest(seq) {
                    return state;
                }
                BrowserState {
                    loading: false,
                    pending_query: None,
                    ..state
                }
            }
            BrowserIntent::SortResident { sort } => {
                let (Some(column), Some(asc)) = (sort.column(), sort.ascending()) else {
                    return state;
                };
                let mut records = state.records;
                sort_records(&mut records, column, asc);
                BrowserState {
                    records,
                    sort,
                    ..state
                }
            }
            BrowserIntent::SetFilterColumn { column } => BrowserState {
                filter_column: column,
                ..state
            },
        }
    }
}
