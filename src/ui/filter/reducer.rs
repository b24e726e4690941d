use crate::model::SortColumn;
use crate::ui::filter::intent::FilterIntent;
use crate::ui::filter::state::{FilterDialogState, FilterField};
use crate::ui::mvi::Reducer;
use crate::validation::RangeErrors;

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterDialogState;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::Open { column } => FilterDialogState::Visible {
                column,
                min: String::new(),
                max: String::new(),
                focused: FilterField::Column,
                errors: RangeErrors::default(),
            },
            FilterIntent::Close => FilterDialogState::Hidden,
            FilterIntent::FocusNext | FilterIntent::FocusPrev => match state {
                FilterDialogState::Visible {
                    column,
                    min,
                    max,
                    focused,
                    errors,
                } => {
                    let focused = if matches!(intent, FilterIntent::FocusNext) {
                        focused.next()
                    } else {
                        focused.prev()
                    };
                    FilterDialogState::Visible {
                        column,
                        min,
                        max,
                        focused,
                        errors,
                    }
                }
                other => other,
            },
            FilterIntent::CycleColumn { forward } => match state {
                FilterDialogState::Visible {
                    column,
                    min,
                    max,
                    focused,
                    errors,
                } => FilterDialogState::Visible {
                    column: cycle_column(column, forward),
                    min,
                    max,
                    focused,
                    errors,
                },
                other => other,
            },
            FilterIntent::Input(ch) => edit_focused(state, |text| text.push(ch)),
            FilterIntent::Backspace => edit_focused(state, |text| {
                text.pop();
            }),
            FilterIntent::Rejected { errors } => match state {
                FilterDialogState::Visible {
                    column,
                    min,
                    max,
                    focused,
                    ..
                } => FilterDialogState::Visible {
                    column,
                    min,
                    max,
                    focused,
                    errors,
                },
                other => other,
            },
        }
    }
}

/// Apply `edit` to the focused text field and clear that field's message.
fn edit_focused(state: FilterDialogState, edit: impl FnOnce(&mut String)) -> FilterDialogState {
    match state {
        FilterDialogState::Visible {
            column,
            mut min,
            mut max,
            focused,
            mut errors,
        } => {
            match focused {
                FilterField::Column => {}
                FilterField::Min => {
                    edit(&mut min);
                    errors.min = None;
                }
                FilterField::Max => {
                    edit(&mut max);
                    errors.max = None;
                }
            }
            FilterDialogState::Visible {
                column,
                min,
                max,
                focused,
                errors,
            }
        }
        other => other,
    }
}

fn cycle_column(column: Option<SortColumn>, forward: bool) -> Option<SortColumn> {
    // None sits at both ends of the ring.
    let ring: Vec<Option<SortColumn>> = std::iter::once(None)
        .chain(SortColumn::ALL.into_iter().map(Some))
        .collect();
    let index = ring.iter().position(|c| *c == column).unwrap_or(0);
    let next = if forward {
        (index + 1) % ring.len()
    } else {
        (index + ring.len() - 1) % ring.len()
    };
    ring[next]
}
