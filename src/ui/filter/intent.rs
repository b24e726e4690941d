use crate::model::SortColumn;
use crate::ui::mvi::Intent;
use crate::validation::RangeErrors;

#[derive(Debug, Clone)]
pub enum FilterIntent {
    /// Show the dialog preselecting the controller's current filter column.
    Open { column: Option<SortColumn> },
    Close,
    FocusNext,
    FocusPrev,
    /// Step the column selector through none, Date, Revenue, Net Income.
    CycleColumn { forward: bool },
    Input(char),
    Backspace,
    /// Validation rejected the form.
    Rejected { errors: RangeErrors },
}

impl Intent for FilterIntent {}
