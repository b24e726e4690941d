//! State for the filter dialog.

use crate::model::SortColumn;
use crate::ui::mvi::UiState;
use crate::validation::RangeErrors;

/// Focusable parts of the dialog, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Column,
    Min,
    Max,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            FilterField::Column => FilterField::Min,
            FilterField::Min => FilterField::Max,
            FilterField::Max => FilterField::Column,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterField::Column => FilterField::Max,
            FilterField::Min => FilterField::Column,
            FilterField::Max => FilterField::Min,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterDialogState {
    #[default]
    Hidden,
    Visible {
        column: Option<SortColumn>,
        min: String,
        max: String,
        focused: FilterField,
        /// Inline messages from the last rejected submit.
        errors: RangeErrors,
    },
}

impl UiState for FilterDialogState {}

impl FilterDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn column(&self) -> Option<SortColumn> {
        match self {
            Self::Visible { column, .. } => *column,
            Self::Hidden => None,
        }
    }

    /// Raw `(min, max)` text, if visible.
    pub fn inputs(&self) -> Option<(&str, &str)> {
        match self {
            Self::Visible { min, max, .. } => Some((min, max)),
            Self::Hidden => None,
        }
    }

    pub fn errors(&self) -> Option<&RangeErrors> {
        match self {
            Self::Visible { errors, .. } => Some(errors),
            Self::Hidden => None,
        }
    }
}
