//! Errors raised by user actions that never reach the network.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserInputError {
    #[error("Select a column to filter by before applying a range.")]
    NoFilterColumn,
}

impl UserInputError {
    /// User-friendly headline for the notification popup.
    pub fn title(&self) -> &'static str {
        match self {
            UserInputError::NoFilterColumn => "No filter column selected",
        }
    }
}
