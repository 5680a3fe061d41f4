//! Widget error types.

use thiserror::Error;

/// Errors raised at the widget input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// An ordinal attribute failed numeric parsing.
    #[error("Invalid ordinal: {0:?}")]
    InvalidOrdinal(String),
    /// A parsed ordinal falls outside the widget's range.
    #[error("Ordinal {value} out of range 1..={max}")]
    OrdinalOutOfRange { value: u8, max: u8 },
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
