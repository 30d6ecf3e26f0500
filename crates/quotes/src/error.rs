//! Quote selection errors.

use thiserror::Error;

/// Errors that can occur when selecting a quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The list has no entries to choose from.
    #[error("Quote list is empty")]
    Empty,

    /// The index source produced an index outside the list.
    #[error("Index {index} out of range for {len} quotes")]
    IndexOutOfRange { index: usize, len: usize },
}
