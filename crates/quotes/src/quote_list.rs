use serde::Serialize;

use crate::error::QuoteError;
use crate::source::IndexSource;

/// Quotes served when no other list is supplied.
pub const DEFAULT_QUOTES: &[&str] =
    &["The future belongs to those who believe in the beauty of their dreams."];

/// Ordered, immutable collection of quote strings.
///
/// Built once at startup and only ever read afterwards. Serializes as a
/// plain JSON array in the original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuoteList(Vec<String>);

impl QuoteList {
    /// Creates a list from the given quotes, preserving their order.
    pub fn new<I, S>(quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(quotes.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Picks one quote using an index drawn from `source`.
    ///
    /// The draw covers every entry, so the pick is uniform whenever the
    /// source is.
    pub fn choose<R: IndexSource + ?Sized>(&self, source: &R) -> Result<&str, QuoteError> {
        if self.0.is_empty() {
            return Err(QuoteError::Empty);
        }
        let len = self.0.len();
        let index = source.index(len);
        self.0
            .get(index)
            .map(String::as_str)
            .ok_or(QuoteError::IndexOutOfRange { index, len })
    }
}

impl Default for QuoteList {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTES.iter().copied())
    }
}

impl From<Vec<String>> for QuoteList {
    fn from(quotes: Vec<String>) -> Self {
        Self(quotes)
    }
}
