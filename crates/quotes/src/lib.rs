//! Quote data set for the Alafia API.
//!
//! This crate provides:
//! - `QuoteList`, the immutable ordered collection served by the API
//! - `IndexSource`, the capability used to pick a uniform random index
//! - `QuoteError` for selection failures

pub mod error;
pub mod quote_list;
pub mod source;

pub use error::QuoteError;
pub use quote_list::{DEFAULT_QUOTES, QuoteList};
pub use source::{FixedIndex, IndexSource, ThreadRngSource};
