//! Quote endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use quotes::{IndexSource, QuoteList};
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from the quote handlers.
///
/// Both fields are read-only after construction, so handlers share it
/// through an `Arc` without locking.
pub struct AppState<R: IndexSource> {
    pub quotes: QuoteList,
    pub source: R,
}

impl<R: IndexSource> AppState<R> {
    pub fn new(quotes: QuoteList, source: R) -> Self {
        Self { quotes, source }
    }
}

// -- Response types --

#[derive(Serialize)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Serialize)]
pub struct QuotesResponse {
    pub quotes: QuoteList,
}

// -- Handlers --

/// GET /quote — one quote chosen uniformly at random.
#[tracing::instrument(level = "debug", skip(state))]
pub async fn random<R: IndexSource + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state.quotes.choose(&state.source)?;
    tracing::debug!(quote, "selected quote");
    metrics::counter!("quotes_served_total").increment(1);

    Ok(Json(QuoteResponse {
        quote: quote.to_owned(),
    }))
}

/// GET /quotes — the full list in its original order.
#[tracing::instrument(level = "debug", skip(state))]
pub async fn list<R: IndexSource + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<QuotesResponse> {
    metrics::counter!("quote_lists_served_total").increment(1);

    Json(QuotesResponse {
        quotes: state.quotes.clone(),
    })
}
