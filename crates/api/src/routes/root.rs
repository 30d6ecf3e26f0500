//! Welcome endpoint.

use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Alafia API";

/// Endpoints advertised by the welcome payload.
pub const ENDPOINTS: [&str; 3] = ["/health", "/quote", "/quotes"];

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub endpoints: [&'static str; 3],
}

/// GET / — returns the welcome message and the available endpoints.
pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
        endpoints: ENDPOINTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn welcome_lists_quote_endpoints() {
        let Json(body) = index().await;
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"Welcome to the Alafia API","endpoints":["/health","/quote","/quotes"]}"#
        );
    }
}
