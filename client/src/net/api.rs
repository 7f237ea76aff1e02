//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the fetch reports `Unavailable` since saved creations
//! are only loaded in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `FetchError` instead of panics. The gallery absorbs any
//! failure into an empty collection; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::CollectionRecord;

/// Endpoint listing the current user's saved creations.
pub const CREATIONS_ENDPOINT: &str = "/api/creations";

/// Transient failure talking to the creations endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("creations request failed: {0}")]
    Status(u16),
    #[error("invalid creations payload: {0}")]
    Decode(String),
    #[error("creations are only fetched in the browser")]
    Unavailable,
}

/// Fetch every saved creation for the current user from `/api/creations`.
///
/// # Errors
///
/// Returns a `FetchError` if the request fails, the server responds with a
/// non-OK status, or the body is not a list of records.
pub async fn fetch_creations() -> Result<Vec<CollectionRecord>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CREATIONS_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status(status));
        }
        resp.json::<Vec<CollectionRecord>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}
