//! Saved-creation listing for the gallery.

#[cfg(test)]
#[path = "creations_test.rs"]
mod creations_test;

use axum::Json;
use axum::extract::State;
use origami_client::net::types::CollectionRecord;

use crate::state::AppState;

/// `GET /api/creations`: every saved creation, in store order.
pub async fn list_creations(State(state): State<AppState>) -> Json<Vec<CollectionRecord>> {
    tracing::debug!(count = state.creations.len(), "listing creations");
    Json(state.creations.list().to_vec())
}
