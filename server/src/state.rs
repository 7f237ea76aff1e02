//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.

use std::sync::Arc;

use crate::creations::CreationStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub creations: Arc<CreationStore>,
}

impl AppState {
    #[must_use]
    pub fn new(creations: CreationStore) -> Self {
        Self { creations: Arc::new(creations) }
    }
}
