//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the content cache that the revalidation task writes and the Leptos
//! server function reads.

use crate::services::content::ContentCache;

/// Shared application state. Clone is required by Axum; the cache is Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentCache,
}

impl AppState {
    #[must_use]
    pub fn new(content: ContentCache) -> Self {
        Self { content }
    }
}
