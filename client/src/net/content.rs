//! Server function serving the current content snapshot.
//!
//! ERROR HANDLING
//! ==============
//! A missing provider is a wiring bug on the server and surfaces as a
//! `ServerFnError`. The page renders empty sections in that case.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::types::PortfolioContent;

/// Source of the latest content snapshot, supplied by the server via context.
pub trait ContentProvider: Send + Sync + 'static {
    fn snapshot(&self) -> PortfolioContent;
}

/// Context handle for the active provider.
pub type ContentHandle = Arc<dyn ContentProvider>;

/// Snapshot from the provider in the current reactive context.
///
/// # Errors
///
/// Returns an error if no `ContentHandle` was provided.
pub fn snapshot_from_context() -> Result<PortfolioContent, ServerFnError> {
    use_context::<ContentHandle>()
        .map(|provider| provider.snapshot())
        .ok_or_else(|| ServerFnError::new("content provider not configured"))
}

/// Content to render for a fetch result. Pending and failed fetches render
/// as empty sections; callers log failures once, not per read.
#[must_use]
pub fn content_or_default(fetched: Option<Result<PortfolioContent, ServerFnError>>) -> PortfolioContent {
    fetched.and_then(Result::ok).unwrap_or_default()
}

/// Current jobs, projects and skills. Served at `/api/portfolio_content`.
#[server(prefix = "/api", endpoint = "portfolio_content")]
pub async fn get_portfolio_content() -> Result<PortfolioContent, ServerFnError> {
    snapshot_from_context()
}
