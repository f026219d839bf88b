//! Content service — cached CMS snapshot with periodic revalidation.
//!
//! DESIGN
//! ======
//! The page is rendered from whatever snapshot the cache holds; requests never
//! wait on the CMS. `main` performs one fetch before the listener starts, then
//! a background task refetches on a fixed interval.
//!
//! ERROR HANDLING
//! ==============
//! A failed refresh keeps the previous snapshot. Serving slightly stale content
//! is preferred over serving none.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use client::net::content::{ContentHandle, ContentProvider};
use client::net::types::PortfolioContent;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cms::ContentSource;
use crate::cms::types::CmsError;

/// Last successfully fetched content. Clones share the same snapshot.
#[derive(Clone, Default)]
pub struct ContentCache {
    inner: Arc<RwLock<PortfolioContent>>,
}

impl ContentCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current snapshot.
    #[must_use]
    pub fn get(&self) -> PortfolioContent {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the snapshot.
    pub fn replace(&self, content: PortfolioContent) {
        match self.inner.write() {
            Ok(mut guard) => *guard = content,
            Err(poisoned) => *poisoned.into_inner() = content,
        }
    }

    /// Handle for Leptos context.
    #[must_use]
    pub fn handle(&self) -> ContentHandle {
        Arc::new(self.clone())
    }
}

impl ContentProvider for ContentCache {
    fn snapshot(&self) -> PortfolioContent {
        self.get()
    }
}

/// Fetch once and store the result. The cache is untouched on error.
///
/// # Errors
///
/// Returns the source's error after logging it.
pub async fn refresh(cache: &ContentCache, source: &dyn ContentSource) -> Result<(), CmsError> {
    match source.fetch().await {
        Ok(content) => {
            let changed = content != cache.get();
            info!(
                jobs = content.jobs.len(),
                projects = content.projects.len(),
                skills = content.skills.len(),
                changed,
                "content refreshed"
            );
            cache.replace(content);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, code = e.error_code(), retryable = e.retryable(), "content refresh failed; keeping previous snapshot");
            Err(e)
        }
    }
}

/// Spawn the revalidation loop. The first refetch happens one `interval`
/// after spawning. Returns a handle for shutdown.
pub fn spawn_revalidation_task(cache: ContentCache, source: Arc<dyn ContentSource>, interval: Duration) -> JoinHandle<()> {
    info!(interval_secs = interval.as_secs(), "content revalidation configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if refresh(&cache, source.as_ref()).await.is_err() {
                debug!("revalidation tick failed");
            }
        }
    })
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
