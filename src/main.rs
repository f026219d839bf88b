mod cms;
mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::cms::{CmsClient, ContentSource};
use crate::cms::config::CmsConfig;
use crate::services::content::{self, ContentCache};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let cache = ContentCache::new();

    // Content is optional: without a CMS the page renders empty sections.
    match CmsConfig::from_env().and_then(|cfg| CmsClient::new(&cfg).map(|client| (cfg, client))) {
        Ok((cms_config, client)) => {
            tracing::info!(
                endpoint = %cms_config.endpoint,
                revalidate_secs = cms_config.revalidate_secs,
                "CMS client initialized"
            );
            let source: Arc<dyn ContentSource> = Arc::new(client);
            if content::refresh(&cache, source.as_ref()).await.is_err() {
                tracing::warn!("initial content fetch failed; serving empty content until revalidation succeeds");
            }
            let _revalidation = content::spawn_revalidation_task(cache.clone(), source, cms_config.revalidate_interval());
        }
        Err(e) => {
            tracing::warn!(error = %e, "CMS not configured — content sections disabled");
        }
    }

    let state = state::AppState::new(cache);
    let app = routes::app(state, &config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
