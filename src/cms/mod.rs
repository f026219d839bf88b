//! Headless CMS client for portfolio content.
//!
//! DESIGN
//! ======
//! One fixed GraphQL query fetches jobs, projects and skills in a single
//! round trip. `ContentSource` is the seam the revalidation loop depends on,
//! so tests can swap the HTTP client for a scripted source. Parsing lives in
//! `parse_response` and needs no network.

pub mod config;
pub mod types;

use std::time::Duration;

use client::net::types::PortfolioContent;

use config::CmsConfig;
use types::{CmsError, GraphQlResponse};

/// The single content query.
pub const QUERY: &str = r"
query PortfolioContent {
  jobs(orderBy: startDate_DESC) {
    id
    company
    position
    startDate
    endDate
    location
    description
    companyUrl
    logo { url }
  }
  projects(orderBy: createdAt_DESC) {
    id
    title
    description
    techStack
    sourceUrl
    liveUrl
    image { url }
  }
  skills {
    id
    name
    icon { url }
  }
}
";

/// Anything that can produce a full content snapshot.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self) -> Result<PortfolioContent, CmsError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct CmsClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl CmsClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &CmsConfig) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CmsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint.clone(), token: config.token.clone() })
    }
}

#[async_trait::async_trait]
impl ContentSource for CmsClient {
    async fn fetch(&self) -> Result<PortfolioContent, CmsError> {
        let body = ApiRequest { query: QUERY };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CmsError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(CmsError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    query: &'a str,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<PortfolioContent, CmsError> {
    let api: GraphQlResponse = serde_json::from_str(json).map_err(|e| CmsError::ApiParse(e.to_string()))?;

    if !api.errors.is_empty() {
        let messages: Vec<String> = api.errors.into_iter().map(|e| e.message).collect();
        return Err(CmsError::Query(messages.join("; ")));
    }

    api.data
        .ok_or_else(|| CmsError::ApiParse("response has no data".into()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
