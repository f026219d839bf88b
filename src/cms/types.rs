//! CMS wire envelope and errors.

use serde::Deserialize;

use client::net::types::PortfolioContent;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by CMS configuration and requests.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// The HTTP request to the CMS failed.
    #[error("CMS request failed: {0}")]
    ApiRequest(String),

    /// The CMS returned a non-success HTTP status.
    #[error("CMS response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("CMS response parse failed: {0}")]
    ApiParse(String),

    /// The GraphQL layer rejected the query.
    #[error("CMS query failed: {0}")]
    Query(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl CmsError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingConfig { .. } => "E_MISSING_CONFIG",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::Query(_) => "E_QUERY",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether the next revalidation tick may succeed without intervention.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
pub(super) struct GraphQlResponse {
    #[serde(default)]
    pub(super) data: Option<PortfolioContent>,
    #[serde(default)]
    pub(super) errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
pub(super) struct GraphQlError {
    pub(super) message: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
