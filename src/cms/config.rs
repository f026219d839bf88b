//! CMS configuration parsed from environment variables.

use std::time::Duration;

use super::types::CmsError;
use crate::config::env_parse;

pub const DEFAULT_REVALIDATE_SECS: u64 = 10;
pub const DEFAULT_CMS_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CMS_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmsTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub revalidate_secs: u64,
    pub timeouts: CmsTimeouts,
}

impl CmsConfig {
    /// Build typed CMS config from environment variables.
    ///
    /// Required:
    /// - `CMS_ENDPOINT`: GraphQL endpoint URL
    ///
    /// Optional:
    /// - `CMS_TOKEN`: bearer token for protected content
    /// - `CMS_REVALIDATE_SECS`: default 10, clamped to at least 1
    /// - `CMS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CMS_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, CmsError> {
        let endpoint = std::env::var("CMS_ENDPOINT")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CmsError::MissingConfig { var: "CMS_ENDPOINT".into() })?;
        let token = std::env::var("CMS_TOKEN").ok().filter(|v| !v.trim().is_empty());
        let revalidate_secs = env_parse("CMS_REVALIDATE_SECS", DEFAULT_REVALIDATE_SECS).max(1);
        let timeouts = CmsTimeouts {
            request_secs: env_parse("CMS_REQUEST_TIMEOUT_SECS", DEFAULT_CMS_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("CMS_CONNECT_TIMEOUT_SECS", DEFAULT_CMS_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { endpoint, token, revalidate_secs, timeouts })
    }

    #[must_use]
    pub fn revalidate_interval(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
