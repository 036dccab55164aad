//! Remote content gateway.
//!
//! One GET per section, `{success, data}` envelope unwrap, and a single
//! "no data" outcome for every kind of failure. The caller never sees a
//! distinguishable error — a section that cannot be fetched simply renders
//! from defaults. Failures are logged at `warn!` for diagnostics.
//!
//! No retry, no explicit timeout beyond the transport default, at most one
//! in-flight request per section mount.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use hibiscus_content::Section;

use crate::constants::DEFAULT_API_BASE_URL;

/// The outer wrapper every read endpoint returns.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
}

/// Errors internal to the gateway. Reduced to "no data" before they leave.
#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("envelope missing data or success=false")]
    Envelope,
}

/// HTTP client for the admin content API.
#[derive(Clone, Debug)]
pub struct ContentGateway {
    http: reqwest::Client,
    base_url: String,
}

impl ContentGateway {
    /// Gateway for the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Gateway for an explicit base URL (tests point this at a stub server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Fetch one section's raw content.
    ///
    /// Returns the envelope's `data` on success; every failure — transport,
    /// non-2xx status, unparsable body, falsy `success`, missing `data` —
    /// collapses to `None`.
    pub async fn fetch_section(&self, section: Section) -> Option<Value> {
        match self.try_fetch(section).await {
            Ok(data) => {
                debug!(section = %section, "fetched remote content");
                Some(data)
            }
            Err(e) => {
                warn!(section = %section, error = %e, "content fetch failed, using defaults");
                None
            }
        }
    }

    async fn try_fetch(&self, section: Section) -> Result<Value, FetchError> {
        let response = self.http.get(self.url_for(section.endpoint())).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let envelope: Envelope = response.json().await?;
        match envelope {
            Envelope {
                success: true,
                data: Some(data),
            } => Ok(data),
            _ => Err(FetchError::Envelope),
        }
    }
}

impl Default for ContentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let e: Envelope = serde_json::from_str("{}").unwrap();
        assert!(!e.success);
        assert!(e.data.is_none());

        let e: Envelope = serde_json::from_str(r#"{"success": true, "extra": 1}"#).unwrap();
        assert!(e.success);
        assert!(e.data.is_none());
    }

    #[test]
    fn test_url_for_joins_base_and_endpoint() {
        let gw = ContentGateway::with_base_url("http://127.0.0.1:9/api");
        assert_eq!(gw.url_for("/hero.php"), "http://127.0.0.1:9/api/hero.php");
    }
}
