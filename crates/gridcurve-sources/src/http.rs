//! Shared blocking HTTP plumbing.

use std::time::Duration;

use gridcurve_core::Provider;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::error::{SourceError, SourceResult};

const USER_AGENT: &str = concat!("gridcurve/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client bound to one provider.
#[derive(Debug, Clone)]
pub struct HttpClient {
    provider: Provider,
    client: Client,
}

impl HttpClient {
    /// Creates a client with a per-request timeout.
    pub fn new(provider: Provider, timeout: Duration) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SourceError::Client {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { provider, client })
    }

    /// Sends a GET request and returns the body of a successful response.
    ///
    /// Transport failures, timeouts and non-2xx statuses are all
    /// [`SourceError::Unavailable`].
    pub fn get_text(
        &self,
        url: &str,
        params: &[(&str, String)],
        bearer: Option<&str>,
    ) -> SourceResult<String> {
        info!("Requesting {} data from: {}", self.provider, url);
        debug!("   params: {:?}", params);

        let mut request = self.client.get(url).query(params);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            let reason = if e.is_timeout() {
                format!("request timed out: {e}")
            } else {
                format!("request failed: {e}")
            };
            warn!("{} request to {} failed: {}", self.provider, url, reason);
            SourceError::unavailable(self.provider, reason)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned HTTP {}", self.provider, status);
            return Err(SourceError::unavailable(
                self.provider,
                format!("HTTP {status}"),
            ));
        }

        response.text().map_err(|e| {
            warn!("Failed to read {} response body: {}", self.provider, e);
            SourceError::unavailable(self.provider, format!("failed to read body: {e}"))
        })
    }
}
