//! HTTP transport seam.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Tests: a scripted fake replays canned replies.
//!
//! ERROR HANDLING
//! ==============
//! The transport reports only what it saw on the wire. Deciding whether a
//! non-2xx reply still carries a usable JSON envelope is left to callers.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("unexpected status: {0}")]
    Status(u16),
}

/// Status code and body text of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Malformed`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Malformed(e.to_string()))
    }

    /// Decode the body as JSON, treating a non-2xx status as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Status`] for non-2xx replies and
    /// [`TransportError::Malformed`] for undecodable bodies.
    pub fn json_ok<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        if !self.ok() {
            return Err(TransportError::Status(self.status));
        }
        self.json()
    }
}

/// Minimal HTTP client used by the submitter, action helpers and poller.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Serialized form body (`FormData` in the browser).
    type Form: 'static;

    /// POST a form body to `url`.
    async fn post_form(&self, url: &str, form: Self::Form) -> Result<RawResponse, TransportError>;

    /// POST a JSON body to `url`.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, TransportError>;

    /// GET `url`.
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// `gloo-net` transport for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl BrowserTransport {
    async fn finish(resp: gloo_net::http::Response) -> Result<RawResponse, TransportError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError::Malformed(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    type Form = web_sys::FormData;

    async fn post_form(&self, url: &str, form: Self::Form) -> Result<RawResponse, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .header("X-Requested-With", "XMLHttpRequest")
            .body(form)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::finish(resp).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(body)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::finish(resp).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::finish(resp).await
    }
}
