//! `reqwest`-backed [`Transport`] for the native cli.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use session::{Headers, HttpResponse, SessionError, Transport};

use crate::error::CliError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP transport rooted at the backend's base URL.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] when `base_url` is not an
    /// `http(s)` URL, or [`CliError::HttpClientBuild`] if the client cannot
    /// be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| CliError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let parsed = reqwest::Url::parse(raw).map_err(|e| CliError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CliError::InvalidBaseUrl(format!("{raw}: unsupported scheme")));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn header_map(headers: &Headers) -> Result<HeaderMap, SessionError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| SessionError::Transport(e.to_string()))?;
        let value = HeaderValue::from_str(value).map_err(|e| SessionError::Transport(e.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}

async fn into_response(resp: reqwest::Response) -> Result<HttpResponse, SessionError> {
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(|e| SessionError::Transport(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, path: &str, headers: &Headers) -> Result<HttpResponse, SessionError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .headers(header_map(headers)?)
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        into_response(resp).await
    }

    async fn post_json(&self, path: &str, body: &Value, headers: &Headers) -> Result<HttpResponse, SessionError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = self
            .http
            .post(url)
            .headers(header_map(headers)?)
            .json(body)
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        into_response(resp).await
    }
}
