//! REST transport for the browser, plus the shared session client type.
//!
//! Browser (csr): real HTTP calls via `gloo-net` against same-origin paths.
//! Native (tests): every request fails with a transport error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any response that arrives is handed back with its status; only requests
//! that never complete become `SessionError::Transport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;
use session::{Headers, HttpResponse, SessionClient, SessionError, TokenStore, Transport};

use crate::util::storage::LocalStorage;

/// Session client as used by the app: `gloo-net` over `localStorage`.
pub type AppClient = SessionClient<BrowserTransport, LocalStorage>;

/// Build the client provided through context by the root component.
pub fn app_client() -> AppClient {
    SessionClient::new(BrowserTransport, TokenStore::new(LocalStorage))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> SessionError {
    SessionError::Transport("http is only available in the browser".to_owned())
}

/// Stateless `gloo-net` transport; requests go to the page's own origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
async fn read_response(resp: gloo_net::http::Response) -> Result<HttpResponse, SessionError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| SessionError::Transport(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, path: &str, headers: &Headers) -> Result<HttpResponse, SessionError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::get(path);
            for (name, value) in headers {
                req = req.header(name, value);
            }
            let resp = req.send().await.map_err(|e| SessionError::Transport(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, headers);
            Err(unavailable())
        }
    }

    async fn post_json(&self, path: &str, body: &Value, headers: &Headers) -> Result<HttpResponse, SessionError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::post(path);
            for (name, value) in headers {
                req = req.header(name, value);
            }
            let resp = req
                .json(body)
                .map_err(|e| SessionError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SessionError::Transport(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body, headers);
            Err(unavailable())
        }
    }
}
