//! Reqwest based transport for marvelous.
//!
//! `ReqwestTransport` implements [`Transport`] on top of [`reqwest`]: the
//! async entry point uses [`reqwest::Client`] and the blocking one uses a
//! [`reqwest::blocking::Client`] built on first use.
//!
//! The blocking entry point must not be called from inside an async runtime:
//! it returns an error there instead of sending.
//!
//! ## Example
//!
//! ```no_run
//! use marvelous_core::{Context, Credential, Executor};
//! use marvelous_http_send_reqwest::ReqwestTransport;
//!
//! let ctx = Context::new().with_transport(ReqwestTransport::default());
//! let exec = Executor::new(ctx, Credential::new("public", "private"));
//! ```

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use log::debug;
use marvelous_core::{RequestDescriptor, Transport};
use once_cell::sync::OnceCell;
use reqwest::Client;

/// Transport backed by reqwest.
#[derive(Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
    blocking: OnceCell<reqwest::blocking::Client>,
}

impl ReqwestTransport {
    /// Create a new ReqwestTransport with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            blocking: OnceCell::new(),
        }
    }

    /// Use the given client for blocking calls instead of a default one.
    pub fn with_blocking_client(self, client: reqwest::blocking::Client) -> Self {
        Self {
            blocking: OnceCell::with_value(client),
            ..self
        }
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client> {
        Ok(self
            .blocking
            .get_or_try_init(|| reqwest::blocking::Client::builder().build())?)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn send(&self, endpoint: &str, req: &RequestDescriptor) -> Result<Bytes> {
        // reqwest::blocking spins up its own runtime and panics when nested.
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(anyhow!(
                "blocking send called from within an async runtime, use send_async instead"
            ));
        }

        let (parts, _) = req.to_http_request(endpoint)?.into_parts();

        let resp = self
            .blocking_client()?
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .send()?;

        let status = resp.status();
        let body = resp.bytes()?;
        check_status(req, status, body)
    }

    async fn send_async(&self, endpoint: &str, req: &RequestDescriptor) -> Result<Bytes> {
        let http_req = reqwest::Request::try_from(req.to_http_request(endpoint)?)?;
        let resp = self.client.execute(http_req).await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        check_status(req, status, body)
    }
}

/// Treat every non-2xx response as a transport failure.
fn check_status(req: &RequestDescriptor, status: StatusCode, body: Bytes) -> Result<Bytes> {
    if status.is_success() {
        return Ok(body);
    }

    debug!("query {} got status {status}", req.path());
    Err(anyhow!(
        "unexpected status {status}: {}",
        String::from_utf8_lossy(&body)
    ))
}
