// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes an HTTP HEAD request first (lightweight, no body download)
// - Falls back to GET if HEAD fails for any reason
// - Every request has its own timeout; running out cancels that request only
// - Sends a fixed User-Agent so site owners can tell who is knocking
//
// The network sits behind the `Prober` trait. Production uses `HttpProber`
// (reqwest); tests plug in a fake that never leaves the process.
//
// Rust concepts:
// - Traits: An interface the rest of the checker is written against
// - async_trait: Lets a trait have async methods and still be used generically
// - thiserror: Derives std::error::Error for our error enum
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ValidatorConfig;

/// Maximum redirect hops followed before a probe gives up
const MAX_REDIRECTS: usize = 10;

// Why a single probe failed
//
// None of these escape the checker: they are logged and turned into
// "invalid" at the check_external boundary.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(reqwest::Error),
}

// The only thing the checker needs from the network: "send this method to
// this URL and tell me the status code"
#[async_trait]
pub trait Prober: Send + Sync {
    async fn status(&self, method: Method, url: &str) -> Result<StatusCode, ProbeError>;
}

// Real network access through reqwest
pub struct HttpProber {
    client: Client,
    timeout: Duration,
}

// The client settings every probe shares
//
// Kept separate from HttpProber::new so tests can add settings (like
// no_proxy for a loopback server) without losing the User-Agent.
pub fn client_builder(config: &ValidatorConfig) -> ClientBuilder {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
}

impl HttpProber {
    pub fn new(config: &ValidatorConfig) -> Result<Self, reqwest::Error> {
        let client = client_builder(config).build()?;
        Ok(Self::from_client(client, config.timeout))
    }

    pub fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn status(&self, method: Method, url: &str) -> Result<StatusCode, ProbeError> {
        let request = self.client.request(method, url).send();

        // tokio::time::timeout drops the request future when time runs out,
        // which aborts the connection. reqwest's own timeout is the backstop.
        match tokio::time::timeout(self.timeout, request).await {
            Err(_elapsed) => Err(ProbeError::Timeout),
            Ok(Err(e)) if e.is_timeout() => Err(ProbeError::Timeout),
            Ok(Err(e)) => Err(ProbeError::Transport(e)),
            Ok(Ok(response)) => Ok(response.status()),
        }
    }
}

// First probe: HEAD
//
// 405 Method Not Allowed counts as success: some servers refuse HEAD but
// serve the page fine. This can hide a genuinely broken URL on such a
// server; we accept that trade-off.
pub async fn lightweight_probe<P>(prober: &P, url: &str) -> Result<StatusCode, ProbeError>
where
    P: Prober + ?Sized,
{
    let status = prober.status(Method::HEAD, url).await?;
    if status.is_success() || status == StatusCode::METHOD_NOT_ALLOWED {
        Ok(status)
    } else {
        Err(ProbeError::Status(status))
    }
}

// Second probe: GET, only a 2xx counts
pub async fn full_probe<P>(prober: &P, url: &str) -> Result<StatusCode, ProbeError>
where
    P: Prober + ?Sized,
{
    let status = prober.status(Method::GET, url).await?;
    if status.is_success() {
        Ok(status)
    } else {
        Err(ProbeError::Status(status))
    }
}

// Checks a URL with HEAD, then GET if HEAD didn't succeed
//
// Returns the status of whichever probe succeeded, or the error of the
// last probe tried. Malformed URLs fail before any request is made.
pub async fn probe_url<P>(prober: &P, url: &str) -> Result<StatusCode, ProbeError>
where
    P: Prober + ?Sized,
{
    Url::parse(url)?;

    match lightweight_probe(prober, url).await {
        Ok(status) => Ok(status),
        Err(e) => {
            debug!(%url, error = %e, "HEAD probe failed, retrying with GET");
            full_probe(prober, url).await
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HEAD first?
//    - HEAD asks for the headers only, so nothing big gets downloaded
//    - Some servers answer HEAD badly (405, 403, or not at all), which is
//      why GET is the fallback
//
// 2. What does `P: Prober + ?Sized` mean?
//    - P is any type implementing Prober
//    - ?Sized also allows trait objects like `dyn Prober`
//
// 3. Why is timeout handled with tokio::time::timeout?
//    - It wraps any future with a deadline
//    - When the deadline passes, the future is dropped - in Rust, dropping
//      a future cancels it, so the HTTP request is aborted
//
// 4. Why does ProbeError::Status hold a StatusCode?
//    - So the debug log can say "HTTP 404" instead of just "failed"
// -----------------------------------------------------------------------------
