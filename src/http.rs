use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::constants::REQUEST_TIMEOUT;
use crate::{Error, Result};

/// HttpSend is how the dispatcher reaches the network.
///
/// One fully built request goes in, the complete response comes out.
/// Implementations must not retry; the dispatcher guarantees exactly one
/// send per call. Tests substitute a recording implementation here.
#[async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// ReqwestHttpSend sends requests through a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    ///
    /// The caller keeps responsibility for the client's timeout settings;
    /// only [`ReqwestHttpSend::default`] applies [`REQUEST_TIMEOUT`].
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("default reqwest client must build");
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)
            .map_err(|err| Error::transport("request could not be handed to the http client").with_source(err))?;

        let resp = self.client.execute(req).await.map_err(|err| {
            let message = if err.is_timeout() {
                format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs())
            } else {
                "request could not be completed".to_string()
            };
            Error::transport(message).with_source(err)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|err| Error::transport("response body could not be read").with_source(err))?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// Useful for contexts that only resolve configuration or credentials and
/// must never touch the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport("http sending not supported: no http client configured"))
    }
}
