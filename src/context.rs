use std::fmt::Debug;
use std::sync::Arc;

use bytes::Bytes;

use crate::env::{Env, OsEnv};
use crate::http::{HttpSend, ReqwestHttpSend};
use crate::Result;

/// Context carries the pluggable pieces every API call goes through:
/// the HTTP transport and the environment.
///
/// One context is built per client and shared from there. Both components
/// sit behind `Arc`, so cloning is cheap.
///
/// ## Example
///
/// ```
/// use demapi::{Context, StaticEnv};
///
/// // Default transport, fixed environment.
/// let ctx = Context::default().with_env(StaticEnv::default());
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("http", &self.http)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(ReqwestHttpSend::default())
    }
}

impl Context {
    /// Create a new Context around the given transport, reading the
    /// process environment.
    pub fn new(http: impl HttpSend) -> Self {
        Self {
            http: Arc::new(http),
            env: Arc::new(OsEnv),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}
