//! The signed request dispatch core.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use http::Method;
use log::debug;
use once_cell::sync::Lazy;

use crate::config::Config;
use crate::context::Context;
use crate::credential::Credential;
use crate::provide_credential::{DefaultCredentialProvider, ProvideCredential};
use crate::request::{canonical_path, path_root, CanonicalRequest, Params, ALLOWED_METHODS};
use crate::response::ApiResponse;
use crate::sign::RequestSigner;
use crate::{Error, Result};

/// Resources that answer with site-localised content. `site=<id>` is
/// appended for these whenever a site id is configured.
static SITE_SCOPED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["providers", "search", "opendays", "enquiry"]));

/// Resources that cannot answer at all without a site context. Matched
/// against the exact resource, so `search/autocomplete` stays callable
/// without one.
static SITE_REQUIRED: Lazy<HashSet<&'static str>> = Lazy::new(|| HashSet::from(["search"]));

/// Dispatcher turns `(resource, method, params)` into one signed request
/// and translates the answer.
///
/// Every call follows the same line: validate, canonicalize the path,
/// serialize the parameters, resolve the credential, sign, send once,
/// map the status. Nothing is retried and nothing is cached beyond the
/// resolved credential.
///
/// The dispatcher is immutable after construction and cheap to clone;
/// one value can be shared across tasks, with each call owning its own
/// request state.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    ctx: Context,
    config: Config,
    provider: Arc<dyn ProvideCredential>,
    signer: RequestSigner,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl Dispatcher {
    /// Create a dispatcher from a context and configuration.
    pub fn new(ctx: Context, config: Config) -> Self {
        let provider = DefaultCredentialProvider::new(&config);
        let signer = RequestSigner::new(config.strategy, config.timestamp_format);
        Self {
            ctx,
            config,
            provider: Arc::new(provider),
            signer,
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the credential source. Drops any credential already
    /// resolved through the previous source.
    pub fn with_credential_provider(mut self, provider: impl ProvideCredential) -> Self {
        self.provider = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take the current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_signing_time(mut self, time: crate::time::Timestamp) -> Self {
        self.signer = self.signer.with_time(time);
        self
    }

    /// The configuration this dispatcher was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured site id, or a missing context error when unset.
    pub fn require_site_id(&self) -> Result<u32> {
        self.config
            .site_id
            .ok_or_else(|| Error::missing_context("site id must be configured for this call"))
    }

    /// Issue one signed call against the API.
    ///
    /// `resource` is the logical path, `providers/42/courses`; its
    /// canonical form is documented at [`canonical_path`]. Parameters
    /// travel as the query string for GET and as a form-encoded body for
    /// PUT and POST. A caller-supplied `site` pair is replaced by the
    /// configured site id on site-localised resources.
    ///
    /// Exactly one request goes out per call, and none at all when a
    /// precondition fails. Statuses 401, 400, 404 and 500 come back as
    /// errors carrying the raw response body; every other status is a
    /// success.
    pub async fn dispatch(
        &self,
        resource: &str,
        method: Method,
        params: Params,
    ) -> Result<ApiResponse> {
        if !ALLOWED_METHODS.contains(&method) {
            return Err(Error::unsupported_method(format!(
                "http method {method} is not accepted by the API"
            )));
        }

        let path = canonical_path(resource, self.config.preserve_path_case)?;

        let resource = path.trim_matches('/');
        if self.config.site_id.is_none() && SITE_REQUIRED.contains(resource) {
            return Err(Error::missing_context(format!(
                "site id must be set before calling {resource}"
            )));
        }

        let root = path_root(&path);

        let mut params = params;
        if let Some(site_id) = self.config.site_id {
            if SITE_SCOPED.contains(root) {
                params.insert("site", site_id);
            }
        }
        let fields = params.serialize();

        let cred = self.credential().await?;

        let mut url = format!("{}{}", self.config.base(), path);
        if method == Method::GET && !fields.is_empty() {
            url.push('?');
            url.push_str(&fields);
        }

        let body = if method == Method::GET {
            Bytes::new()
        } else {
            Bytes::from(fields.clone().into_bytes())
        };

        let req = http::Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .body(body)?;
        let (mut parts, body) = req.into_parts();

        if method != Method::GET {
            parts.headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
        }

        let canonical = CanonicalRequest {
            path,
            method,
            fields,
        };
        self.signer.sign(&mut parts, &cred, &canonical)?;

        debug!("dispatching {} {}", canonical.method, url);
        let resp = self
            .ctx
            .http_send(http::Request::from_parts(parts, body))
            .await?;

        let status = resp.status();
        let body = String::from_utf8_lossy(resp.body()).into_owned();
        debug!("api answered {} for {}", status, canonical.path);

        if let Some(err) = Error::from_status(status, &body) {
            return Err(err);
        }

        Ok(ApiResponse { status, body })
    }

    /// Resolve the signing credential, loading it on first use.
    async fn credential(&self) -> Result<Credential> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached {
            return Ok(cred);
        }

        let loaded = self.provider.provide_credential(&self.ctx).await?;
        let Some(cred) = loaded.filter(Credential::is_valid) else {
            return Err(Error::missing_context(
                "no API credential could be resolved; set one on the config or the environment",
            ));
        };

        *self.credential.lock().expect("lock poisoned") = Some(cred.clone());
        Ok(cred)
    }
}
