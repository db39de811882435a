use std::fmt::{Debug, Formatter};

use crate::constants::*;
use crate::context::Context;
use crate::sign::SigningStrategy;
use crate::time::TimestampFormat;
use crate::utils::Redact;

/// Config carries everything needed to reach and sign against one
/// deployment of the DEM API.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`DEMAPI_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`DEMAPI_API_SECRET`]
    pub api_secret: Option<String>,
    /// Base URL of the deployment; [`DEFAULT_BASE_URL`] when unset.
    ///
    /// Also loadable from env value [`DEMAPI_BASE_URL`].
    pub base_url: Option<String>,
    /// Site the responses should be scoped to. Site-localised resources
    /// send it automatically; search refuses to run without it.
    ///
    /// Also loadable from env value [`DEMAPI_SITE_ID`].
    pub site_id: Option<u32>,
    /// Region search results should be targeted to.
    ///
    /// Also loadable from env value [`DEMAPI_REGION_ID`].
    pub region_id: Option<u32>,
    /// Canonical string layout the deployment verifies signatures against.
    pub strategy: SigningStrategy,
    /// Wire rendering of the request timestamp.
    pub timestamp_format: TimestampFormat,
    /// Keep resource path casing as given instead of lower-casing it.
    pub preserve_path_case: bool,
}

impl Config {
    /// Create a new Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key and secret pair.
    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.api_key = Some(api_key.into());
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Point the client at a different deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Scope calls to a site.
    pub fn with_site_id(mut self, site_id: u32) -> Self {
        self.site_id = Some(site_id);
        self
    }

    /// Target search results to a region.
    pub fn with_region_id(mut self, region_id: u32) -> Self {
        self.region_id = Some(region_id);
        self
    }

    /// Select the signing strategy.
    pub fn with_strategy(mut self, strategy: SigningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Select the timestamp rendering.
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Keep resource paths exactly as the caller wrote them.
    pub fn with_preserve_path_case(mut self) -> Self {
        self.preserve_path_case = true;
        self
    }

    /// The effective base URL, without its trailing slash.
    pub fn base(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Load config from env. Fields already set keep their values.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(DEMAPI_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(DEMAPI_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(DEMAPI_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(DEMAPI_SITE_ID).and_then(|v| v.parse().ok()) {
            self.site_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(DEMAPI_REGION_ID).and_then(|v| v.parse().ok()) {
            self.region_id.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("api_secret", &self.api_secret.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .field("site_id", &self.site_id)
            .field("region_id", &self.region_id)
            .field("strategy", &self.strategy)
            .field("timestamp_format", &self.timestamp_format)
            .field("preserve_path_case", &self.preserve_path_case)
            .finish()
    }
}
