//! Signed client for the DEM content API.
//!
//! Every call to the API is authenticated by a per-request signature: a
//! hex SHA1 digest over the canonical resource path, the HTTP method, a
//! fresh UTC timestamp and the caller's secret. This crate owns that
//! handshake end to end, from canonicalizing resource paths through
//! stamping the `Authorization` and `Date` headers to mapping the
//! server's status conventions onto typed errors.
//!
//! ## Overview
//!
//! The crate is built around a few pieces:
//!
//! - **Context**: pluggable HTTP transport and environment access
//! - **Config**: endpoint, credentials, site and signing options
//! - **Dispatcher**: turns `(resource, method, params)` into one signed
//!   request and translates the answer
//! - **Client**: one convenience method per API resource on top of the
//!   dispatcher
//!
//! ## Example
//!
//! ```no_run
//! use demapi::{Client, Config, Context, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> demapi::Result<()> {
//!     let config = Config::new()
//!         .with_credentials("my-api-key", "my-api-secret")
//!         .with_site_id(3);
//!     let client = Client::new(Context::default(), config);
//!
//!     let provider = client.provider("york").await?;
//!     println!("{}", provider.body);
//!
//!     let results = client
//!         .search(SearchQuery::new().with_keywords("engineering").with_page(1))
//!         .await?;
//!     println!("{}", results.body);
//!
//!     Ok(())
//! }
//! ```
//!
//! Credentials can also come from the environment (`DEMAPI_API_KEY`,
//! `DEMAPI_API_SECRET`); see [`DefaultCredentialProvider`] for the
//! resolution order.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;
pub mod hash;
pub mod time;
pub mod utils;

mod client;
pub use client::Client;
mod config;
pub use config::Config;
mod context;
pub use context::Context;
mod credential;
pub use credential::Credential;
mod dispatch;
pub use dispatch::Dispatcher;
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod http;
pub use crate::http::{HttpSend, NoopHttpSend, ReqwestHttpSend};
mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, ProvideCredential, ProvideCredentialChain,
    StaticCredentialProvider,
};
mod request;
pub use request::{canonical_path, CanonicalRequest, ParamValue, Params, ALLOWED_METHODS};
mod response;
pub use response::ApiResponse;
mod search;
pub use search::SearchQuery;
mod sign;
pub use sign::{RequestSigner, SigningStrategy};
pub use time::TimestampFormat;
