//! Credential resolution.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::context::Context;
use crate::credential::Credential;
use crate::Result;

/// ProvideCredential is a source of API credentials.
///
/// - Returns `Ok(Some(cred))` when this source has a usable credential.
/// - Returns `Ok(None)` when this source has nothing; another source may.
/// - Returns `Err(err)` when resolution itself failed.
#[async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Resolve a credential from this source.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>>;
}

mod chain;
pub use chain::ProvideCredentialChain;
mod default;
pub use default::DefaultCredentialProvider;
mod env;
pub use env::EnvCredentialProvider;
mod r#static;
pub use r#static::StaticCredentialProvider;
