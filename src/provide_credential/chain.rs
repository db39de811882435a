use std::fmt::{self, Debug};

use async_trait::async_trait;

use super::ProvideCredential;
use crate::context::Context;
use crate::credential::Credential;
use crate::Result;

/// A chain of credential providers that will be tried in order.
///
/// The first provider to return a credential wins. A provider that errors
/// is logged and skipped; resolution moves on to the next one.
pub struct ProvideCredentialChain {
    providers: Vec<Box<dyn ProvideCredential>>,
}

impl ProvideCredentialChain {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a credential provider in front of everything already chained.
    pub fn push_front(mut self, provider: impl ProvideCredential) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }
}

impl Default for ProvideCredentialChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ProvideCredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait]
impl ProvideCredential for ProvideCredentialChain {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("credential provider {provider:?} failed: {err:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::NoopHttpSend;
    use crate::Error;

    #[derive(Debug)]
    struct FixedProvider {
        api_key: &'static str,
    }

    #[async_trait]
    impl ProvideCredential for FixedProvider {
        async fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
            Ok(Some(Credential::new(self.api_key, "secret")))
        }
    }

    #[derive(Debug)]
    struct EmptyProvider;

    #[async_trait]
    impl ProvideCredential for EmptyProvider {
        async fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl ProvideCredential for FailingProvider {
        async fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
            Err(Error::missing_context("provider deliberately failed"))
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_success() -> anyhow::Result<()> {
        let ctx = Context::new(NoopHttpSend);

        let chain = ProvideCredentialChain::new()
            .push(FailingProvider)
            .push(EmptyProvider)
            .push(FixedProvider { api_key: "first" })
            .push(FixedProvider { api_key: "second" });

        let cred = chain.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.api_key, "first");

        Ok(())
    }

    #[tokio::test]
    async fn test_chain_skips_failing_providers() -> anyhow::Result<()> {
        let ctx = Context::new(NoopHttpSend);

        let chain = ProvideCredentialChain::new()
            .push(FailingProvider)
            .push(FailingProvider);

        assert!(chain.provide_credential(&ctx).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() -> anyhow::Result<()> {
        let ctx = Context::new(NoopHttpSend);

        let chain = ProvideCredentialChain::new();
        assert!(chain.provide_credential(&ctx).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_push_front_takes_priority() -> anyhow::Result<()> {
        let ctx = Context::new(NoopHttpSend);

        let chain = ProvideCredentialChain::new()
            .push(FixedProvider { api_key: "second" })
            .push_front(FixedProvider { api_key: "first" });

        let cred = chain.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.api_key, "first");

        Ok(())
    }
}
