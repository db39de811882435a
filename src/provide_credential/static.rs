use async_trait::async_trait;

use super::ProvideCredential;
use crate::context::Context;
use crate::credential::Credential;
use crate::Result;

/// StaticCredentialProvider serves a fixed key and secret pair.
///
/// Useful when credentials come from somewhere this crate knows nothing
/// about, a vault say, and are handed over already resolved.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider around the given pair.
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self {
            credential: Credential::new(api_key, api_secret),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    async fn provide_credential(&self, _: &Context) -> Result<Option<Credential>> {
        if !self.credential.is_valid() {
            return Ok(None);
        }
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::NoopHttpSend;

    #[tokio::test]
    async fn test_static_provider() -> anyhow::Result<()> {
        let ctx = Context::new(NoopHttpSend);

        let provider = StaticCredentialProvider::new("key", "secret");
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());

        let cred = cred.unwrap();
        assert_eq!(cred.api_key, "key");
        assert_eq!(cred.api_secret, "secret");

        Ok(())
    }

    #[tokio::test]
    async fn test_static_provider_with_empty_pair() -> anyhow::Result<()> {
        let ctx = Context::new(NoopHttpSend);

        let provider = StaticCredentialProvider::new("key", "");
        assert!(provider.provide_credential(&ctx).await?.is_none());

        Ok(())
    }
}
