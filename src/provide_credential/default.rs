use async_trait::async_trait;

use super::{EnvCredentialProvider, ProvideCredential, ProvideCredentialChain, StaticCredentialProvider};
use crate::config::Config;
use crate::context::Context;
use crate::credential::Credential;
use crate::Result;

/// DefaultCredentialProvider resolves credentials the standard way.
///
/// Resolution order:
///
/// 1. Key and secret set on the [`Config`]
/// 2. Environment variables (`DEMAPI_API_KEY`, `DEMAPI_API_SECRET`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain,
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` from the configuration.
    pub fn new(config: &Config) -> Self {
        let mut chain = ProvideCredentialChain::new();

        if let (Some(api_key), Some(api_secret)) = (&config.api_key, &config.api_secret) {
            chain = chain.push(StaticCredentialProvider::new(api_key, api_secret));
        }
        chain = chain.push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::constants::{DEMAPI_API_KEY, DEMAPI_API_SECRET};
    use crate::env::StaticEnv;
    use crate::http::NoopHttpSend;

    #[tokio::test]
    async fn test_default_provider_without_anything() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new(NoopHttpSend).with_env(StaticEnv::default());

        let provider = DefaultCredentialProvider::new(&Config::default());
        let cred = provider.provide_credential(&ctx).await.expect("load must succeed");
        assert!(cred.is_none());
    }

    #[tokio::test]
    async fn test_default_provider_prefers_the_config() {
        let _ = env_logger::builder().is_test(true).try_init();

        let envs = HashMap::from([
            (DEMAPI_API_KEY.to_string(), "env_key".to_string()),
            (DEMAPI_API_SECRET.to_string(), "env_secret".to_string()),
        ]);
        let ctx = Context::new(NoopHttpSend).with_env(StaticEnv { envs });

        let config = Config::default().with_credentials("config_key", "config_secret");
        let provider = DefaultCredentialProvider::new(&config);
        let cred = provider
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("credential must resolve");

        assert_eq!(cred.api_key, "config_key");
        assert_eq!(cred.api_secret, "config_secret");
    }

    #[tokio::test]
    async fn test_default_provider_falls_back_to_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let envs = HashMap::from([
            (DEMAPI_API_KEY.to_string(), "env_key".to_string()),
            (DEMAPI_API_SECRET.to_string(), "env_secret".to_string()),
        ]);
        let ctx = Context::new(NoopHttpSend).with_env(StaticEnv { envs });

        let provider = DefaultCredentialProvider::new(&Config::default());
        let cred = provider
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("credential must resolve");

        assert_eq!(cred.api_key, "env_key");
        assert_eq!(cred.api_secret, "env_secret");
    }
}
