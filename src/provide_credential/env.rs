use async_trait::async_trait;

use super::ProvideCredential;
use crate::constants::{DEMAPI_API_KEY, DEMAPI_API_SECRET};
use crate::context::Context;
use crate::credential::Credential;
use crate::Result;

/// EnvCredentialProvider loads credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `DEMAPI_API_KEY`: the API key
/// - `DEMAPI_API_SECRET`: the signing secret
///
/// Both must be present; a lone key or secret resolves to nothing.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Credential>> {
        let api_key = ctx.env_var(DEMAPI_API_KEY);
        let api_secret = ctx.env_var(DEMAPI_API_SECRET);

        match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) => Ok(Some(Credential {
                api_key,
                api_secret,
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::env::StaticEnv;
    use crate::http::NoopHttpSend;

    #[tokio::test]
    async fn test_env_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (DEMAPI_API_KEY.to_string(), "env_key".to_string()),
            (DEMAPI_API_SECRET.to_string(), "env_secret".to_string()),
        ]);
        let ctx = Context::new(NoopHttpSend).with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_some());

        let cred = cred.unwrap();
        assert_eq!(cred.api_key, "env_key");
        assert_eq!(cred.api_secret, "env_secret");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_provider_missing_variables() -> anyhow::Result<()> {
        let ctx = Context::new(NoopHttpSend).with_env(StaticEnv::default());

        let provider = EnvCredentialProvider::new();
        assert!(provider.provide_credential(&ctx).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_provider_partial_variables() -> anyhow::Result<()> {
        let envs = HashMap::from([(DEMAPI_API_KEY.to_string(), "env_key".to_string())]);
        let ctx = Context::new(NoopHttpSend).with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        assert!(provider.provide_credential(&ctx).await?.is_none());

        Ok(())
    }
}
