use std::collections::HashMap;
use std::fmt::Debug;

/// Env is how the crate reads environment variables.
///
/// Credential and configuration resolution go through this trait so tests
/// and embedders can supply a fixed environment instead of the process one.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context, both Unix style and Windows.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env() {
        let env = StaticEnv {
            envs: HashMap::from([("DEMAPI_API_KEY".to_string(), "k".to_string())]),
        };

        assert_eq!(env.var("DEMAPI_API_KEY"), Some("k".to_string()));
        assert_eq!(env.var("DEMAPI_API_SECRET"), None);
    }
}
