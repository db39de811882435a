use std::fmt::{Debug, Formatter};

use crate::utils::Redact;

/// Credential for accessing the DEM API.
///
/// The key identifies the caller and travels with every request; the
/// secret stays inside the process and only ever feeds the signature
/// digest.
#[derive(Clone, Default)]
pub struct Credential {
    /// API key for this credential.
    pub api_key: String,
    /// Signing secret for this credential.
    pub api_secret: String,
}

impl Credential {
    /// Create a credential from a key and secret pair.
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }

    /// Check whether this credential can sign a request.
    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("key", "secret").is_valid());
        assert!(!Credential::new("key", "").is_valid());
        assert!(!Credential::new("", "secret").is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_debug_never_prints_the_secret() {
        let cred = Credential::new("live-0123456789abcdef", "terribly-secret-value");
        let printed = format!("{cred:?}");

        assert!(!printed.contains("terribly-secret-value"));
        assert!(printed.contains("liv***def"));
    }
}
