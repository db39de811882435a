//! Signature computation and header application.

use http::header::AUTHORIZATION;
use http::header::DATE;
use http::HeaderValue;
use log::debug;

use crate::credential::Credential;
use crate::hash::hex_sha1;
use crate::request::CanonicalRequest;
use crate::time::{now, Timestamp, TimestampFormat};
use crate::Result;

/// Canonical string layouts the server may verify against.
///
/// Deployments differ in what the digest covers. The default is what
/// current servers expect; the other variants exist for deployments that
/// still verify the older layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SigningStrategy {
    /// Digest over `path + method + date + secret`.
    #[default]
    PathMethodDateSecret,
    /// Digest over `path + method + date + fields + secret`. The
    /// serialized parameter string participates, so any change to the
    /// parameters invalidates the signature.
    PathMethodDateParamsSecret,
    /// Digest over the first three path segments run together, then
    /// `api key + date + secret`. The oldest layout, built from the
    /// module, controller and action of the original routing scheme.
    ModuleControllerActionKeyDateSecret,
}

impl SigningStrategy {
    /// Build the canonical string the signature digests.
    ///
    /// Pure function of its inputs; identical inputs always produce an
    /// identical string. The output embeds the secret and must never be
    /// logged.
    pub fn string_to_sign(&self, req: &CanonicalRequest, cred: &Credential, date: &str) -> String {
        let mut s = String::new();
        match self {
            SigningStrategy::PathMethodDateSecret => {
                s.push_str(&req.path);
                s.push_str(req.method.as_str());
                s.push_str(date);
                s.push_str(&cred.api_secret);
            }
            SigningStrategy::PathMethodDateParamsSecret => {
                s.push_str(&req.path);
                s.push_str(req.method.as_str());
                s.push_str(date);
                s.push_str(&req.fields);
                s.push_str(&cred.api_secret);
            }
            SigningStrategy::ModuleControllerActionKeyDateSecret => {
                for segment in req.path.split('/').filter(|s| !s.is_empty()).take(3) {
                    s.push_str(segment);
                }
                s.push_str(&cred.api_key);
                s.push_str(date);
                s.push_str(&cred.api_secret);
            }
        }
        s
    }
}

/// RequestSigner stamps the `Date` and `Authorization` headers onto a
/// request.
///
/// The signature is a hex SHA1 digest of the configured strategy's
/// canonical string; the `Authorization` value is `key:signature`. A
/// fresh timestamp is taken for every request.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    strategy: SigningStrategy,
    timestamp_format: TimestampFormat,
    time: Option<Timestamp>,
}

impl RequestSigner {
    /// Create a signer for the given strategy and timestamp rendering.
    pub fn new(strategy: SigningStrategy, timestamp_format: TimestampFormat) -> Self {
        Self {
            strategy,
            timestamp_format,
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take the current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: Timestamp) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign one request in place.
    pub fn sign(
        &self,
        parts: &mut http::request::Parts,
        cred: &Credential,
        req: &CanonicalRequest,
    ) -> Result<()> {
        let date = self.timestamp_format.format(self.time.unwrap_or_else(now));

        let string_to_sign = self.strategy.string_to_sign(req, cred, &date);
        let signature = hex_sha1(string_to_sign.as_bytes());
        debug!("signed {} {} at {}", req.method, req.path, date);

        parts.headers.insert(DATE, date.parse()?);

        let mut authorization: HeaderValue =
            format!("{}:{}", cred.api_key, signature).parse()?;
        authorization.set_sensitive(true);
        parts.headers.insert(AUTHORIZATION, authorization);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use http::Method;
    use pretty_assertions::assert_eq;

    use super::*;

    fn frozen() -> Timestamp {
        chrono::DateTime::parse_from_rfc2822("Mon, 15 Aug 2022 16:50:12 GMT")
            .expect("fixture date must parse")
            .with_timezone(&Utc)
    }

    fn canonical(path: &str, method: Method, fields: &str) -> CanonicalRequest {
        CanonicalRequest {
            path: path.to_string(),
            method,
            fields: fields.to_string(),
        }
    }

    #[test]
    fn test_default_strategy_layout() {
        let req = canonical("/providers/york/", Method::GET, "site=3");
        let cred = Credential::new("K", "S");

        let s = SigningStrategy::PathMethodDateSecret.string_to_sign(
            &req,
            &cred,
            "Mon, 15 Aug 2022 16:50:12 GMT",
        );

        // Fields stay out of the default digest.
        assert_eq!(s, "/providers/york/GETMon, 15 Aug 2022 16:50:12 GMTS");
        assert_eq!(
            hex_sha1(s.as_bytes()),
            "9e5ff37ca0f72def1de623e7625c9a7397293e50"
        );
    }

    #[test]
    fn test_params_strategy_layout() {
        let req = canonical(
            "/search/",
            Method::GET,
            "keywords=engineering&levels=ug%2Cpg&site=3",
        );
        let cred = Credential::new("K", "S");

        let s = SigningStrategy::PathMethodDateParamsSecret.string_to_sign(
            &req,
            &cred,
            "Mon, 15 Aug 2022 16:50:12 GMT",
        );

        assert_eq!(
            s,
            "/search/GETMon, 15 Aug 2022 16:50:12 GMTkeywords=engineering&levels=ug%2Cpg&site=3S"
        );
        assert_eq!(
            hex_sha1(s.as_bytes()),
            "176b941415079fedbd22c7c0d674a2a1456578ae"
        );
    }

    #[test]
    fn test_legacy_strategy_layout() {
        let req = canonical("/providers/42/courses/", Method::GET, "");
        let cred = Credential::new("K", "S");

        let s = SigningStrategy::ModuleControllerActionKeyDateSecret.string_to_sign(
            &req,
            &cred,
            "Mon, 15 Aug 2022 16:50:12 GMT",
        );

        assert_eq!(s, "providers42coursesKMon, 15 Aug 2022 16:50:12 GMTS");
        assert_eq!(
            hex_sha1(s.as_bytes()),
            "6f9a153a4808d118007fb73b277d04880657db1a"
        );
    }

    #[test]
    fn test_legacy_strategy_with_fewer_segments() {
        let req = canonical("/awardtypes/", Method::GET, "");
        let cred = Credential::new("K", "S");

        let s = SigningStrategy::ModuleControllerActionKeyDateSecret.string_to_sign(
            &req,
            &cred,
            "Mon, 15 Aug 2022 16:50:12 GMT",
        );

        assert_eq!(s, "awardtypesKMon, 15 Aug 2022 16:50:12 GMTS");
        assert_eq!(
            hex_sha1(s.as_bytes()),
            "c7c02a3aff7f75fffdcb1e89fbbefc2a798c260b"
        );
    }

    #[test]
    fn test_signature_covers_every_input() {
        let cred = Credential::new("K", "S");
        let date = "Mon, 15 Aug 2022 16:50:12 GMT";
        let strategy = SigningStrategy::PathMethodDateSecret;

        let base = strategy.string_to_sign(
            &canonical("/providers/york/", Method::GET, ""),
            &cred,
            date,
        );

        let other_path = strategy.string_to_sign(
            &canonical("/providers/leeds/", Method::GET, ""),
            &cred,
            date,
        );
        let other_method = strategy.string_to_sign(
            &canonical("/providers/york/", Method::PUT, ""),
            &cred,
            date,
        );
        let other_date = strategy.string_to_sign(
            &canonical("/providers/york/", Method::GET, ""),
            &cred,
            "Mon, 15 Aug 2022 16:50:13 GMT",
        );
        let other_secret = strategy.string_to_sign(
            &canonical("/providers/york/", Method::GET, ""),
            &Credential::new("K", "S2"),
            date,
        );

        for changed in [other_path, other_method, other_date, other_secret] {
            assert_ne!(hex_sha1(base.as_bytes()), hex_sha1(changed.as_bytes()));
        }
    }

    #[test]
    fn test_sign_sets_date_and_authorization() {
        let (mut parts, _) = http::Request::builder()
            .method(Method::GET)
            .uri("https://api.example.test/providers/york/?site=3")
            .body(())
            .unwrap()
            .into_parts();

        let signer = RequestSigner::new(SigningStrategy::default(), TimestampFormat::HttpDate)
            .with_time(frozen());
        let cred = Credential::new("K", "S");
        let req = canonical("/providers/york/", Method::GET, "site=3");

        signer.sign(&mut parts, &cred, &req).unwrap();

        assert_eq!(
            parts.headers.get(DATE).unwrap(),
            "Mon, 15 Aug 2022 16:50:12 GMT"
        );
        let authorization = parts.headers.get(AUTHORIZATION).unwrap();
        assert_eq!(
            authorization,
            "K:9e5ff37ca0f72def1de623e7625c9a7397293e50"
        );
        assert!(authorization.is_sensitive());
    }

    #[test]
    fn test_sign_with_compact_timestamp() {
        let (mut parts, _) = http::Request::builder()
            .method(Method::GET)
            .uri("https://api.example.test/providers/york/")
            .body(())
            .unwrap()
            .into_parts();

        let signer = RequestSigner::new(SigningStrategy::default(), TimestampFormat::Compact)
            .with_time(frozen());
        let cred = Credential::new("K", "S");
        let req = canonical("/providers/york/", Method::GET, "");

        signer.sign(&mut parts, &cred, &req).unwrap();

        assert_eq!(parts.headers.get(DATE).unwrap(), "2022-08-1516:50:12");
    }
}
