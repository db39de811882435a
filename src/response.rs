use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::Result;

/// One answer from the API: the status and the raw body.
///
/// Bodies pass through untouched. Decoding is the caller's decision;
/// [`json`](ApiResponse::json) covers the usual case.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status the server answered with.
    pub status: StatusCode,
    /// Raw response body, typically JSON.
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Consume the response, returning the raw body.
    pub fn into_body(self) -> String {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::ErrorKind;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Provider {
        ident: String,
        title: String,
    }

    #[test]
    fn test_json_decodes_the_body() {
        let resp = ApiResponse {
            status: StatusCode::OK,
            body: r#"{"ident":"york","title":"University of York"}"#.to_string(),
        };

        let provider: Provider = resp.json().unwrap();
        assert_eq!(
            provider,
            Provider {
                ident: "york".to_string(),
                title: "University of York".to_string(),
            }
        );
    }

    #[test]
    fn test_json_reports_decode_failures() {
        let resp = ApiResponse {
            status: StatusCode::OK,
            body: "not json at all".to_string(),
        };

        let err = resp.json::<Provider>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
