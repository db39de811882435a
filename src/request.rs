//! Resource paths and request parameters.

use std::borrow::Cow;

use http::Method;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;

use crate::{Error, Result};

/// Methods the API accepts. Anything else is refused before any I/O.
pub const ALLOWED_METHODS: &[Method] = &[Method::GET, Method::PUT, Method::POST];

/// Characters escaped inside a path segment, over and above controls.
/// `/` never appears here; segments are encoded one at a time.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Build the canonical form of a resource path.
///
/// The canonical form starts and ends with `/`, is lower-cased unless
/// `preserve_case` is set, and has each segment percent-encoded just
/// enough to keep the URI valid. The same string is used for the request
/// URL and for the signature input, so the two can never drift apart.
///
/// Surrounding slashes in the input are ignored: `providers/york`,
/// `/providers/york` and `providers/york/` all canonicalize to
/// `/providers/york/`.
pub fn canonical_path(resource: &str, preserve_case: bool) -> Result<String> {
    let trimmed = resource.trim_matches('/');
    if trimmed.is_empty() {
        return Err(Error::invalid_argument("resource path must not be empty"));
    }

    let folded;
    let trimmed = if preserve_case {
        trimmed
    } else {
        folded = trimmed.to_lowercase();
        &folded
    };

    let mut path = String::with_capacity(trimmed.len() + 2);
    path.push('/');
    for segment in trimmed.split('/') {
        if segment.is_empty() {
            return Err(Error::invalid_argument(format!(
                "resource path {resource:?} contains an empty segment"
            )));
        }
        path.extend(utf8_percent_encode(segment, SEGMENT));
        path.push('/');
    }

    Ok(path)
}

/// First segment of a canonical path, the resource root.
pub(crate) fn path_root(path: &str) -> &str {
    path.split('/').find(|s| !s.is_empty()).unwrap_or("")
}

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// One value.
    Scalar(String),
    /// Multiple values, sent as one comma-joined pair.
    List(Vec<String>),
}

impl ParamValue {
    /// Wire rendering of the value, before percent-encoding.
    fn render(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Scalar(v) => Cow::Borrowed(v.as_str()),
            ParamValue::List(vs) => Cow::Owned(vs.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|v| v.to_string()).collect())
    }
}

/// Insertion-ordered request parameters.
///
/// Iteration order is the order keys were first inserted; re-inserting a
/// key replaces its value in place. Some deployments fold the serialized
/// parameter string into the signature digest, so wire order must be
/// stable and caller-controlled rather than hash-map arbitrary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, replacing its value if the key is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Check if no parameters have been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get a parameter's rendered value.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.render())
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize into the form-encoded field string, `a=1&b=x%2Cy`.
    ///
    /// The one rendering feeds the query string for GET, the request body
    /// for PUT and POST, and the params-inclusive signing strategy.
    pub fn serialize(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            ser.append_pair(key, &value.render());
        }
        ser.finish()
    }
}

/// The canonical pieces of one request, exactly as the signature sees them.
#[derive(Debug, Clone)]
pub struct CanonicalRequest {
    /// Canonical resource path, `/providers/42/courses/`.
    pub path: String,
    /// HTTP method, already validated against [`ALLOWED_METHODS`].
    pub method: Method,
    /// Serialized field string; query or body depending on the method.
    pub fields: String,
}
