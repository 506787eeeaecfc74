//! Canonical request fingerprints
//!
//! A fingerprint identifies a logically unique API request. Query parameters
//! are sorted before serialization so that parameter order never affects the
//! key, and the request method is part of the key so a POST can never collide
//! with a GET on the same path.

use std::fmt;

use url::form_urlencoded;

/// Canonical cache key for an API request.
///
/// Rendered as `"<METHOD> <path>?<sorted, form-encoded query>"`.
///
/// # Examples
///
/// ```
/// use playdl_common::RequestFingerprint;
///
/// let a = RequestFingerprint::get("rec", &[("doc", "com.example"), ("rt", "1")]);
/// let b = RequestFingerprint::get("rec", &[("rt", "1"), ("doc", "com.example")]);
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "GET rec?doc=com.example&rt=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestFingerprint(String);

impl RequestFingerprint {
    /// Build a fingerprint from its parts.
    ///
    /// Leading slashes on `path` are ignored. Pairs are ordered by key, then
    /// by value, so repeated keys are handled deterministically too.
    pub fn new<K, V>(path: &str, query: &[(K, V)], has_body: bool) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs: Vec<(&str, &str)> =
            query.iter().map(|(key, value)| (key.as_ref(), value.as_ref())).collect();
        pairs.sort_unstable();

        let query = form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish();
        let method = if has_body { "POST" } else { "GET" };

        Self(format!("{method} {}?{query}", path.trim_start_matches('/')))
    }

    /// Fingerprint of a body-less request.
    pub fn get<K, V>(path: &str, query: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::new(path, query, false)
    }

    /// Fingerprint of a request carrying a body.
    pub fn post<K, V>(path: &str, query: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::new(path, query, true)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RequestFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
