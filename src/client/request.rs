//! Request descriptors handed to [`ArrClient`](super::ArrClient).

use std::fmt;

use serde::Serialize;
use url::form_urlencoded;

use super::ClientError;

/// One API call: a path below the base URL, query parameters and an optional JSON body.
///
/// Query parameters keep insertion order and may repeat (`categories=1&categories=2`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Path below the base URL, e.g. `/api/v3/release`.
    pub uri: String,
    /// Query parameters in send order.
    pub query: Vec<(String, String)>,
    /// Encoded JSON body.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a request for `uri` with no query or body.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends one query parameter per value, all under `key`.
    #[must_use]
    pub fn query_all<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        self.query
            .extend(values.into_iter().map(|value| (key.to_string(), value.to_string())));
        self
    }

    /// Returns the first value of a query parameter.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Encodes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        let encoded =
            serde_json::to_vec(body).map_err(|source| ClientError::encode(self.to_string(), source))?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Returns the URL-encoded query string, without the leading `?`.
    #[must_use]
    pub fn encoded_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.encoded_query())?;
        }
        Ok(())
    }
}
