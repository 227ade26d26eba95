use crate::compat::{String, ToString, Vec};
use crate::percent_encode::{form_decode, form_encode_into};

/// Ordered query-string parameters.
///
/// Keys are unique: adding an existing key overwrites its value in place, so
/// the rendered order is the order in which keys were first inserted.
///
/// ```
/// use urikit::QueryParameters;
///
/// let mut query = QueryParameters::parse("key=value&key2=value2");
/// query.remove_value("key2");
/// query.add_value("name", "John Doe");
/// assert_eq!(query.get_query_parameters(), "key=value&name=John+Doe");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryParameters {
    values: Vec<(String, String)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Parse from a form-encoded query string (with or without leading `?`).
    /// Never fails; pairs with an empty key are dropped and a repeated key
    /// keeps its last value.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        params.parse_into(query);
        params
    }

    /// Replace the current values with the parameters decoded from `query`.
    pub fn set_query_string(&mut self, query: &str) -> &mut Self {
        self.values.clear();
        self.parse_into(query);
        self
    }

    fn parse_into(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (form_decode(key), form_decode(value)),
                None => (form_decode(pair), String::new()),
            };
            if key.is_empty() {
                tracing::trace!(pair, "dropping query pair without a key");
                continue;
            }
            self.insert(key, value);
        }
    }

    /// Render the parameters as a form-encoded query string (no leading `?`).
    pub fn get_query_parameters(&self) -> String {
        let mut result = String::new();
        for (i, (key, value)) in self.values.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            form_encode_into(&mut result, key);
            result.push('=');
            form_encode_into(&mut result, value);
        }
        result
    }

    /// Insert a value, overwriting an existing key in place.
    pub fn add_value(&mut self, key: &str, value: &str) -> &mut Self {
        self.insert(key.to_string(), value.to_string());
        self
    }

    fn insert(&mut self, key: String, value: String) {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.values.push((key, value)),
        }
    }

    /// Remove a key. Absent keys are ignored.
    pub fn remove_value(&mut self, key: &str) -> &mut Self {
        self.values.retain(|(k, _)| k != key);
        self
    }

    /// Get the value for a key.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.iter().any(|(k, _)| k == key)
    }

    /// Replace all values. Later duplicates overwrite earlier ones.
    pub fn set_values<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values.clear();
        for (key, value) in values {
            self.insert(key.into(), value.into());
        }
        self
    }

    /// Iterate over the decoded key-value pairs in order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl core::fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.get_query_parameters())
    }
}

impl From<&str> for QueryParameters {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParameters {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.set_values(iter);
        params
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.get_query_parameters())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
