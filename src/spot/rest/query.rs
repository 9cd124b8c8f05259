//! Canonical query string construction.
//!
//! The string produced here is both what gets signed and what gets sent, so
//! parameters keep the order they were first added in and each name appears
//! at most once.

use url::form_urlencoded;

/// Ordered mapping of query parameter names to values that may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    ///
    /// A name that is already present keeps its position and takes the new
    /// value. `None` values are kept but never encoded.
    pub fn push<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        let name = name.into();
        let value = value.map(|v| v.to_string());
        match self.pairs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Builder-style [`QueryParams::push`].
    pub fn with<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.push(name, value);
        self
    }

    /// Number of parameters, including absent ones.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Get the value of the parameter called `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Encode present parameters in insertion order.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            if let Some(value) = value {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(QueryParams::new().to_query_string(), "");
        let only_absent = QueryParams::new().with("symbol", None::<&str>);
        assert_eq!(only_absent.to_query_string(), "");
    }

    #[test]
    fn test_absent_values_leave_no_trace() {
        let params = QueryParams::new()
            .with("symbol", Some("BTCUSDT"))
            .with("orderId", None::<u64>)
            .with("limit", Some(5));
        let query = params.to_query_string();
        assert_eq!(query, "symbol=BTCUSDT&limit=5");
        assert!(!query.contains("orderId"));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let params: QueryParams = [("zebra", Some("1")), ("alpha", Some("2")), ("middle", Some("3"))]
            .into_iter()
            .collect();
        assert_eq!(params.to_query_string(), "zebra=1&alpha=2&middle=3");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = QueryParams::new()
            .with("note", Some("a b&c=d"))
            .with("path", Some("x/y?z"));
        assert_eq!(params.to_query_string(), "note=a+b%26c%3Dd&path=x%2Fy%3Fz");
    }

    #[test]
    fn test_repeated_name_replaces_in_place() {
        let params = QueryParams::new()
            .with("symbol", Some("A"))
            .with("limit", Some(5))
            .with("symbol", Some("B"));
        assert_eq!(params.to_query_string(), "symbol=B&limit=5");
        assert_eq!(params.len(), 2);

        let cleared = params.with("limit", None::<u32>);
        assert_eq!(cleared.to_query_string(), "symbol=B");
    }

    #[test]
    fn test_get() {
        let params = QueryParams::new()
            .with("symbol", Some("ETHBTC"))
            .with("orderId", None::<u64>);
        assert_eq!(params.get("symbol"), Some("ETHBTC"));
        assert_eq!(params.get("orderId"), None);
        assert_eq!(params.len(), 2);
    }
}
