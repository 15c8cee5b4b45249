use std::collections::HashMap;

/// Untyped listing parameters as decoded from the URL query string.
///
/// A key may repeat; lookups see the first value. An absent key and a key
/// with an empty value are different things.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `key`, keeping any earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// First value supplied for `key`, if the key is present at all.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins() {
        let params: QueryParams = [("mode", "page"), ("mode", "seek")].into_iter().collect();
        assert_eq!(params.get("mode"), Some("page"));
    }

    #[test]
    fn empty_value_is_present() {
        let params: QueryParams = [("limit", "")].into_iter().collect();
        assert_eq!(params.get("limit"), Some(""));
        assert_eq!(params.get("offset"), None);
    }
}
