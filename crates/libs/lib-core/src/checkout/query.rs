//! Query string access.

/// Decoded `key=value` pairs of a URL query, in the order they appeared.
///
/// Values are percent-decoded and `+` reads as a space, the same way the
/// browser's `URLSearchParams` treats them. A key without `=` maps to an
/// empty value. When a key repeats, [`QueryParams::get`] returns the first
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a `location.search` style string. A leading `?` and any
    /// trailing `#fragment` are ignored.
    ///
    /// ```rust
    /// use lib_core::checkout::QueryParams;
    ///
    /// let params = QueryParams::parse("?name=Ann+Lee&city=Chiang%20Mai#method");
    /// assert_eq!(params.get("name"), Some("Ann Lee"));
    /// assert_eq!(params.get("city"), Some("Chiang Mai"));
    /// ```
    pub fn parse(search: &str) -> Self {
        let search = search.split('#').next().unwrap_or_default();
        let query = search.strip_prefix('?').unwrap_or(search);

        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or an empty string when absent.
    pub fn get_or_default(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
