use crate::error::UiError;

/// Get the query string of the current page, including the leading `?`
pub fn current_query() -> Result<String, UiError> {
    let location = crate::window()?.location();
    location
        .search()
        .map_err(|_| UiError::Dom("failed to read location.search".to_string()))
}

/// Check whether a query string contains a key, with or without a value
///
/// Expected format: `?a=1&b` (a leading `?` is tolerated and stripped).
pub fn query_has_key(search: &str, key: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .any(|pair| pair.split('=').next() == Some(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_key_with_value() {
        assert!(query_has_key("?sent=1", "sent"));
    }

    #[test]
    fn finds_bare_key() {
        assert!(query_has_key("?sent", "sent"));
        assert!(query_has_key("?a=1&sent", "sent"));
    }

    #[test]
    fn ignores_prefix_matches() {
        assert!(!query_has_key("?sentinel=1", "sent"));
        assert!(!query_has_key("?resent=1", "sent"));
    }

    #[test]
    fn empty_query_has_no_keys() {
        assert!(!query_has_key("", "sent"));
        assert!(!query_has_key("?", "sent"));
    }
}
