//! Query-string helpers for the review-modal deep link.

/// Parameter carried by the URL when a review is being edited. The
/// modal opens for it at mount time and strips it on close.
pub const REVIEW_PARAM: &str = "update_review_id";

/// Extract the review id from a query string or hash fragment.
/// Supports formats like `?update_review_id=12&page=2`.
pub fn review_param(s: &str) -> Option<String> {
    // Remove leading ? or #
    let s = s.trim_start_matches(|c| c == '?' || c == '#');

    for pair in s.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == REVIEW_PARAM && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_review_id_from_search() {
        assert_eq!(review_param("?update_review_id=12"), Some("12".to_string()));
    }

    #[test]
    fn test_extracts_review_id_from_hash() {
        assert_eq!(review_param("#update_review_id=7"), Some("7".to_string()));
    }

    #[test]
    fn test_ignores_unrelated_params() {
        assert_eq!(review_param("?page=2&sort=title"), None);
    }

    #[test]
    fn test_finds_param_among_others() {
        assert_eq!(
            review_param("?page=2&update_review_id=9&sort=title"),
            Some("9".to_string())
        );
    }

    #[test]
    fn test_empty_value_is_absent() {
        assert_eq!(review_param("?update_review_id="), None);
    }

    #[test]
    fn test_empty_string_is_absent() {
        assert_eq!(review_param(""), None);
        assert_eq!(review_param("?"), None);
    }
}
