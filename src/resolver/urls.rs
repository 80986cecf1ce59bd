//! URL building utilities for the ECF rating API endpoints

use url::form_urlencoded;

/// Encodes a path segment the way the ECF API expects: form-urlencoding,
/// with spaces becoming a literal `+`.
///
/// # Example
/// ```
/// use ecf_ratings::resolver::urls::quote_plus;
///
/// assert_eq!(quote_plus("john smythe"), "john+smythe");
/// assert_eq!(quote_plus("O'Neill"), "O%27Neill");
/// ```
pub fn quote_plus(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Builds the fuzzy name search URL.
///
/// # Arguments
/// * `api_domain` - The base API URL
/// * `name` - The free-text player name to search for
///
/// # Returns
/// * `String` - The complete search URL
///
/// # Example
/// ```
/// use ecf_ratings::resolver::urls::build_search_url;
///
/// let url = build_search_url("https://api.example.com/api.php", "john smythe");
/// assert_eq!(url, "https://api.example.com/api.php?v2/players/name/john+smythe");
/// ```
pub fn build_search_url(api_domain: &str, name: &str) -> String {
    format!("{api_domain}?v2/players/name/{}", quote_plus(name))
}

/// Builds the rating lookup URL for a player code on a given date.
/// Codes may carry trailing letters (e.g. `120787J`) and are encoded whole.
///
/// # Arguments
/// * `api_domain` - The base API URL
/// * `code` - The player's ECF code
/// * `date` - The rating date in YYYY-MM-DD format
///
/// # Returns
/// * `String` - The complete rating URL
///
/// # Example
/// ```
/// use ecf_ratings::resolver::urls::build_rating_url;
///
/// let url = build_rating_url("https://api.example.com/api.php", "120787J", "2024-01-15");
/// assert_eq!(url, "https://api.example.com/api.php?v2/ratings/R/120787J/2024-01-15");
/// ```
pub fn build_rating_url(api_domain: &str, code: &str, date: &str) -> String {
    format!("{api_domain}?v2/ratings/R/{}/{date}", quote_plus(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plus_spaces() {
        assert_eq!(quote_plus("magnus carlsen"), "magnus+carlsen");
    }

    #[test]
    fn test_quote_plus_special_characters() {
        assert_eq!(quote_plus("O'Neill"), "O%27Neill");
        assert_eq!(quote_plus("Müller"), "M%C3%BCller");
    }

    #[test]
    fn test_quote_plus_passthrough() {
        assert_eq!(quote_plus("120787J"), "120787J");
    }

    #[test]
    fn test_build_search_url() {
        let url = build_search_url("https://rating.example.org/api.php", "john smythe");
        assert_eq!(
            url,
            "https://rating.example.org/api.php?v2/players/name/john+smythe"
        );
    }

    #[test]
    fn test_build_rating_url() {
        let url = build_rating_url("https://rating.example.org/api.php", "120787J", "2024-01-15");
        assert_eq!(
            url,
            "https://rating.example.org/api.php?v2/ratings/R/120787J/2024-01-15"
        );
    }
}
