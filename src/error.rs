use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Batch-level input validation
    #[error("No usable player names supplied - nothing to process")]
    NoUsableNames,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date parsing error with context
    pub fn date_parse_error(msg: impl Into<String>) -> Self {
        Self::DateParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Check if error indicates data not found (business logic, not technical error)
    #[allow(dead_code)] // Utility method for future error handling patterns
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. } | AppError::ApiNoData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_date_parse_error_helper() {
        let error = AppError::date_parse_error("Invalid date format");
        assert!(matches!(error, AppError::DateParse(_)));
        assert_eq!(error.to_string(), "Date parsing error: Invalid date format");
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/players/123");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://api.example.com/players/123"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert!(matches!(error, AppError::ApiServerError { .. }));
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_api_client_error_helper() {
        let error = AppError::api_client_error(400, "Bad request", "https://api.example.com");
        assert!(matches!(error, AppError::ApiClientError { .. }));
        assert_eq!(
            error.to_string(),
            "API client error (400): Bad request (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_api_rate_limit_helper() {
        let error = AppError::api_rate_limit("Too many requests", "https://api.example.com");
        assert!(matches!(error, AppError::ApiRateLimit { .. }));
        assert_eq!(
            error.to_string(),
            "API rate limit exceeded (429): Too many requests (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_api_service_unavailable_helper() {
        let error = AppError::api_service_unavailable(
            503,
            "Service unavailable",
            "https://api.example.com",
        );
        assert!(matches!(error, AppError::ApiServiceUnavailable { .. }));
        assert_eq!(
            error.to_string(),
            "API service unavailable (503): Service unavailable (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_network_timeout_helper() {
        let error = AppError::network_timeout("https://api.example.com");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(
            error.to_string(),
            "Network timeout while fetching data from: https://api.example.com"
        );
    }

    #[test]
    fn test_network_connection_helper() {
        let error = AppError::network_connection("https://api.example.com", "Connection refused");
        assert!(matches!(error, AppError::NetworkConnection { .. }));
        assert_eq!(
            error.to_string(),
            "Connection failed to: https://api.example.com - Connection refused"
        );
    }

    #[test]
    fn test_api_malformed_json_helper() {
        let error =
            AppError::api_malformed_json("Invalid JSON structure", "https://api.example.com");
        assert!(matches!(error, AppError::ApiMalformedJson { .. }));
        assert_eq!(
            error.to_string(),
            "API returned malformed JSON: Invalid JSON structure (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_api_unexpected_structure_helper() {
        let error =
            AppError::api_unexpected_structure("Missing required field", "https://api.example.com");
        assert!(matches!(error, AppError::ApiUnexpectedStructure { .. }));
        assert_eq!(
            error.to_string(),
            "API returned unexpected data structure: Missing required field (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_api_no_data_helper() {
        let error = AppError::api_no_data("Empty response", "https://api.example.com");
        assert!(matches!(error, AppError::ApiNoData { .. }));
        assert_eq!(
            error.to_string(),
            "API returned empty or missing data: Empty response (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_no_usable_names_display() {
        let error = AppError::NoUsableNames;
        assert_eq!(
            error.to_string(),
            "No usable player names supplied - nothing to process"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::api_not_found("url").is_not_found());
        assert!(AppError::api_no_data("empty", "url").is_not_found());

        assert!(!AppError::api_server_error(500, "message", "url").is_not_found());
        assert!(!AppError::config_error("message").is_not_found());
        assert!(!AppError::network_timeout("url").is_not_found());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }
}
