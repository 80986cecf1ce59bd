//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default base URL of the ECF rating API. Can be overridden via config file
/// or the `ECF_API_DOMAIN` environment variable.
pub const DEFAULT_API_DOMAIN: &str = "https://rating.englishchess.org.uk/v2/new/api.php";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Display name used when a search match carries no recognizable name field
pub const UNKNOWN_PLAYER_NAME: &str = "<unknown>";

/// Rating value recorded when a lookup fails or the player has no rating
pub const NO_RATING: i64 = 0;

/// Request pacing configuration
pub mod pacing {
    /// Minimum spacing between consecutive outbound requests (milliseconds).
    /// The ECF API enforces per-second and daily request limits; one fixed
    /// unconditional pause per lookup keeps a batch under them.
    pub const REQUEST_DELAY_MS: u64 = 200;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "ECF_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "ECF_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "ECF_HTTP_TIMEOUT";

    /// Environment variable for request pacing override in milliseconds (default: 200)
    pub const REQUEST_DELAY_MS: &str = "ECF_REQUEST_DELAY_MS";
}
