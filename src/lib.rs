//! ECF Chess Rating Batch Lookup Library
//!
//! This library resolves human-entered chess player names into current ECF
//! ratings: each name is fuzzy-searched against the ECF rating API, every
//! matching player code is looked up for the batch date, and the combined
//! results come back sorted by rating descending.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ecf_ratings::config::Config;
//! use ecf_ratings::error::AppError;
//! use ecf_ratings::resolver::http_client::create_http_client_with_timeout;
//! use ecf_ratings::resolver::{batch_date, resolve_all};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let names = vec!["Magnus Carlsen".to_string()];
//!     let date = batch_date();
//!     let delay = Duration::from_millis(config.request_delay_ms);
//!
//!     for row in resolve_all(&client, &config, &names, &date, delay).await? {
//!         println!("{}: {}", row.name, row.rating);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod resolver;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use resolver::{PlayerMatch, RatedPlayer, batch_date, parse_batch_date, resolve_all};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
