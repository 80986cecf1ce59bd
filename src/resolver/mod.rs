pub mod http_client;
pub mod models;
pub mod pipeline;
pub mod rating;
pub mod search;
pub mod urls;

mod fetch;

pub use models::{PlayerMatch, RatedPlayer, RatingResponse, SearchResponse};
pub use pipeline::{batch_date, parse_batch_date, resolve_all};
pub use rating::fetch_rating;
pub use search::resolve_name;
