//! Rating Fetcher: rating-by-code lookups against the ECF rating API

use reqwest::Client;
use tracing::{debug, instrument, warn};

use super::fetch::fetch;
use super::models::RatingResponse;
use super::urls::build_rating_url;
use crate::config::Config;
use crate::constants::NO_RATING;

/// Fetches the revised rating for a player code as of `date` (YYYY-MM-DD).
///
/// The date is computed once per batch by the caller so every lookup in one
/// run is anchored to the same day. Failures of any kind - transport, status,
/// payload, missing field - are logged and collapse to [`NO_RATING`], so a
/// single bad lookup cannot abort a batch.
#[instrument(skip(client, config))]
pub async fn fetch_rating(client: &Client, config: &Config, code: &str, date: &str) -> i64 {
    let url = build_rating_url(&config.api_domain, code, date);

    match fetch::<RatingResponse>(client, &url).await {
        Ok(response) => match response.revised_rating {
            Some(rating) => {
                debug!("Code '{}' rated {} as of {}", code, rating, date);
                rating
            }
            None => {
                warn!("No revised rating for code '{}', recording {}", code, NO_RATING);
                NO_RATING
            }
        },
        Err(e) => {
            warn!("Failed to fetch rating for code '{}': {}", code, e);
            NO_RATING
        }
    }
}
