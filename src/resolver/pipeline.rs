//! Aggregator: drives search and rating lookups over a batch of names

use std::time::Duration;

use chrono::Local;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::models::RatedPlayer;
use super::rating::fetch_rating;
use super::search::resolve_name;
use crate::config::Config;
use crate::error::AppError;

/// Computes the batch date: today, ISO formatted.
///
/// Called once at the start of a run and passed through explicitly, so every
/// rating lookup in the batch is anchored to the same day and tests can
/// inject a fixed date instead.
pub fn batch_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Validates a caller-supplied batch date override.
pub fn parse_batch_date(input: &str) -> Result<String, AppError> {
    chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|e| AppError::date_parse_error(format!("Invalid date '{input}': {e}")))
}

/// Resolves every name in the batch to rated players, sorted by rating
/// descending.
///
/// Per name, in input order: search for candidate matches; every candidate
/// with a player code becomes one result row with its fetched rating (or 0
/// when the lookup fails). Names without matches and candidates without
/// codes produce diagnostics, never rows, and never abort the batch.
///
/// `request_delay` is the unconditional pause inserted after each processed
/// candidate to stay under the remote API's request limits; tests pass
/// `Duration::ZERO`.
///
/// # Errors
/// * [`AppError::NoUsableNames`] - no name survived trimming; nothing was queried
#[instrument(skip(client, config, names))]
pub async fn resolve_all(
    client: &Client,
    config: &Config,
    names: &[String],
    date: &str,
    request_delay: Duration,
) -> Result<Vec<RatedPlayer>, AppError> {
    let usable: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();

    if usable.is_empty() {
        return Err(AppError::NoUsableNames);
    }

    info!("Resolving {} name(s) for date {}", usable.len(), date);

    let mut rows = Vec::new();
    for name in usable {
        let matches = resolve_name(client, config, name).await;

        if matches.is_empty() {
            warn!("No matches found for name: {}", name);
            continue;
        }

        for candidate in matches {
            match candidate.player_code() {
                Some(code) => {
                    let rating = fetch_rating(client, config, code, date).await;
                    rows.push(RatedPlayer::new(candidate.display_name(), rating));
                }
                None => {
                    warn!(
                        "Match '{}' for '{}' has no player code, skipping",
                        candidate.display_name(),
                        name
                    );
                }
            }

            tokio::time::sleep(request_delay).await;
        }
    }

    // Stable sort: ties keep first-matched-first order
    rows.sort_by(|a, b| b.rating.cmp(&a.rating));

    info!("Batch complete: {} result row(s)", rows.len());
    Ok(rows)
}
