//! Name Resolver: fuzzy name search against the ECF rating API

use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch::fetch;
use super::models::{PlayerMatch, SearchResponse};
use super::urls::build_search_url;
use crate::config::Config;

/// Resolves a free-text player name into candidate matches.
///
/// Issues a single search query and normalizes the response into a flat
/// match sequence. The caller guarantees `name` is non-empty after trimming.
///
/// This boundary never fails: transport errors, non-success statuses, and
/// malformed payloads are logged and collapse to an empty result so one bad
/// name cannot abort a batch.
#[instrument(skip(client, config))]
pub async fn resolve_name(client: &Client, config: &Config, name: &str) -> Vec<PlayerMatch> {
    let url = build_search_url(&config.api_domain, name);

    match fetch::<SearchResponse>(client, &url).await {
        Ok(response) => {
            let matches = response.into_matches();
            info!("Search for '{}' returned {} match(es)", name, matches.len());
            matches
        }
        Err(e) => {
            warn!("Failed to search name '{}': {}", name, e);
            Vec::new()
        }
    }
}
