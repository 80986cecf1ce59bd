//! Serde models for the ECF rating API responses and the pipeline's results

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_PLAYER_NAME;

/// One player record returned by the fuzzy name search.
///
/// The API is inconsistent about which fields it populates, so every field is
/// optional and the accessors below apply extraction rules in priority order.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PlayerMatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "ECF_code")]
    pub ecf_code: Option<String>,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
}

/// Walks an ordered rule list and returns the first non-empty field value.
fn first_non_empty<'a>(fields: &[&'a Option<String>]) -> Option<&'a str> {
    fields
        .iter()
        .find_map(|f| f.as_deref().map(str::trim).filter(|s| !s.is_empty()))
}

impl PlayerMatch {
    /// Best-effort display name: `name`, then `full_name`, then a sentinel.
    pub fn display_name(&self) -> &str {
        first_non_empty(&[&self.name, &self.full_name]).unwrap_or(UNKNOWN_PLAYER_NAME)
    }

    /// Best-effort player code: `code`, then `ECF_code`, then `ref`.
    /// Absent when no field carries a usable value.
    pub fn player_code(&self) -> Option<&str> {
        first_non_empty(&[&self.code, &self.ecf_code, &self.reference])
    }
}

/// The search endpoint answers with one of two top-level shapes: a bare list
/// of match objects, or an object carrying the list under a `players` key.
/// This adapter absorbs the ambiguity at one boundary so the rest of the
/// pipeline only ever sees a flat sequence.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Wrapped { players: Vec<PlayerMatch> },
    Bare(Vec<PlayerMatch>),
}

impl SearchResponse {
    /// Normalizes either response shape into a flat match sequence.
    pub fn into_matches(self) -> Vec<PlayerMatch> {
        match self {
            SearchResponse::Wrapped { players } => players,
            SearchResponse::Bare(matches) => matches,
        }
    }
}

/// The rating endpoint's response. Only `revised_rating` is consumed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RatingResponse {
    #[serde(default)]
    pub revised_rating: Option<i64>,
}

/// One row of the final result set.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RatedPlayer {
    pub name: String,
    pub rating: i64,
}

impl RatedPlayer {
    pub fn new(name: impl Into<String>, rating: i64) -> Self {
        RatedPlayer {
            name: name.into(),
            rating,
        }
    }
}
