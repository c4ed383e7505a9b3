//! Rust models matching the database schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use streamflix_common::MovieId;

/// A movie record as stored in the catalog.
///
/// Asset paths are opaque references understood by the image host, not URLs.
/// `created_at` is assigned at insertion and is the recency ordering key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default, alias = "runtime")]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub tmdb_id: Option<i64>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Movie {
    /// Build a movie with only the required fields set.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: MovieId::new(id),
            slug: None,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            runtime_minutes: None,
            tmdb_id: None,
            trailer_url: None,
            genres: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
