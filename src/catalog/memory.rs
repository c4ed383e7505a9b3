//! In-memory movie store.
//!
//! Serves a fixed snapshot of movies, ranked the same way the SQLite store
//! ranks them. Used to preview a catalog from a JSON export without touching
//! the database, and as the store behind the HTTP tests.

use std::cmp::Ordering;
use std::path::Path;

use async_trait::async_trait;
use streamflix_common::{MovieId, RankedQuery, Result};
use streamflix_db::models::Movie;

use super::store::MovieStore;

/// [`MovieStore`] over an owned list of movies.
#[derive(Debug, Clone, Default)]
pub struct MemoryMovieStore {
    movies: Vec<Movie>,
}

impl MemoryMovieStore {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Load a JSON array of movie records.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let movies: Vec<Movie> = serde_json::from_str(&content)?;
        Ok(Self::new(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

fn compare(query: RankedQuery, a: &Movie, b: &Movie) -> Ordering {
    let primary = match query {
        RankedQuery::ByRating => b.vote_average.total_cmp(&a.vote_average),
        RankedQuery::ByRecency => b.created_at.cmp(&a.created_at),
        RankedQuery::ByPopularity => b.vote_count.cmp(&a.vote_count),
    };
    primary.then(a.id.cmp(&b.id))
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn fetch_top(&self, query: RankedQuery, limit: u32) -> Result<Vec<Movie>> {
        let mut ranked: Vec<&Movie> = self.movies.iter().collect();
        ranked.sort_by(|a, b| compare(query, a, b));

        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Movie>> {
        Ok(self
            .movies
            .iter()
            .filter(|m| m.slug.as_deref() == Some(slug))
            .min_by_key(|m| m.id)
            .cloned())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }
}
