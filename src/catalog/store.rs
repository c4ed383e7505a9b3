//! Movie store gateway.
//!
//! The catalog only ever asks the store for ranked slices and single-movie
//! lookups. [`MovieStore`] is that contract; [`SqliteMovieStore`] answers it
//! from the SQLite database, running each query on the blocking pool.

use async_trait::async_trait;
use rusqlite::Connection;
use streamflix_common::{Error, MovieId, RankedQuery, Result};
use streamflix_db::models::Movie;
use streamflix_db::pool::{get_conn, DbPool};
use streamflix_db::queries::movies;

/// Read access to the movie collection.
///
/// An empty result is a valid outcome for every query. Errors are reserved
/// for the store itself failing, and are never retried here.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Return at most `limit` movies ordered by `query`'s ranking.
    async fn fetch_top(&self, query: RankedQuery, limit: u32) -> Result<Vec<Movie>>;

    /// Look up a movie by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Movie>>;

    /// Look up a movie by numeric id.
    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>>;

    /// Return the landing-page slice for `query` (its fixed limit).
    async fn fetch_ranked(&self, query: RankedQuery) -> Result<Vec<Movie>> {
        self.fetch_top(query, query.limit()).await
    }
}

/// [`MovieStore`] backed by the SQLite connection pool.
#[derive(Clone)]
pub struct SqliteMovieStore {
    pool: DbPool,
}

impl SqliteMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = get_conn(&pool)?;
            f(&*conn)
        })
        .await
        .map_err(|e| Error::internal(format!("Store task failed: {}", e)))?
    }
}

#[async_trait]
impl MovieStore for SqliteMovieStore {
    async fn fetch_top(&self, query: RankedQuery, limit: u32) -> Result<Vec<Movie>> {
        let result = self
            .with_conn(move |conn| movies::list_ranked(conn, query, limit))
            .await;

        match &result {
            Ok(rows) => tracing::debug!(%query, limit, rows = rows.len(), "Fetched ranked slice"),
            Err(e) => tracing::warn!(%query, error = %e, "Ranked query failed"),
        }

        result
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Movie>> {
        let slug = slug.to_string();
        self.with_conn(move |conn| movies::get_movie_by_slug(conn, &slug))
            .await
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        self.with_conn(move |conn| movies::get_movie(conn, id)).await
    }
}
