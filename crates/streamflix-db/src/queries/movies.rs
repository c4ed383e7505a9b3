//! Movie database queries.
//!
//! Upsert and lookup operations for movie records, plus the ranked listings
//! that feed the landing page and the "view all" pages.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{types::Type, Connection};
use streamflix_common::{Error, MovieId, RankedQuery, Result};

use crate::models::Movie;

const MOVIE_COLUMNS: &str = "id, slug, title, overview, poster_path, backdrop_path, release_date,
        vote_average, vote_count, runtime_minutes, tmdb_id, trailer_url, genres, created_at";

/// `ORDER BY` clause for a ranked query.
///
/// `id ASC` breaks ties so equal scores come back in a stable order.
fn order_clause(query: RankedQuery) -> &'static str {
    match query {
        RankedQuery::ByRating => "vote_average DESC, id ASC",
        RankedQuery::ByRecency => "created_at DESC, id ASC",
        RankedQuery::ByPopularity => "vote_count DESC, id ASC",
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Insert or update a movie.
///
/// If a movie with the same ID exists it is replaced, except for
/// `created_at`, which keeps its original insertion time.
///
/// # Returns
///
/// * `Ok(())` - If the operation succeeded
/// * `Err(Error)` - If the record is invalid or a database error occurs
pub fn upsert_movie(conn: &Connection, movie: &Movie) -> Result<()> {
    if movie.title.trim().is_empty() {
        return Err(Error::invalid_input(format!(
            "movie {} has an empty title",
            movie.id
        )));
    }

    let genres_json = serde_json::to_string(&movie.genres)
        .map_err(|e| Error::internal(e.to_string()))?;

    conn.execute(
        "INSERT INTO movies (
            id, slug, title, overview, poster_path, backdrop_path, release_date,
            vote_average, vote_count, runtime_minutes, tmdb_id, trailer_url, genres, created_at
         ) VALUES (
            :id, :slug, :title, :overview, :poster_path, :backdrop_path, :release_date,
            :vote_average, :vote_count, :runtime_minutes, :tmdb_id, :trailer_url, :genres, :created_at
         )
         ON CONFLICT(id) DO UPDATE SET
            slug = :slug,
            title = :title,
            overview = :overview,
            poster_path = :poster_path,
            backdrop_path = :backdrop_path,
            release_date = :release_date,
            vote_average = :vote_average,
            vote_count = :vote_count,
            runtime_minutes = :runtime_minutes,
            tmdb_id = :tmdb_id,
            trailer_url = :trailer_url,
            genres = :genres",
        rusqlite::named_params! {
            ":id": movie.id.get(),
            ":slug": movie.slug,
            ":title": movie.title,
            ":overview": movie.overview,
            ":poster_path": movie.poster_path,
            ":backdrop_path": movie.backdrop_path,
            ":release_date": movie.release_date,
            ":vote_average": movie.vote_average,
            ":vote_count": movie.vote_count,
            ":runtime_minutes": movie.runtime_minutes,
            ":tmdb_id": movie.tmdb_id,
            ":trailer_url": movie.trailer_url,
            ":genres": genres_json,
            ":created_at": format_timestamp(&movie.created_at),
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(())
}

/// Parse a movie from a row selected with [`MOVIE_COLUMNS`].
fn parse_movie_row(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
    let genres_json: String = row.get(12)?;
    let genres: Vec<String> = serde_json::from_str(&genres_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(12, Type::Text, Box::new(e)))?;
    let created_at: String = row.get(13)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(13, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(Movie {
        id: MovieId::new(row.get(0)?),
        slug: row.get(1)?,
        title: row.get(2)?,
        overview: row.get(3)?,
        poster_path: row.get(4)?,
        backdrop_path: row.get(5)?,
        release_date: row.get(6)?,
        vote_average: row.get(7)?,
        vote_count: row.get(8)?,
        runtime_minutes: row.get(9)?,
        tmdb_id: row.get(10)?,
        trailer_url: row.get(11)?,
        genres,
        created_at,
    })
}

fn query_one(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Option<Movie>> {
    match conn.query_row(sql, params, parse_movie_row) {
        Ok(movie) => Ok(Some(movie)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get a movie by ID.
///
/// # Returns
///
/// * `Ok(Some(Movie))` - The movie if found
/// * `Ok(None)` - If the movie does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_movie(conn: &Connection, id: MovieId) -> Result<Option<Movie>> {
    query_one(
        conn,
        &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = :id"),
        rusqlite::named_params! { ":id": id.get() },
    )
}

/// Get a movie by slug.
///
/// Slugs are not unique at the schema level; the lowest id wins.
pub fn get_movie_by_slug(conn: &Connection, slug: &str) -> Result<Option<Movie>> {
    query_one(
        conn,
        &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE slug = :slug ORDER BY id ASC LIMIT 1"),
        rusqlite::named_params! { ":slug": slug },
    )
}

/// List movies ordered by a ranked query, at most `limit` of them.
///
/// An empty table yields an empty list, never an error.
pub fn list_ranked(conn: &Connection, query: RankedQuery, limit: u32) -> Result<Vec<Movie>> {
    let sql = format!(
        "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY {} LIMIT :limit",
        order_clause(query)
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| Error::database(e.to_string()))?;

    let movies = stmt
        .query_map(rusqlite::named_params! { ":limit": limit }, parse_movie_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(movies)
}

/// Count all movies in the catalog.
pub fn count_movies(conn: &Connection) -> Result<u32> {
    conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
