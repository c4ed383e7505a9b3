//! Navigable identifiers for movies.
//!
//! Every link the landing page emits (hero watch/info buttons and carousel
//! cards) is built from the same path segment: the slug when there is one,
//! otherwise the numeric id. URL escaping is left to whoever renders the link.

use streamflix_common::{MovieId, Result, SortKey};
use streamflix_db::models::Movie;

use super::store::MovieStore;

/// Canonical path segment for a movie: its slug if non-empty, else its id.
pub fn resolve_link(movie: &Movie) -> String {
    match movie.slug.as_deref() {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => movie.id.to_string(),
    }
}

/// `/watch/{segment}`
pub fn watch_path(movie: &Movie) -> String {
    format!("/watch/{}", resolve_link(movie))
}

/// `/movie/{segment}`
pub fn movie_path(movie: &Movie) -> String {
    format!("/movie/{}", resolve_link(movie))
}

/// `/movies?sort={key}`
pub fn view_all_path(sort: SortKey) -> String {
    format!("/movies?sort={}", sort)
}

/// Resolve a path segment back to a movie.
///
/// Slugs are tried first; a segment that matches no slug but parses as an
/// integer is then looked up by id.
pub async fn find_by_segment(store: &dyn MovieStore, segment: &str) -> Result<Option<Movie>> {
    if segment.is_empty() {
        return Ok(None);
    }

    if let Some(movie) = store.find_by_slug(segment).await? {
        return Ok(Some(movie));
    }

    match segment.parse::<MovieId>() {
        Ok(id) => store.find_by_id(id).await,
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::MemoryMovieStore;

    fn movie(id: i64, slug: Option<&str>) -> Movie {
        Movie {
            slug: slug.map(str::to_string),
            ..Movie::new(id, format!("Movie {id}"))
        }
    }

    #[test]
    fn slug_wins_when_present() {
        assert_eq!(resolve_link(&movie(42, Some("the-matrix"))), "the-matrix");
    }

    #[test]
    fn id_used_when_slug_absent() {
        assert_eq!(resolve_link(&movie(7, None)), "7");
    }

    #[test]
    fn id_used_when_slug_empty() {
        assert_eq!(resolve_link(&movie(7, Some(""))), "7");
    }

    #[test]
    fn route_helpers_share_the_segment() {
        let m = movie(42, Some("the-matrix"));
        assert_eq!(watch_path(&m), "/watch/the-matrix");
        assert_eq!(movie_path(&m), "/movie/the-matrix");

        let m = movie(7, None);
        assert_eq!(watch_path(&m), "/watch/7");
        assert_eq!(movie_path(&m), "/movie/7");
    }

    #[test]
    fn view_all_paths() {
        assert_eq!(view_all_path(SortKey::Recent), "/movies?sort=recent");
        assert_eq!(view_all_path(SortKey::Popular), "/movies?sort=popular");
        assert_eq!(view_all_path(SortKey::Rating), "/movies?sort=rating");
    }

    #[tokio::test]
    async fn find_by_segment_prefers_slug() {
        // A movie whose slug looks like another movie's id
        let store = MemoryMovieStore::new(vec![movie(1, Some("2")), movie(2, None)]);

        let found = find_by_segment(&store, "2").await.unwrap().unwrap();
        assert_eq!(found.id, MovieId::new(1));
    }

    #[tokio::test]
    async fn find_by_segment_falls_back_to_id() {
        let store = MemoryMovieStore::new(vec![movie(7, None), movie(42, Some("the-matrix"))]);

        let found = find_by_segment(&store, "7").await.unwrap().unwrap();
        assert_eq!(found.id, MovieId::new(7));

        // Movies with a slug stay reachable by id
        let found = find_by_segment(&store, "42").await.unwrap().unwrap();
        assert_eq!(found.id, MovieId::new(42));

        assert!(find_by_segment(&store, "missing").await.unwrap().is_none());
        assert!(find_by_segment(&store, "").await.unwrap().is_none());
    }
}
