//! Catalog API routes.
//!
//! The landing page, the "View All" listings behind each section, and the
//! movie detail lookup.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use streamflix_common::{Error, RankedQuery, SortKey};
use utoipa::IntoParams;

use super::error::AppError;
use super::AppContext;
use crate::catalog::view::{HomePageView, MovieDetailView, MovieListView, PageRenderer};
use crate::catalog::{find_by_segment, load_catalog};

/// Create catalog routes.
pub fn catalog_routes() -> Router<AppContext> {
    Router::new()
        .route("/home", get(get_home))
        .route("/movies", get(list_movies))
        .route("/movies/:segment", get(get_movie))
}

/// Query parameters for the listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// One of `recent`, `popular`, `rating`. Defaults to `recent`.
    pub sort: Option<String>,
}

fn renderer(ctx: &AppContext) -> PageRenderer<'_> {
    PageRenderer::new(ctx.images.as_ref(), &ctx.config.media.placeholder_path)
}

/// Compose the landing page.
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "catalog",
    responses(
        (status = 200, description = "Landing page", body = HomePageView),
        (status = 500, description = "Movie store failure")
    )
)]
pub async fn get_home(State(ctx): State<AppContext>) -> Result<Json<HomePageView>, AppError> {
    let catalog = load_catalog(ctx.store.as_ref()).await?;
    Ok(Json(renderer(&ctx).render_home(&catalog)))
}

/// List movies ranked by one sort key.
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "catalog",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Ranked listing", body = MovieListView),
        (status = 400, description = "Unknown sort key"),
        (status = 500, description = "Movie store failure")
    )
)]
pub async fn list_movies(
    State(ctx): State<AppContext>,
    Query(params): Query<ListMoviesQuery>,
) -> Result<Json<MovieListView>, AppError> {
    let sort = match params.sort.as_deref() {
        None | Some("") => SortKey::Recent,
        Some(raw) => raw.parse::<SortKey>().map_err(Error::invalid_input)?,
    };

    let movies = ctx
        .store
        .fetch_top(RankedQuery::from(sort), ctx.config.catalog.browse_limit)
        .await?;

    let renderer = renderer(&ctx);
    Ok(Json(MovieListView {
        sort: sort.to_string(),
        cards: movies.iter().map(|m| renderer.card(m)).collect(),
    }))
}

/// Look up a movie by slug, or by id when no slug matches.
#[utoipa::path(
    get,
    path = "/api/movies/{segment}",
    tag = "catalog",
    params(
        ("segment" = String, Path, description = "Movie slug or numeric id")
    ),
    responses(
        (status = 200, description = "Movie details", body = MovieDetailView),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Movie store failure")
    )
)]
pub async fn get_movie(
    State(ctx): State<AppContext>,
    Path(segment): Path<String>,
) -> Result<Json<MovieDetailView>, AppError> {
    let movie = find_by_segment(ctx.store.as_ref(), &segment)
        .await?
        .ok_or_else(|| Error::not_found(format!("movie '{}'", segment)))?;

    Ok(Json(renderer(&ctx).detail(&movie)))
}
