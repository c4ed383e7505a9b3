//! OpenAPI documentation and Swagger UI integration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::AppContext;

/// OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "StreamFlix Catalog API",
        version = "0.1.0",
        description = "Landing page composition and movie lookup for the StreamFlix catalog",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "/", description = "Default server")
    ),
    paths(
        super::routes_catalog::get_home,
        super::routes_catalog::list_movies,
        super::routes_catalog::get_movie,
    ),
    components(
        schemas(
            crate::catalog::view::HomePageView,
            crate::catalog::view::HeroView,
            crate::catalog::view::SectionView,
            crate::catalog::view::CardView,
            crate::catalog::view::EmptyStateView,
            crate::catalog::view::MovieDetailView,
            crate::catalog::view::MovieListView,
            crate::catalog::media::ImageRef,
            crate::catalog::compose::SectionKind,
        )
    ),
    tags(
        (name = "catalog", description = "Landing page and movie endpoints"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` and the raw document at `/openapi.json`.
pub fn openapi_routes() -> Router<AppContext> {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/home", "/api/movies", "/api/movies/{segment}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
