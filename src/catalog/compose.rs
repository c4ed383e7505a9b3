//! Landing page composition.
//!
//! Turns the three ranked slices into the page structure: a hero, three
//! sections in fixed order, and the empty-catalog flag.
//!
//! Rules:
//! - The hero is the first movie of the rating slice. Movies with equal
//!   `vote_average` are taken in whatever order the store returned them; no
//!   secondary sort happens here.
//! - "Top Rated" is the rating slice minus the hero. With one rated movie or
//!   none it is empty and is not rendered.
//! - "Recently Added" and "Popular Movies" are the recency and popularity
//!   slices as given. A movie may appear in both.
//! - The catalog counts as empty only when the recency and popularity slices
//!   are both empty. The rating slice does not take part in that decision.

use serde::Serialize;
use streamflix_common::{RankedQuery, Result, SortKey};
use streamflix_db::models::Movie;
use utoipa::ToSchema;

use super::links;
use super::store::MovieStore;

/// The carousels of the landing page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Recent,
    Popular,
    TopRated,
}

impl SectionKind {
    /// Fixed render order.
    pub const ORDER: [SectionKind; 3] = [Self::Recent, Self::Popular, Self::TopRated];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Recent => "Recently Added",
            Self::Popular => "Popular Movies",
            Self::TopRated => "Top Rated",
        }
    }

    /// Ranking that feeds this section.
    pub const fn source(self) -> RankedQuery {
        match self {
            Self::Recent => RankedQuery::ByRecency,
            Self::Popular => RankedQuery::ByPopularity,
            Self::TopRated => RankedQuery::ByRating,
        }
    }

    pub const fn sort_key(self) -> SortKey {
        self.source().sort_key()
    }

    /// Target of the section's "View All" link.
    pub fn view_all_path(self) -> String {
        links::view_all_path(self.sort_key())
    }
}

/// One carousel: its kind and the movies it shows, in ranking order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub kind: SectionKind,
    pub movies: Vec<Movie>,
}

impl CatalogSection {
    /// Sections without movies are not rendered at all.
    pub fn is_visible(&self) -> bool {
        !self.movies.is_empty()
    }
}

/// The three slices the landing page is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedSlices {
    /// Top by `vote_average`
    pub featured: Vec<Movie>,
    /// Top by `created_at`
    pub recent: Vec<Movie>,
    /// Top by `vote_count`
    pub popular: Vec<Movie>,
}

/// Composed landing page, before any presentation concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub hero: Option<Movie>,
    /// Always exactly three sections, in [`SectionKind::ORDER`].
    pub sections: Vec<CatalogSection>,
    pub is_empty: bool,
}

impl CatalogView {
    pub fn section(&self, kind: SectionKind) -> Option<&CatalogSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Sections that have something to show, in render order.
    pub fn visible_sections(&self) -> impl Iterator<Item = &CatalogSection> {
        self.sections.iter().filter(|s| s.is_visible())
    }
}

fn capped(mut movies: Vec<Movie>, query: RankedQuery) -> Vec<Movie> {
    movies.truncate(query.limit() as usize);
    movies
}

/// Compose the landing page from the three ranked slices.
pub fn compose(slices: RankedSlices) -> CatalogView {
    let RankedSlices {
        featured,
        recent,
        popular,
    } = slices;

    let mut featured = capped(featured, RankedQuery::ByRating).into_iter();
    let hero = featured.next();
    let top_rated: Vec<Movie> = featured.collect();

    let recent = capped(recent, RankedQuery::ByRecency);
    let popular = capped(popular, RankedQuery::ByPopularity);

    let is_empty = recent.is_empty() && popular.is_empty();

    let sections = vec![
        CatalogSection {
            kind: SectionKind::Recent,
            movies: recent,
        },
        CatalogSection {
            kind: SectionKind::Popular,
            movies: popular,
        },
        CatalogSection {
            kind: SectionKind::TopRated,
            movies: top_rated,
        },
    ];

    CatalogView {
        hero,
        sections,
        is_empty,
    }
}

/// Fetch the three slices concurrently and compose them.
///
/// All three queries must succeed; the first failure is returned and nothing
/// is composed from the others.
#[tracing::instrument(skip(store))]
pub async fn load_catalog(store: &dyn MovieStore) -> Result<CatalogView> {
    let (featured, recent, popular) = tokio::try_join!(
        store.fetch_ranked(RankedQuery::ByRating),
        store.fetch_ranked(RankedQuery::ByRecency),
        store.fetch_ranked(RankedQuery::ByPopularity),
    )?;

    let view = compose(RankedSlices {
        featured,
        recent,
        popular,
    });

    tracing::debug!(
        hero = view.hero.as_ref().map(|m| m.id.get()),
        sections = view.visible_sections().count(),
        is_empty = view.is_empty,
        "Composed catalog"
    );

    Ok(view)
}
