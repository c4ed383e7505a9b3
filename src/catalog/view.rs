//! Presentation view models.
//!
//! A [`PageRenderer`] flattens a [`CatalogView`] into what a page actually
//! draws: formatted labels, resolved links, and an image for every slot.
//! Nothing here touches the store.

use serde::Serialize;
use streamflix_common::AssetKind;
use streamflix_db::models::Movie;
use utoipa::ToSchema;

use super::compose::{CatalogSection, CatalogView, SectionKind};
use super::links;
use super::media::{image_or_placeholder, ImageRef, MediaResolver};

/// Featured movie at the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HeroView {
    pub id: i64,
    /// Slug or id, as used in every link to this movie
    pub display_path: String,
    pub title: String,
    pub overview: String,
    /// Rating badge, one decimal place
    pub rating_display: String,
    pub release_date: String,
    /// "{runtime} min"; absent when the runtime is unknown
    pub runtime_display: Option<String>,
    /// Release date and runtime joined for a single meta line; absent when
    /// neither is known
    pub secondary_meta: Option<String>,
    pub watch_href: String,
    pub info_href: String,
    pub trailer_url: Option<String>,
    pub backdrop: ImageRef,
    pub poster: ImageRef,
}

/// Card inside a carousel.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CardView {
    pub id: i64,
    pub display_path: String,
    pub href: String,
    pub title: String,
    pub rating_display: String,
    pub secondary_meta: Option<String>,
    pub poster: ImageRef,
}

/// A rendered carousel.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SectionView {
    pub kind: SectionKind,
    pub label: String,
    pub view_all_href: String,
    pub cards: Vec<CardView>,
}

/// Notice shown instead of the carousels when there is nothing to browse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmptyStateView {
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub action_href: String,
}

impl Default for EmptyStateView {
    fn default() -> Self {
        Self {
            title: "No Movies Available".to_string(),
            message: "It looks like there are no movies in the database yet. \
                      Check back later or contact an administrator."
                .to_string(),
            action_label: "Admin Login".to_string(),
            action_href: "/admin/login".to_string(),
        }
    }
}

/// The landing page, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomePageView {
    pub hero: Option<HeroView>,
    /// Visible sections only, in render order
    pub sections: Vec<SectionView>,
    pub is_empty: bool,
    pub empty_state: Option<EmptyStateView>,
}

/// Full record for the movie detail page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovieDetailView {
    pub id: i64,
    pub display_path: String,
    pub title: String,
    pub overview: String,
    pub rating_display: String,
    pub vote_count: u32,
    pub release_date: String,
    pub runtime_display: Option<String>,
    pub genres: Vec<String>,
    pub tmdb_id: Option<i64>,
    pub trailer_url: Option<String>,
    pub watch_href: String,
    pub poster: ImageRef,
    pub backdrop: ImageRef,
}

/// Listing behind a "View All" link.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovieListView {
    /// Sort key the listing was ranked by
    pub sort: String,
    pub cards: Vec<CardView>,
}

/// `vote_average` with exactly one decimal place, halves rounded up.
///
/// Plain `{:.1}` rounds an exact tie such as 8.25 to even ("8.2"); badges
/// show "8.3".
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", (vote_average * 10.0).round() / 10.0)
}

/// "N min", or nothing for a missing or zero runtime.
pub fn format_runtime(runtime_minutes: Option<u32>) -> Option<String> {
    runtime_minutes
        .filter(|&minutes| minutes > 0)
        .map(|minutes| format!("{} min", minutes))
}

fn secondary_meta(movie: &Movie) -> Option<String> {
    let runtime = format_runtime(movie.runtime_minutes);
    let parts: Vec<&str> = [Some(movie.release_date.as_str()), runtime.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    (!parts.is_empty()).then(|| parts.join(" · "))
}

/// Plain-text rendering of the landing page for terminals.
///
/// Sections are listed even when the catalog counts as empty; the notice
/// follows them.
pub fn render_text(page: &HomePageView) -> String {
    let mut lines = Vec::new();

    if let Some(ref hero) = page.hero {
        lines.push(format!("Featured: {} [{}]", hero.title, hero.rating_display));
        if let Some(ref meta) = hero.secondary_meta {
            lines.push(format!("  {}", meta));
        }
        lines.push(format!("  Watch: {}", hero.watch_href));
        lines.push(format!("  Info:  {}", hero.info_href));
    }

    for section in &page.sections {
        lines.push(String::new());
        lines.push(format!("{} ({})", section.label, section.view_all_href));
        for (i, card) in section.cards.iter().enumerate() {
            lines.push(format!(
                "  {:>2}. {} [{}] {}",
                i + 1,
                card.title,
                card.rating_display,
                card.href
            ));
        }
    }

    if let Some(ref empty) = page.empty_state {
        lines.push(String::new());
        lines.push(empty.title.clone());
        lines.push(empty.message.clone());
    }

    lines.join("\n")
}

/// Builds view models, resolving artwork through a [`MediaResolver`].
pub struct PageRenderer<'a> {
    resolver: &'a dyn MediaResolver,
    placeholder_path: &'a str,
}

impl<'a> PageRenderer<'a> {
    pub fn new(resolver: &'a dyn MediaResolver, placeholder_path: &'a str) -> Self {
        Self {
            resolver,
            placeholder_path,
        }
    }

    fn image(&self, kind: AssetKind, path: Option<&str>) -> ImageRef {
        image_or_placeholder(self.resolver, kind, path, self.placeholder_path)
    }

    pub fn render_home(&self, view: &CatalogView) -> HomePageView {
        HomePageView {
            hero: view.hero.as_ref().map(|movie| self.hero(movie)),
            sections: view
                .visible_sections()
                .map(|section| self.section(section))
                .collect(),
            is_empty: view.is_empty,
            empty_state: view.is_empty.then(EmptyStateView::default),
        }
    }

    pub fn hero(&self, movie: &Movie) -> HeroView {
        HeroView {
            id: movie.id.get(),
            display_path: links::resolve_link(movie),
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            rating_display: format_rating(movie.vote_average),
            release_date: movie.release_date.clone(),
            runtime_display: format_runtime(movie.runtime_minutes),
            secondary_meta: secondary_meta(movie),
            watch_href: links::watch_path(movie),
            info_href: links::movie_path(movie),
            trailer_url: movie.trailer_url.clone(),
            backdrop: self.image(AssetKind::Backdrop, movie.backdrop_path.as_deref()),
            poster: self.image(AssetKind::Poster, movie.poster_path.as_deref()),
        }
    }

    pub fn card(&self, movie: &Movie) -> CardView {
        CardView {
            id: movie.id.get(),
            display_path: links::resolve_link(movie),
            href: links::movie_path(movie),
            title: movie.title.clone(),
            rating_display: format_rating(movie.vote_average),
            secondary_meta: secondary_meta(movie),
            poster: self.image(AssetKind::Poster, movie.poster_path.as_deref()),
        }
    }

    fn section(&self, section: &CatalogSection) -> SectionView {
        SectionView {
            kind: section.kind,
            label: section.kind.label().to_string(),
            view_all_href: section.kind.view_all_path(),
            cards: section.movies.iter().map(|m| self.card(m)).collect(),
        }
    }

    pub fn detail(&self, movie: &Movie) -> MovieDetailView {
        MovieDetailView {
            id: movie.id.get(),
            display_path: links::resolve_link(movie),
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            rating_display: format_rating(movie.vote_average),
            vote_count: movie.vote_count,
            release_date: movie.release_date.clone(),
            runtime_display: format_runtime(movie.runtime_minutes),
            genres: movie.genres.clone(),
            tmdb_id: movie.tmdb_id,
            trailer_url: movie.trailer_url.clone(),
            watch_href: links::watch_path(movie),
            poster: self.image(AssetKind::Poster, movie.poster_path.as_deref()),
            backdrop: self.image(AssetKind::Backdrop, movie.backdrop_path.as_deref()),
        }
    }
}
