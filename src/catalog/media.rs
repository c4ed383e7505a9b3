//! Artwork URL resolution.
//!
//! Movies carry opaque asset paths (e.g. `/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg`)
//! that only the image host understands. A [`MediaResolver`] turns them into
//! absolute URLs; [`image_or_placeholder`] guarantees the slot is never blank
//! by substituting a fixed-size placeholder when no URL can be produced.

use serde::Serialize;
use streamflix_common::AssetKind;
use utoipa::ToSchema;

use crate::config::MediaConfig;

/// Maps an asset path to a fetchable URL.
pub trait MediaResolver: Send + Sync {
    /// Absolute URL for `path`, or `None` when there is no asset to show.
    fn resolve_image(&self, kind: AssetKind, path: Option<&str>) -> Option<String>;
}

/// Resolver for TMDB-style image hosts: `{base}/{size}{path}`.
#[derive(Debug, Clone)]
pub struct TmdbImageResolver {
    base_url: String,
    poster_size: String,
    backdrop_size: String,
}

impl TmdbImageResolver {
    pub fn new(
        base_url: impl Into<String>,
        poster_size: impl Into<String>,
        backdrop_size: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            poster_size: poster_size.into(),
            backdrop_size: backdrop_size.into(),
        }
    }

    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(
            &config.image_base_url,
            &config.poster_size,
            &config.backdrop_size,
        )
    }
}

impl MediaResolver for TmdbImageResolver {
    fn resolve_image(&self, kind: AssetKind, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;

        // Already absolute; some imports store full URLs
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }

        let size = match kind {
            AssetKind::Poster => &self.poster_size,
            AssetKind::Backdrop => &self.backdrop_size,
        };
        let path = path.trim_start_matches('/');

        Some(format!("{}/{}/{}", self.base_url, size, path))
    }
}

/// Image slot in the view model: a real URL, or the placeholder for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageRef {
    /// Artwork served by the image host.
    Remote {
        /// Absolute image URL
        url: String,
    },
    /// Fixed-size stand-in used when a movie has no artwork.
    Placeholder {
        /// Placeholder URL carrying its size tag
        url: String,
        width: u32,
        height: u32,
    },
}

impl ImageRef {
    /// URL to load, whichever variant this is.
    pub fn url(&self) -> &str {
        match self {
            Self::Remote { url } | Self::Placeholder { url, .. } => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Placeholder for `kind`, e.g. `/placeholder.svg?height=450&width=300`.
pub fn placeholder(kind: AssetKind, placeholder_path: &str) -> ImageRef {
    let (width, height) = kind.placeholder_size();
    ImageRef::Placeholder {
        url: format!("{}?height={}&width={}", placeholder_path, height, width),
        width,
        height,
    }
}

/// Resolve `path`, falling back to the placeholder for `kind`.
pub fn image_or_placeholder(
    resolver: &dyn MediaResolver,
    kind: AssetKind,
    path: Option<&str>,
    placeholder_path: &str,
) -> ImageRef {
    match resolver.resolve_image(kind, path) {
        Some(url) => ImageRef::Remote { url },
        None => placeholder(kind, placeholder_path),
    }
}
