//! Catalog composition.
//!
//! Builds the landing page from three ranked slices of the movie store:
//!
//! - [`store`]: the store contract and its SQLite implementation
//! - [`compose`]: hero selection, section assembly and empty detection
//! - [`links`]: slug-or-id path segments
//! - [`media`]: artwork URLs with fixed-size placeholders
//! - [`view`]: presentation view models

pub mod compose;
pub mod links;
pub mod media;
pub mod memory;
pub mod store;
pub mod view;

pub use compose::{compose, load_catalog, CatalogSection, CatalogView, RankedSlices, SectionKind};
pub use links::{find_by_segment, resolve_link};
pub use media::{ImageRef, MediaResolver, TmdbImageResolver};
pub use memory::MemoryMovieStore;
pub use store::{MovieStore, SqliteMovieStore};
pub use view::{HomePageView, PageRenderer};
