//! Streamflix-Common: Shared types, identifiers, and error handling.
//!
//! This crate provides functionality shared by the store and the catalog:
//!
//! - **Typed IDs**: [`MovieId`], the stable numeric identity of a movie
//! - **Core Types**: ranked catalog queries, sort keys, and asset kinds
//! - **Error Handling**: Common error type and result alias
//!
//! # Examples
//!
//! ```
//! use streamflix_common::{Error, MovieId, RankedQuery, Result, SortKey};
//!
//! let id = MovieId::new(42);
//! assert_eq!(id.to_string(), "42");
//!
//! assert_eq!(RankedQuery::ByRating.limit(), 5);
//! assert_eq!(RankedQuery::from(SortKey::Popular), RankedQuery::ByPopularity);
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("movie"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
