//! Database query modules.
//!
//! - movies: movie upsert, lookup by id or slug, and ranked listings

pub mod movies;
