//! Streamflix-DB: Movie store schema, migrations, and query operations
//!
//! This crate backs the catalog with SQLite using rusqlite and r2d2
//! connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use streamflix_common::RankedQuery;
//! use streamflix_db::pool::{get_conn, init_pool};
//! use streamflix_db::queries::movies;
//!
//! let pool = init_pool("/var/lib/streamflix/catalog.db").unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let top = movies::list_ranked(&conn, RankedQuery::ByRating, 5).unwrap();
//! println!("Top rated: {}", top.len());
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
