//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which opens a SQLite database in a temporary
//! directory and wires it into a full [`AppContext`].

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use streamflix::catalog::SqliteMovieStore;
use streamflix::config::Config;
use streamflix::server::{create_router, AppContext};
use streamflix_db::models::Movie;
use streamflix_db::pool::{get_conn, init_pool, DbPool};
use streamflix_db::queries::movies;
use tempfile::TempDir;
use tower::ServiceExt;

/// Test harness wrapping an [`AppContext`] backed by a temporary database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
    _dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.db");
        let db = init_pool(&path.to_string_lossy()).expect("failed to open database");
        let ctx = AppContext::new(config, Arc::new(SqliteMovieStore::new(db.clone())));

        Self { ctx, db, _dir: dir }
    }

    pub fn insert(&self, movie: &Movie) {
        let conn = get_conn(&self.db).unwrap();
        movies::upsert_movie(&conn, movie).unwrap();
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone(), None)
    }
}

/// A movie created `day` days after a fixed epoch, so recency is predictable.
pub fn movie(id: i64, title: &str, vote_average: f64, vote_count: u32, day: i64) -> Movie {
    Movie {
        vote_average,
        vote_count,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day),
        ..Movie::new(id, title)
    }
}

/// Issue a GET and return the status together with the parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
