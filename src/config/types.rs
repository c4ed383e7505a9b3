use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built front-end to serve alongside the API (SPA fallback to index.html)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite file. Defaults to `streamflix.db` next to the config file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Image host settings used to turn asset paths into URLs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Base URL of the image CDN, without a trailing size segment
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Size segment for posters (e.g. "w500")
    #[serde(default = "default_poster_size")]
    pub poster_size: String,

    /// Size segment for backdrops (e.g. "original")
    #[serde(default = "default_backdrop_size")]
    pub backdrop_size: String,

    /// Path of the placeholder image served when a movie has no art
    #[serde(default = "default_placeholder_path")]
    pub placeholder_path: String,
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_poster_size() -> String {
    "w500".to_string()
}

fn default_backdrop_size() -> String {
    "original".to_string()
}

fn default_placeholder_path() -> String {
    "/placeholder.svg".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
            poster_size: default_poster_size(),
            backdrop_size: default_backdrop_size(),
            placeholder_path: default_placeholder_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Number of movies returned by a "view all" listing
    #[serde(default = "default_browse_limit")]
    pub browse_limit: u32,
}

fn default_browse_limit() -> u32 {
    48
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            browse_limit: default_browse_limit(),
        }
    }
}
