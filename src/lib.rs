//! StreamFlix - Movie catalog landing page service
//!
//! This library crate exposes the catalog and server for integration testing.

pub mod catalog;
pub mod config;
pub mod server;
