//! Movie Search API Library
//!
//! A read-only HTTP query service over a flat dataset of movies.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Modules
//! - **`catalog`**: The data access layer. Loads movie records, hands out read-only
//!   snapshots and derives the genre universe.
//! - **`search`**: The query service. Validates requests, then filters, orders and
//!   pages the catalog.
//! - **`server`**: The Axum router and HTTP listener.
//! - **`config`**: Command-line and environment settings.

pub mod catalog;
pub mod config;
pub mod search;
pub mod server;
