//! Movie Catalog Module
//!
//! The data access layer: owns the movie records and derives the genre universe.
//!
//! ## Core Concepts
//! - **Records**: Keyless, read-only `Movie` entries loaded once at startup.
//! - **Source**: `MovieSource` hands out a shared snapshot of every record; the query
//!   service does all filtering, ordering and paging on top of it.
//! - **Genre universe**: Distinct comma-split genre tags, recomputed on each request.

pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
