//! Movie Search Module
//!
//! The query service: turns a search request into one page of matching movies.
//!
//! ## Pipeline
//! 1. **Validate**: Number of results and page number must be positive; a genre search
//!    must name a genre present in the catalog.
//! 2. **Filter**: Case-insensitive substring match on the title or genre.
//! 3. **Order**: Ascending by title or by release date.
//! 4. **Page**: Skip `number_of_results * (page_number - 1)`, take `number_of_results`.
//!
//! An empty page is reported as not found rather than returned.
//!
//! ## Submodules
//! - **`engine`**: Predicate and ordering dispatch plus the search pipeline.
//! - **`validate`**: The ordered input checks.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`error`**: The error taxonomy and its HTTP mapping.
//! - **`types`**: Selectors, requests and query-string DTOs.

pub mod engine;
pub mod error;
pub mod handlers;
pub mod types;
pub mod validate;
