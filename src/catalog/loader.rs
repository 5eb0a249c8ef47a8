use super::store::InMemoryCatalog;
use super::types::Movie;

use anyhow::{Context, Result};
use std::path::Path;

/// Reads a JSON array of movie records from `path` into an in-memory catalog.
pub async fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    let movies = parse_movies(&raw)
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;

    let untitled = movies.iter().filter(|m| m.title.is_none()).count();
    if untitled > 0 {
        tracing::warn!(
            "{} records have no title and will never match a title search",
            untitled
        );
    }

    tracing::info!("Loaded {} movies from {}", movies.len(), path.display());
    Ok(InMemoryCatalog::new(movies))
}

pub fn parse_movies(raw: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(raw)?;
    Ok(movies)
}
