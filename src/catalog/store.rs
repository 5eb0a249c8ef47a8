use super::types::Movie;

use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Anything that can hand back the full set of movie records.
///
/// Implementations return a shared snapshot; callers filter, sort and page it
/// themselves, so no query pushdown is required.
pub trait MovieSource: Send + Sync {
    fn all_movies(&self) -> Result<Arc<[Movie]>>;
}

/// Shared handle installed into the router.
pub type SharedSource = Arc<dyn MovieSource>;

/// Read-only catalog holding every record in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    movies: Arc<[Movie]>,
}

impl InMemoryCatalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: movies.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn into_shared(self) -> SharedSource {
        Arc::new(self)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MovieSource for InMemoryCatalog {
    fn all_movies(&self) -> Result<Arc<[Movie]>> {
        Ok(self.movies.clone())
    }
}

/// Distinct genre tags across all records, in order of first appearance.
///
/// Re-derived from the records on every call.
pub fn genre_universe(movies: &[Movie]) -> Vec<String> {
    let mut seen = HashSet::new();
    movies
        .iter()
        .flat_map(|movie| movie.genre_tags())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}

/// True when `search` is a case-insensitive substring of at least one genre tag.
pub fn matching_genre(movies: &[Movie], search: &str) -> bool {
    let needle = search.to_lowercase();
    genre_universe(movies)
        .iter()
        .any(|genre| genre.to_lowercase().contains(&needle))
}
