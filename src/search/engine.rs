use super::error::QueryError;
use super::types::{OrderBy, SearchBy, SearchRequest};
use super::validate::validate;
use crate::catalog::store::MovieSource;
use crate::catalog::types::Movie;

/// Value records are ordered by. Keys produced for one sort share a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    /// Absent titles sort before any present title.
    Title(Option<&'a str>),
    ReleaseTicks(i128),
}

/// Case-insensitive substring match of `search` against the selected field.
/// An absent field never matches.
pub fn matches(search_by: SearchBy, search: &str, movie: &Movie) -> bool {
    matches_lowered(search_by, &search.to_lowercase(), movie)
}

/// Same as `matches`, with `needle` already lowercased by the caller.
fn matches_lowered(search_by: SearchBy, needle: &str, movie: &Movie) -> bool {
    let field = match search_by {
        SearchBy::Title => movie.title.as_deref(),
        SearchBy::Genre => movie.genre.as_deref(),
    };

    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

pub fn sort_key(order_by: OrderBy, movie: &Movie) -> SortKey<'_> {
    match order_by {
        OrderBy::Title => SortKey::Title(movie.title.as_deref()),
        OrderBy::ReleaseDate => SortKey::ReleaseTicks(movie.release_ticks()),
    }
}

/// Validates `request`, then filters, orders and pages `movies`.
///
/// Returns the requested page, never an empty one.
pub fn search(movies: &[Movie], request: &SearchRequest) -> Result<Vec<Movie>, QueryError> {
    let page = validate(
        movies,
        request.number_of_results,
        request.page_number,
        request.search_by,
        &request.search,
    )?;

    let needle = request.search.to_lowercase();
    let mut hits: Vec<&Movie> = movies
        .iter()
        .filter(|movie| matches_lowered(request.search_by, &needle, movie))
        .collect();

    // Stable, so equal keys keep catalog order
    hits.sort_by(|a, b| sort_key(request.order_by, a).cmp(&sort_key(request.order_by, b)));

    tracing::debug!(
        "Search '{}' by {} ordered by {}: {} matches, page {} of size {}",
        request.search,
        request.search_by,
        request.order_by,
        hits.len(),
        page.number,
        page.size
    );

    let results: Vec<Movie> = hits
        .into_iter()
        .skip(page.offset())
        .take(page.size)
        .cloned()
        .collect();

    if results.is_empty() {
        return Err(QueryError::NoMoviesFound(request.search.clone()));
    }

    Ok(results)
}

/// Runs `request` against a snapshot fetched from `source`.
pub fn search_source(
    source: &dyn MovieSource,
    request: &SearchRequest,
) -> Result<Vec<Movie>, QueryError> {
    let movies = source.all_movies()?;
    search(&movies, request)
}
