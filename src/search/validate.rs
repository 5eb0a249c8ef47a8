use super::error::QueryError;
use super::types::{Page, SearchBy};
use crate::catalog::store::matching_genre;
use crate::catalog::types::Movie;

/// Checks paging input and, for genre searches, that the genre exists.
///
/// Checks run in a fixed order (number of results, page number, genre) and the
/// first failure is the only one reported.
pub fn validate(
    movies: &[Movie],
    number_of_results: i32,
    page_number: i32,
    search_by: SearchBy,
    search: &str,
) -> Result<Page, QueryError> {
    let size = positive(number_of_results)
        .ok_or(QueryError::InvalidNumberOfResults(number_of_results))?;
    let number = positive(page_number).ok_or(QueryError::InvalidPageNumber(page_number))?;

    if search_by == SearchBy::Genre && !matching_genre(movies, search) {
        return Err(QueryError::GenreNotFound(search.to_string()));
    }

    Ok(Page { size, number })
}

fn positive(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| *v > 0)
}
