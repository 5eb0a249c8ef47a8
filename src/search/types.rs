use super::error::QueryError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_NUMBER_OF_RESULTS: i32 = 10;
pub const DEFAULT_PAGE_NUMBER: i32 = 1;

/// Field the search text is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBy {
    #[default]
    Title,
    Genre,
}

/// Field the matching records are ordered by. Always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Title,
    ReleaseDate,
}

impl FromStr for SearchBy {
    type Err = QueryError;

    /// Case-insensitive name or numeric ordinal.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" | "0" => Ok(SearchBy::Title),
            "genre" | "1" => Ok(SearchBy::Genre),
            _ => Err(QueryError::Unsupported {
                selector: "searchBy",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for OrderBy {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" | "0" => Ok(OrderBy::Title),
            "releasedate" | "release_date" | "1" => Ok(OrderBy::ReleaseDate),
            _ => Err(QueryError::Unsupported {
                selector: "orderBy",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBy::Title => write!(f, "Title"),
            SearchBy::Genre => write!(f, "Genre"),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBy::Title => write!(f, "Title"),
            OrderBy::ReleaseDate => write!(f, "ReleaseDate"),
        }
    }
}

/// A fully typed search, built per call and dropped after the response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub search: String,
    pub search_by: SearchBy,
    pub number_of_results: i32,
    pub page_number: i32,
    pub order_by: OrderBy,
}

impl SearchRequest {
    /// Title search with the default paging and ordering.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            search_by: SearchBy::default(),
            number_of_results: DEFAULT_NUMBER_OF_RESULTS,
            page_number: DEFAULT_PAGE_NUMBER,
            order_by: OrderBy::default(),
        }
    }

    pub fn search_by(mut self, search_by: SearchBy) -> Self {
        self.search_by = search_by;
        self
    }

    pub fn page(mut self, number_of_results: i32, page_number: i32) -> Self {
        self.number_of_results = number_of_results;
        self.page_number = page_number;
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }
}

/// Page bounds that passed validation; both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub size: usize,
    pub number: usize,
}

impl Page {
    /// Records to skip before this page starts.
    pub fn offset(&self) -> usize {
        self.size.saturating_mul(self.number - 1)
    }
}

/// Query string of `GET /api/movies/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub search: String,
    pub search_by: Option<String>,
    pub number_of_results: Option<i32>,
    pub page_number: Option<i32>,
    pub order_by: Option<String>,
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = QueryError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let search_by = params
            .search_by
            .as_deref()
            .map(SearchBy::from_str)
            .transpose()?
            .unwrap_or_default();
        let order_by = params
            .order_by
            .as_deref()
            .map(OrderBy::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(SearchRequest {
            search: params.search,
            search_by,
            number_of_results: params.number_of_results.unwrap_or(DEFAULT_NUMBER_OF_RESULTS),
            page_number: params.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            order_by,
        })
    }
}

/// Query string of the path-based `SearchByTitle` / `SearchByGenre` routes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyParams {
    pub number_of_results: Option<i32>,
    pub page_number: Option<i32>,
    pub sort_by: Option<String>,
}

impl LegacyParams {
    pub fn into_request(
        self,
        search: String,
        search_by: SearchBy,
    ) -> Result<SearchRequest, QueryError> {
        let order_by = self
            .sort_by
            .as_deref()
            .map(OrderBy::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(SearchRequest::new(search)
            .search_by(search_by)
            .page(
                self.number_of_results.unwrap_or(DEFAULT_NUMBER_OF_RESULTS),
                self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            )
            .order_by(order_by))
    }
}
