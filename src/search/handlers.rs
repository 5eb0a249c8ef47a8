use super::engine::search_source;
use super::error::QueryError;
use super::types::{LegacyParams, SearchBy, SearchParams, SearchRequest};
use crate::catalog::store::SharedSource;
use crate::catalog::types::Movie;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub movies: usize,
}

/// `GET /api/movies/search`
pub async fn handle_search(
    Extension(source): Extension<SharedSource>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Movie>>, QueryError> {
    let request = SearchRequest::try_from(params)?;
    run(&source, request)
}

/// `GET /api/movies/SearchByTitle/:title`
pub async fn handle_search_by_title(
    Extension(source): Extension<SharedSource>,
    Path(title): Path<String>,
    Query(params): Query<LegacyParams>,
) -> Result<Json<Vec<Movie>>, QueryError> {
    let request = params.into_request(title, SearchBy::Title)?;
    run(&source, request)
}

/// `GET /api/movies/SearchByGenre/:genre`
pub async fn handle_search_by_genre(
    Extension(source): Extension<SharedSource>,
    Path(genre): Path<String>,
    Query(params): Query<LegacyParams>,
) -> Result<Json<Vec<Movie>>, QueryError> {
    let request = params.into_request(genre, SearchBy::Genre)?;
    run(&source, request)
}

pub async fn handle_health(
    Extension(source): Extension<SharedSource>,
) -> (StatusCode, Json<HealthResponse>) {
    match source.all_movies() {
        Ok(movies) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                movies: movies.len(),
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    movies: 0,
                }),
            )
        }
    }
}

fn run(source: &SharedSource, request: SearchRequest) -> Result<Json<Vec<Movie>>, QueryError> {
    let movies = search_source(source.as_ref(), &request)?;
    tracing::info!(
        "Served {} movies for '{}' (page {})",
        movies.len(),
        request.search,
        request.page_number
    );
    Ok(Json(movies))
}
