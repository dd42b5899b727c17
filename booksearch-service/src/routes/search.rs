use crate::error::AppError;
use crate::models::requests::SearchParams;
use crate::models::responses::BookResult;
use crate::services::query::build_query;
use crate::services::shaper::shape;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Json,
};
use tracing::{error, info};

pub const MISSING_TERMS: &str = "You must specify at least a title or an author.";

pub async fn search_books(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<BookResult>>, AppError> {
    info!("Search query: {:?}", params);

    if !params.has_terms() {
        return Err(AppError::InvalidRequest(MISSING_TERMS.to_string()));
    }

    // Read once; the same snapshot drives shaping even if the token expires
    // while the catalog call is in flight.
    let authenticated = state.tokens.is_authenticated(&headers);

    let query = build_query(params.title.as_deref(), params.author.as_deref());

    let items = state.catalog.fetch(&query).await.map_err(|e| {
        error!("Catalog lookup for '{}' failed: {}", query, e);
        AppError::Upstream(e)
    })?;

    let results = shape(items, authenticated);

    info!(
        "Returning {} results (authenticated: {})",
        results.len(),
        authenticated
    );

    Ok(Json(results))
}
