use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemDetails, ItemId, Neighbor, PrincipalSummary};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct GroupQuery {
    pub category: String,
    pub origin: String,
}

#[derive(Debug, Deserialize)]
pub struct RankedGroupQuery {
    pub category: String,
    pub origin: String,
    pub k: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PrincipalQuery {
    pub name: String,
    pub k: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    pub title: String,
    pub k: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CatalogStatsResponse {
    pub items: usize,
    pub edges: usize,
    pub origins: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub category: String,
    pub origin: String,
    pub count: usize,
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct AllRecommendationsResponse {
    pub top_rated: Vec<Item>,
    pub graph_based: Vec<Item>,
    pub popular_principals: Vec<PrincipalSummary>,
}

/// Resolves a requested result count: absent means `default`, non-positive means none
fn resolve_k(k: Option<i64>, default: usize) -> usize {
    match k {
        Some(k) => usize::try_from(k).unwrap_or(0),
        None => default,
    }
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

fn item_id(path: Result<Path<u32>, PathRejection>) -> AppResult<ItemId> {
    path.map(|Path(id)| ItemId(id))
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Catalog size, graph size and known origins
pub async fn catalog_stats(State(state): State<AppState>) -> Json<CatalogStatsResponse> {
    let recommender = &state.recommender;
    Json(CatalogStatsResponse {
        items: recommender.catalog().len(),
        edges: recommender.graph().edge_count(),
        origins: recommender.catalog().origins(),
    })
}

/// Categories available for an origin
pub async fn origin_categories(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Json<Vec<String>> {
    Json(state.recommender.distinct_categories_for_origin(&origin))
}

/// Every item of a category within an origin
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<GroupQuery>, QueryRejection>,
) -> AppResult<Json<ItemListResponse>> {
    let GroupQuery { category, origin } = query_params(query)?;
    let items = state
        .recommender
        .query_by_category_and_origin(&category, &origin);

    Ok(Json(ItemListResponse {
        count: items.len(),
        category,
        origin,
        items,
    }))
}

/// Item drill-down: the item, its nearest neighbors and more from its principal
#[tracing::instrument(skip(state, path))]
pub async fn item_details(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<ItemDetails>> {
    let id = item_id(path)?;
    let config = &state.config;

    state
        .recommender
        .item_details(id, config.similar_top_k, config.principal_top_k)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Item {} does not exist", id)))
}

/// Direct neighbors of an item in the similarity graph
pub async fn item_neighbors(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<Vec<Neighbor>>> {
    let id = item_id(path)?;
    Ok(Json(state.recommender.neighbors_of(id)))
}

/// Highest-rated items of a category within an origin
pub async fn top_rated(
    State(state): State<AppState>,
    query: Result<Query<RankedGroupQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Item>>> {
    let params = query_params(query)?;
    let k = resolve_k(params.k, state.config.default_top_k);

    Ok(Json(state.recommender.top_rated_by_category_and_origin(
        &params.category,
        &params.origin,
        k,
    )))
}

/// Graph-based ranking of a category within an origin
pub async fn graph_based(
    State(state): State<AppState>,
    query: Result<Query<RankedGroupQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Item>>> {
    let params = query_params(query)?;
    let k = resolve_k(params.k, state.config.default_top_k);

    Ok(Json(state.recommender.top_k_similar_by_category_and_origin(
        &params.category,
        &params.origin,
        k,
    )))
}

/// Highest-rated items featuring a principal
pub async fn by_principal(
    State(state): State<AppState>,
    query: Result<Query<PrincipalQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Item>>> {
    let params = query_params(query)?;
    let k = resolve_k(params.k, state.config.default_top_k);

    Ok(Json(state.recommender.top_rated_by_principal(&params.name, k)))
}

/// Principals of a category within an origin, best average rating first
pub async fn popular_principals(
    State(state): State<AppState>,
    query: Result<Query<RankedGroupQuery>, QueryRejection>,
) -> AppResult<Json<Vec<PrincipalSummary>>> {
    let params = query_params(query)?;
    let k = resolve_k(params.k, state.config.popular_principals_top_k);

    Ok(Json(state.recommender.popular_principals(
        &params.category,
        &params.origin,
        k,
    )))
}

/// Items most similar to a title
pub async fn similar(
    State(state): State<AppState>,
    query: Result<Query<SimilarQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Item>>> {
    let params = query_params(query)?;
    let k = resolve_k(params.k, state.config.similar_top_k);

    Ok(Json(state.recommender.find_similar_by_title(&params.title, k)))
}

/// Top-rated, graph-based and popular-principal views of one category at once
pub async fn all_recommendations(
    State(state): State<AppState>,
    query: Result<Query<GroupQuery>, QueryRejection>,
) -> AppResult<Json<AllRecommendationsResponse>> {
    let GroupQuery { category, origin } = query_params(query)?;
    let recommender = &state.recommender;
    let config = &state.config;

    tracing::info!(category = %category, origin = %origin, "Building all recommendations");

    Ok(Json(AllRecommendationsResponse {
        top_rated: recommender.top_rated_by_category_and_origin(
            &category,
            &origin,
            config.default_top_k,
        ),
        graph_based: recommender.top_k_similar_by_category_and_origin(
            &category,
            &origin,
            config.default_top_k,
        ),
        popular_principals: recommender.popular_principals(
            &category,
            &origin,
            config.popular_principals_top_k,
        ),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_k() {
        assert_eq!(resolve_k(None, 5), 5);
        assert_eq!(resolve_k(Some(2), 5), 2);
        assert_eq!(resolve_k(Some(0), 5), 0);
        assert_eq!(resolve_k(Some(-3), 5), 0);
    }
}
