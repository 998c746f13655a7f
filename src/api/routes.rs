use axum::{
    body::Body,
    http::{HeaderName, Method, Request},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::AppState;

/// HTTP header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/catalog/stats", get(handlers::catalog_stats))
        .route("/origins/:origin/categories", get(handlers::origin_categories))
        // Items
        .route("/items", get(handlers::list_items))
        .route("/items/:id", get(handlers::item_details))
        .route("/items/:id/neighbors", get(handlers::item_neighbors))
        // Recommendations
        .route("/recommendations/top-rated", get(handlers::top_rated))
        .route("/recommendations/graph", get(handlers::graph_based))
        .route("/recommendations/principal", get(handlers::by_principal))
        .route(
            "/recommendations/popular-principals",
            get(handlers::popular_principals),
        )
        .route("/recommendations/similar", get(handlers::similar))
        .route("/recommendations/all", get(handlers::all_recommendations))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
}

/// Creates a tracing span carrying the request ID assigned by `SetRequestIdLayer`
fn make_span_with_request_id(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
