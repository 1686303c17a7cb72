use crate::{
    columns_handler, map_fragment_handler, map_handler, markers_handler, observations_handler,
    routes, stations_handler,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use buoy_map_core::{parse, Column, Dataset, MalformedPolicy};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Loaded once at startup and shared read-only by every request
#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    pub remote_url: String,
    pub feed_path: String,
    pub dataset: Arc<Dataset>,
    /// Columns offered by the color and size selectors
    pub columns: Vec<Column>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::observations::observations_handler,
        routes::api::columns::columns_handler,
        routes::api::markers::markers_handler,
    ),
    components(
        schemas(
            routes::api::observations::ObservationView,
            routes::api::observations::ObservationsResponse,
            routes::api::observations::RejectedLineView,
            routes::api::columns::ColumnView,
            routes::api::markers::MarkerView,
            routes::api::markers::MarkersResponse,
        )
    ),
    tags(
        (name = "buoy map api", description = "tabular access to the loaded NDBC snapshot and the markers drawn from it")
    )
)]
struct ApiDoc;

pub fn build_app_state(
    remote_url: String,
    static_dir: String,
    feed_path: String,
    columns: Vec<Column>,
    policy: MalformedPolicy,
) -> Result<AppState, anyhow::Error> {
    let dataset =
        parse(&feed_path, policy).map_err(|e| anyhow!("error loading {}: {}", feed_path, e))?;

    let report = dataset.report();
    info!(
        "loaded {} observations from {} ({} lines, {} rejected)",
        dataset.len(),
        feed_path,
        report.lines_read,
        report.rejected.len()
    );
    if dataset.is_empty() {
        warn!("{} holds no observations, the map will be empty", feed_path);
    }

    Ok(AppState {
        static_dir,
        remote_url,
        feed_path,
        dataset: Arc::new(dataset),
        columns,
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let serve_static = ServeDir::new(&app_state.static_dir);
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(map_handler))
        .route("/stations", get(stations_handler))
        // HTMX fragment routes
        .route("/fragments/map", get(map_fragment_handler))
        // API routes
        .route("/api/observations", get(observations_handler))
        .route("/api/columns", get(columns_handler))
        .route("/api/markers", get(markers_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .nest_service("/static", serve_static)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_string();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
