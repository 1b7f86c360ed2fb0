//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::{JourneyPlanner, PlanError, RouteRequest};

use super::dto::*;
use super::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/metro-stations", get(list_stations))
        .route("/api/stations/search", get(search_stations))
        .route("/api/directions", post(plan_route))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The full station catalog, one entry per line a station is on.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResult>> {
    Json(
        state
            .network
            .stations()
            .iter()
            .map(StationResult::from_station)
            .collect(),
    )
}

/// Search station names.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let stations = state
        .network
        .search_names(&req.q, limit)
        .into_iter()
        .map(StationSearchResult::from_match)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Plan the fastest route between two named stations.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanRouteResponse>, AppError> {
    // Parse JSON manually so a malformed body is a 400 with our error shape
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Unparsable route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = RouteRequest::new(
        req.origin.as_deref().unwrap_or_default(),
        req.destination.as_deref().unwrap_or_default(),
    );

    let planner = JourneyPlanner::new(&state.network, &state.fares);
    let plan = planner.plan(&request)?;

    Ok(Json(PlanRouteResponse::from_plan(&plan)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::NoRoute(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::Internal(inner) => {
                error!(error = %inner, "Route computation failed");
                AppError::Internal {
                    message: "failed to calculate route".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, reason = %message, "Request failed");
        } else {
            warn!(%status, reason = %message, "Request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
