//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the library
//! modules for the actual work.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use tracing::warn;

use super::dto::{
    HealthResponse, ObjectsQuery, SetTargetRequest, VisibleQuery, WeatherResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::astro::{visible_objects, ObserverContext, VisibilityResult};
use crate::catalog;
use crate::telescope::{ConfigUpdate, TelescopeState};
use crate::weather;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Liveness check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/weather
///
/// Proxy the upstream weather feed. Always returns the `{ok, reading|error}`
/// envelope; an upstream failure maps to 502 with `ok: false`.
pub async fn get_weather(
    State(state): State<AppState>,
) -> (StatusCode, Json<WeatherResponse>) {
    match weather::fetch_current(&state.weather_client, &state.weather_url).await {
        Ok(reading) => (StatusCode::OK, Json(WeatherResponse::success(reading))),
        Err(e) => {
            warn!(error = %e, "weather fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(WeatherResponse::failure(e.to_string())),
            )
        }
    }
}

/// GET /api/objects?q=<text>
///
/// Full catalog, or entries whose id/name/type contain `q`.
pub async fn list_objects(Query(query): Query<ObjectsQuery>) -> Json<Vec<catalog::CelestialObject>> {
    let objects = match query.q.as_deref() {
        Some(q) if !q.is_empty() => catalog::search(q).into_iter().cloned().collect(),
        _ => catalog::all().to_vec(),
    };
    Json(objects)
}

/// GET /api/objects/visible?lat=&lon=&time=&minAlt=
///
/// Core entry point: build an observer context from the query (falling back
/// to the configured site, the current time, and the default threshold) and
/// return the catalog entries above the minimum altitude.
pub async fn visible_objects_handler(
    State(state): State<AppState>,
    Query(query): Query<VisibleQuery>,
) -> HandlerResult<Vec<VisibilityResult>> {
    let timestamp = match query.time.as_deref() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| AppError::BadRequest(format!("invalid time '{raw}': {e}")))?,
        None => Utc::now(),
    };

    let ctx = ObserverContext::new(
        query.lat.unwrap_or(state.site.latitude_deg),
        query.lon.unwrap_or(state.site.longitude_deg),
        timestamp,
    )
    .with_min_altitude(query.min_alt.unwrap_or(state.site.min_altitude_deg));

    Ok(Json(visible_objects(catalog::all(), &ctx)))
}

/// GET /api/telescope/status
///
/// Snapshot of the telescope state, tracking flag included.
pub async fn telescope_status(State(state): State<AppState>) -> Json<TelescopeState> {
    Json(state.telescope.read().clone())
}

/// POST /api/telescope/config
///
/// Partial update of the imaging configuration; returns the updated snapshot.
pub async fn update_telescope_config(
    State(state): State<AppState>,
    Json(update): Json<ConfigUpdate>,
) -> Json<TelescopeState> {
    let mut telescope = state.telescope.write();
    telescope.apply_config(update);
    Json(telescope.clone())
}

/// POST /api/telescope/target
///
/// Look up the catalog entry, replace the telescope's pointing target, and
/// re-enable tracking. 404 when the id is unknown.
pub async fn set_telescope_target(
    State(state): State<AppState>,
    Json(request): Json<SetTargetRequest>,
) -> HandlerResult<TelescopeState> {
    let object = catalog::find_by_id(&request.id)
        .ok_or_else(|| AppError::NotFound(format!("unknown catalog id '{}'", request.id)))?;

    let mut telescope = state.telescope.write();
    telescope.point_at(object);
    Ok(Json(telescope.clone()))
}
