use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::outcome::{ForecastOutcome, ImageAnalysis};
use super::{RiskScorer, WeatherSnapshot};
use crate::error::AppError;
use crate::observations::{location_label, CurrentConditions, CurrentWeatherResponse, LocationQuery};

struct ForecastRouteState {
    scorer: RiskScorer,
    default_location: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessRequest {
    #[serde(default)]
    snapshot: WeatherSnapshot,
    #[serde(default)]
    location_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionsRequest {
    payload: serde_json::Value,
    #[serde(default)]
    location_name: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Body returned by every forecast endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<CurrentConditions>,
    pub outcome: ForecastOutcome,
}

/// Router builder exposing the scorer and its pass-through branch over HTTP.
pub fn forecast_router(default_location: impl Into<String>) -> Router {
    let state = Arc::new(ForecastRouteState {
        scorer: RiskScorer::new(),
        default_location: default_location.into(),
    });

    Router::new()
        .route("/api/v1/forecast/assess", post(assess_handler))
        .route("/api/v1/forecast/analysis", post(analysis_handler))
        .route("/api/v1/forecast/conditions", post(conditions_handler))
        .with_state(state)
}

async fn assess_handler(
    State(state): State<Arc<ForecastRouteState>>,
    Json(request): Json<AssessRequest>,
) -> Json<ForecastResponse> {
    let location = location_label(request.location_name.as_deref(), None, None)
        .unwrap_or_else(|| state.default_location.clone());
    let assessment = state.scorer.assess(&request.snapshot);

    info!(
        %location,
        score = assessment.score,
        tier = %assessment.tier,
        "forecast assessed from readings"
    );

    Json(ForecastResponse {
        location,
        conditions: None,
        outcome: ForecastOutcome::Computed { assessment },
    })
}

async fn analysis_handler(
    State(state): State<Arc<ForecastRouteState>>,
    Json(request): Json<ImageAnalysis>,
) -> Result<Json<ForecastResponse>, AppError> {
    let analysis = ImageAnalysis::new(request.analysis, request.location).map_err(|err| {
        warn!(error = %err, "rejected image analysis");
        err
    })?;

    let location = analysis
        .location
        .clone()
        .unwrap_or_else(|| state.default_location.clone());
    info!(%location, bytes = analysis.analysis.len(), "image analysis passed through");

    let outcome = ForecastOutcome::resolve(None, Some(analysis))
        .ok_or(super::ForecastRequestError::BlankAnalysis)?;

    Ok(Json(ForecastResponse {
        location,
        conditions: None,
        outcome,
    }))
}

async fn conditions_handler(
    State(state): State<Arc<ForecastRouteState>>,
    Json(request): Json<ConditionsRequest>,
) -> Result<Json<ForecastResponse>, AppError> {
    let ConditionsRequest {
        payload,
        location_name,
        lat,
        lon,
    } = request;

    let observed = CurrentWeatherResponse::from_value(payload)
        .and_then(CurrentWeatherResponse::into_observed)
        .map_err(|err| {
            warn!(error = %err, "weather payload rejected");
            err
        })?;

    let query = LocationQuery::from_parts(lat, lon, &state.default_location);
    let location = location_label(
        location_name.as_deref(),
        observed.location.as_ref(),
        Some(&query),
    )
    .unwrap_or_else(|| state.default_location.clone());

    let assessment = state.scorer.assess(&observed.conditions.snapshot());
    info!(
        %location,
        score = assessment.score,
        tier = %assessment.tier,
        "forecast assessed from weather payload"
    );

    Ok(Json(ForecastResponse {
        location,
        conditions: Some(observed.conditions),
        outcome: ForecastOutcome::Computed { assessment },
    }))
}
