use crate::config::ConfigError;
use crate::forecast::ForecastRequestError;
use crate::observations::{ObservationImportError, WeatherPayloadError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("observation import error: {0}")]
    Import(#[from] ObservationImportError),
    #[error("weather data error: {0}")]
    Weather(#[from] WeatherPayloadError),
    #[error("invalid forecast request: {0}")]
    Request(#[from] ForecastRequestError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Request(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Import(_) | AppError::Weather(WeatherPayloadError::Malformed(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Weather(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
