use super::payload::PayloadLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to ask the weather provider about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationQuery {
    Coordinates { lat: f64, lon: f64 },
    Place(String),
}

impl LocationQuery {
    pub fn place(name: impl Into<String>) -> Self {
        Self::Place(name.into())
    }

    /// Picks coordinates when both are present, otherwise the fallback place.
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>, fallback_place: &str) -> Self {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Self::Coordinates { lat, lon },
            _ => Self::Place(fallback_place.to_string()),
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinates { lat, lon } => write!(f, "{lat},{lon}"),
            Self::Place(name) => f.write_str(name.trim()),
        }
    }
}

pub fn coordinate_label(lat: f64, lon: f64) -> String {
    format!("{lat:.2}, {lon:.2}")
}

/// Resolve the name shown next to a forecast.
///
/// Precedence: caller-supplied name, then the payload's `name, country`, then
/// rounded coordinates from the query or payload.
pub fn location_label(
    explicit: Option<&str>,
    payload: Option<&PayloadLocation>,
    query: Option<&LocationQuery>,
) -> Option<String> {
    if let Some(name) = explicit.map(str::trim).filter(|name| !name.is_empty()) {
        return Some(name.to_string());
    }

    if let Some(name) = payload.and_then(PayloadLocation::display_name) {
        return Some(name);
    }

    if let Some(LocationQuery::Coordinates { lat, lon }) = query {
        return Some(coordinate_label(*lat, *lon));
    }

    match payload {
        Some(PayloadLocation {
            lat: Some(lat),
            lon: Some(lon),
            ..
        }) => Some(coordinate_label(*lat, *lon)),
        _ => None,
    }
}
