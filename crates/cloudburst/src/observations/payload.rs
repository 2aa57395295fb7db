use crate::forecast::WeatherSnapshot;
use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by the weather API's `current` endpoint.
///
/// Failed lookups still answer with HTTP 200 and an error envelope, so both
/// shapes share this struct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<ProviderErrorBody>,
    #[serde(default)]
    pub request: Option<RequestEcho>,
    #[serde(default)]
    pub location: Option<PayloadLocation>,
    #[serde(default)]
    pub current: Option<CurrentBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEcho {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,
}

impl PayloadLocation {
    pub fn display_name(&self) -> Option<String> {
        let name = self.name.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        match self.country.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            Some(country) => Some(format!("{name}, {country}")),
            None => Some(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub observation_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub feelslike: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cloudcover: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub precip: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_dir: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub visibility: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub uv_index: Option<f64>,
    #[serde(default)]
    pub weather_descriptions: Vec<String>,
    #[serde(default)]
    pub weather_icons: Vec<String>,
}

/// Display-ready current conditions for a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub precipitation: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<String>,
    pub visibility: Option<f64>,
    pub uv_index: Option<f64>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub observed_at: Option<NaiveTime>,
}

impl CurrentConditions {
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            humidity: self.humidity,
            pressure: self.pressure,
            cloud_cover: self.cloud_cover,
            precipitation: self.precipitation,
            temperature: self.temperature,
        }
    }
}

impl From<CurrentBlock> for CurrentConditions {
    fn from(block: CurrentBlock) -> Self {
        let observed_at = block.observation_time.as_deref().and_then(parse_observation_time);
        Self {
            temperature: block.temperature,
            feels_like: block.feelslike,
            humidity: block.humidity,
            pressure: block.pressure,
            cloud_cover: block.cloudcover,
            precipitation: block.precip,
            wind_speed: block.wind_speed,
            wind_direction: block.wind_dir.filter(|value| !value.trim().is_empty()),
            visibility: block.visibility,
            uv_index: block.uv_index,
            description: block.weather_descriptions.into_iter().next(),
            icon_url: block.weather_icons.into_iter().next(),
            observed_at,
        }
    }
}

/// Payload rejected before any scoring happens.
#[derive(Debug, thiserror::Error)]
pub enum WeatherPayloadError {
    #[error("weather provider reported error {code}: {info}")]
    Provider { code: i64, info: String },
    #[error("weather payload has no current conditions block")]
    MissingCurrent,
    #[error("invalid weather payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Current conditions plus the payload's own notion of where they apply.
#[derive(Debug, Clone)]
pub struct ObservedWeather {
    pub conditions: CurrentConditions,
    pub location: Option<PayloadLocation>,
}

impl CurrentWeatherResponse {
    pub fn from_json(raw: &str) -> Result<Self, WeatherPayloadError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, WeatherPayloadError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_observed(self) -> Result<ObservedWeather, WeatherPayloadError> {
        if self.success == Some(false) || self.error.is_some() {
            let body = self.error.unwrap_or_default();
            return Err(WeatherPayloadError::Provider {
                code: body.code.unwrap_or_default(),
                info: body
                    .info
                    .or(body.kind)
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let current = self.current.ok_or(WeatherPayloadError::MissingCurrent)?;
        Ok(ObservedWeather {
            conditions: current.into(),
            location: self.location,
        })
    }
}

fn parse_observation_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveTime::parse_from_str(trimmed, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// The provider sends coordinates as strings and readings as numbers; accept
/// either and treat unparsable text as absent.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(number)) => Some(number),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
