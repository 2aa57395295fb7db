use serde::{Deserialize, Serialize};

/// One set of atmospheric readings, scored once and discarded.
///
/// Every reading is optional. A missing reading never fails scoring, it
/// simply contributes no factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Relative humidity, percent.
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Atmospheric pressure, millibars.
    #[serde(default)]
    pub pressure: Option<f64>,
    /// Cloud cover, percent.
    #[serde(default, alias = "cloudcover")]
    pub cloud_cover: Option<f64>,
    /// Precipitation, millimeters.
    #[serde(default, alias = "precip")]
    pub precipitation: Option<f64>,
    /// Carried for display only.
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl WeatherSnapshot {
    pub fn new(
        humidity: f64,
        pressure: f64,
        cloud_cover: f64,
        precipitation: f64,
        temperature: f64,
    ) -> Self {
        Self {
            humidity: Some(humidity),
            pressure: Some(pressure),
            cloud_cover: Some(cloud_cover),
            precipitation: Some(precipitation),
            temperature: Some(temperature),
        }
    }

    pub fn with_humidity(mut self, value: f64) -> Self {
        self.humidity = Some(value);
        self
    }

    pub fn with_pressure(mut self, value: f64) -> Self {
        self.pressure = Some(value);
        self
    }

    pub fn with_cloud_cover(mut self, value: f64) -> Self {
        self.cloud_cover = Some(value);
        self
    }

    pub fn with_precipitation(mut self, value: f64) -> Self {
        self.precipitation = Some(value);
        self
    }

    pub fn with_temperature(mut self, value: f64) -> Self {
        self.temperature = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.humidity.is_none()
            && self.pressure.is_none()
            && self.cloud_cover.is_none()
            && self.precipitation.is_none()
            && self.temperature.is_none()
    }
}
