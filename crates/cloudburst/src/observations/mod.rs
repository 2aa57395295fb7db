//! Adapters that turn upstream weather data into scoring snapshots.

mod import;
mod location;
mod payload;

pub use import::{LabelledSnapshot, ObservationImportError, SnapshotImporter};
pub use location::{coordinate_label, location_label, LocationQuery};
pub use payload::{
    CurrentBlock, CurrentConditions, CurrentWeatherResponse, ObservedWeather, PayloadLocation,
    ProviderErrorBody, RequestEcho, WeatherPayloadError,
};
