//! Cloudburst risk scoring.
//!
//! [`forecast`] turns a [`forecast::WeatherSnapshot`] into a
//! [`forecast::RiskAssessment`]; [`observations`] builds snapshots from
//! weather-API payloads and CSV batches.

pub mod config;
pub mod error;
pub mod forecast;
pub mod observations;
pub mod telemetry;
