use crate::forecast::WeatherSnapshot;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

/// A snapshot read from a batch file, tagged with where it was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledSnapshot {
    pub location: String,
    pub snapshot: WeatherSnapshot,
}

#[derive(Debug, thiserror::Error)]
pub enum ObservationImportError {
    #[error("failed to read observation file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid observation CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads readings from CSV exports with the columns
/// `location,humidity,pressure,cloudcover,precip,temperature`.
pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<LabelledSnapshot>, ObservationImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LabelledSnapshot>, ObservationImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut snapshots = Vec::new();

        for (index, record) in csv_reader.deserialize::<ObservationRow>().enumerate() {
            let row = record?;
            let location = row
                .location
                .unwrap_or_else(|| format!("row {}", index + 1));

            snapshots.push(LabelledSnapshot {
                location,
                snapshot: WeatherSnapshot {
                    humidity: row.humidity,
                    pressure: row.pressure,
                    cloud_cover: row.cloudcover,
                    precipitation: row.precip,
                    temperature: row.temperature,
                },
            });
        }

        Ok(snapshots)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_absent")]
    humidity: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_absent")]
    pressure: Option<f64>,
    #[serde(default, alias = "cloud_cover", deserialize_with = "blank_as_absent")]
    cloudcover: Option<f64>,
    #[serde(default, alias = "precipitation", deserialize_with = "blank_as_absent")]
    precip: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_absent")]
    temperature: Option<f64>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn blank_as_absent<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    opt.map(|value| {
        value
            .parse::<f64>()
            .map_err(|err| serde::de::Error::custom(format!("'{value}' is not a number ({err})")))
    })
    .transpose()
}
