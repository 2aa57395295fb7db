use super::snapshot::WeatherSnapshot;
use super::{RiskFactorKind, ScoreComponent};

pub(crate) const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy)]
enum Comparison {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy)]
struct Band {
    threshold: f64,
    points: u8,
    label: &'static str,
}

/// Bands are ordered most severe first; the first match wins.
struct FactorRule {
    kind: RiskFactorKind,
    comparison: Comparison,
    bands: [Band; 2],
}

impl FactorRule {
    fn reading(&self, snapshot: &WeatherSnapshot) -> Option<f64> {
        match self.kind {
            RiskFactorKind::Humidity => snapshot.humidity,
            RiskFactorKind::CloudCover => snapshot.cloud_cover,
            RiskFactorKind::Pressure => snapshot.pressure,
            RiskFactorKind::Precipitation => snapshot.precipitation,
        }
    }

    fn matching_band(&self, value: f64) -> Option<&Band> {
        self.bands.iter().find(|band| match self.comparison {
            Comparison::Above => value > band.threshold,
            Comparison::Below => value < band.threshold,
        })
    }
}

const RULES: [FactorRule; 4] = [
    FactorRule {
        kind: RiskFactorKind::Humidity,
        comparison: Comparison::Above,
        bands: [
            Band {
                threshold: 85.0,
                points: 30,
                label: "High humidity (>85%)",
            },
            Band {
                threshold: 70.0,
                points: 15,
                label: "Moderate humidity",
            },
        ],
    },
    FactorRule {
        kind: RiskFactorKind::CloudCover,
        comparison: Comparison::Above,
        bands: [
            Band {
                threshold: 80.0,
                points: 25,
                label: "Heavy cloud cover",
            },
            Band {
                threshold: 60.0,
                points: 10,
                label: "Moderate cloud cover",
            },
        ],
    },
    FactorRule {
        kind: RiskFactorKind::Pressure,
        comparison: Comparison::Below,
        bands: [
            Band {
                threshold: 1000.0,
                points: 30,
                label: "Low atmospheric pressure",
            },
            Band {
                threshold: 1010.0,
                points: 15,
                label: "Decreasing pressure",
            },
        ],
    },
    FactorRule {
        kind: RiskFactorKind::Precipitation,
        comparison: Comparison::Above,
        bands: [
            Band {
                threshold: 5.0,
                points: 15,
                label: "Active precipitation",
            },
            Band {
                threshold: 0.0,
                points: 5,
                label: "Light precipitation",
            },
        ],
    },
];

pub(crate) fn score_snapshot(snapshot: &WeatherSnapshot) -> (Vec<ScoreComponent>, u8) {
    let mut components = Vec::new();
    let mut total: u16 = 0;

    for rule in &RULES {
        let Some(value) = rule.reading(snapshot) else {
            continue;
        };

        if let Some(band) = rule.matching_band(value) {
            components.push(ScoreComponent {
                factor: rule.kind,
                points: band.points,
                label: band.label.to_string(),
            });
            total += u16::from(band.points);
        }
    }

    let score = total.min(u16::from(MAX_SCORE)) as u8;
    (components, score)
}
