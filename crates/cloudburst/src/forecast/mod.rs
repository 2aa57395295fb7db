mod outcome;
mod router;
mod rules;
mod snapshot;
mod tier;

pub use outcome::{ForecastOutcome, ForecastRequestError, ImageAnalysis};
pub use router::{forecast_router, ForecastResponse};
pub use snapshot::WeatherSnapshot;
pub use tier::RiskTier;

use rules::score_snapshot;
use serde::{Deserialize, Serialize};

/// Reading category that can contribute to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    Humidity,
    CloudCover,
    Pressure,
    Precipitation,
}

/// Discrete contribution to an assessment, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactorKind,
    pub points: u8,
    pub label: String,
}

/// Scored view of a single snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub tier: RiskTier,
    pub factors: Vec<String>,
    pub prediction: String,
    pub recommended_actions: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl RiskAssessment {
    pub fn summary(&self) -> String {
        format!("{} risk ({}%)", self.tier.label(), self.score)
    }
}

/// Stateless scorer applying the fixed threshold table to a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, snapshot: &WeatherSnapshot) -> RiskAssessment {
        let (components, score) = score_snapshot(snapshot);
        let tier = RiskTier::from_score(score);

        RiskAssessment {
            score,
            tier,
            factors: components
                .iter()
                .map(|component| component.label.clone())
                .collect(),
            prediction: tier.prediction().to_string(),
            recommended_actions: tier
                .recommended_actions()
                .iter()
                .map(|action| action.to_string())
                .collect(),
            components,
        }
    }
}

/// Score a snapshot with the default scorer.
pub fn assess(snapshot: &WeatherSnapshot) -> RiskAssessment {
    RiskScorer::new().assess(snapshot)
}
