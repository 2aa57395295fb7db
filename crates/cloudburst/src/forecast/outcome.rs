use super::{assess, RiskAssessment, WeatherSnapshot};
use serde::{Deserialize, Serialize};

/// Free-text result of an external image analysis, shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ImageAnalysis {
    pub fn new(
        analysis: impl Into<String>,
        location: Option<String>,
    ) -> Result<Self, ForecastRequestError> {
        let analysis = analysis.into();
        if analysis.trim().is_empty() {
            return Err(ForecastRequestError::BlankAnalysis);
        }

        let location = location.filter(|value| !value.trim().is_empty());
        Ok(Self { analysis, location })
    }
}

/// What the display layer renders for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForecastOutcome {
    Computed {
        assessment: RiskAssessment,
    },
    ImageAnalysis {
        analysis: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<String>,
    },
}

impl ForecastOutcome {
    /// An analysis text replaces the computed score outright; the two signals
    /// are never blended. Only an empty text counts as no analysis.
    pub fn resolve(
        snapshot: Option<&WeatherSnapshot>,
        analysis: Option<ImageAnalysis>,
    ) -> Option<Self> {
        if let Some(analysis) = analysis.filter(|value| !value.analysis.is_empty()) {
            return Some(Self::ImageAnalysis {
                analysis: analysis.analysis,
                location: analysis.location,
            });
        }

        snapshot.map(|snapshot| Self::Computed {
            assessment: assess(snapshot),
        })
    }

    pub fn assessment(&self) -> Option<&RiskAssessment> {
        match self {
            Self::Computed { assessment } => Some(assessment),
            Self::ImageAnalysis { .. } => None,
        }
    }
}

/// Rejected forecast request input.
#[derive(Debug, thiserror::Error)]
pub enum ForecastRequestError {
    #[error("analysis text must not be blank")]
    BlankAnalysis,
}
