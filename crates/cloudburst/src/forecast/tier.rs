use serde::{Deserialize, Serialize};

const HIGH_THRESHOLD: u8 = 70;
const MODERATE_THRESHOLD: u8 = 40;

/// Risk classification derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub const fn prediction(self) -> &'static str {
        match self {
            Self::High => {
                "High probability of severe weather conditions. Cloudburst likely within 2-6 hours. Immediate precautionary measures recommended."
            }
            Self::Moderate => {
                "Moderate risk of heavy rainfall. Monitor weather conditions closely. Prepare for potential cloudbursts within 6-12 hours."
            }
            Self::Low => {
                "Low risk of cloudburst events. Weather conditions are stable. Continue normal monitoring."
            }
        }
    }

    pub const fn recommended_actions(self) -> &'static [&'static str] {
        match self {
            Self::High => &[
                "Issue immediate weather alerts to affected areas",
                "Evacuate low-lying and flood-prone zones",
                "Activate emergency response teams",
                "Monitor drainage systems and water levels",
            ],
            Self::Moderate => &[
                "Issue weather advisories to local authorities",
                "Prepare emergency response systems",
                "Monitor weather conditions continuously",
                "Alert residents in vulnerable areas",
            ],
            Self::Low => &[
                "Continue routine weather monitoring",
                "Maintain readiness protocols",
                "Update forecasts every 3-6 hours",
            ],
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_at_the_lower_edge() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(39), RiskTier::Low);
        assert_eq!(RiskTier::from_score(40), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(69), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(70), RiskTier::High);
        assert_eq!(RiskTier::from_score(100), RiskTier::High);
    }

    #[test]
    fn each_tier_carries_its_own_action_list() {
        assert_eq!(RiskTier::High.recommended_actions().len(), 4);
        assert_eq!(RiskTier::Moderate.recommended_actions().len(), 4);
        assert_eq!(RiskTier::Low.recommended_actions().len(), 3);
        assert!(RiskTier::Low.prediction().starts_with("Low risk"));
    }
}
