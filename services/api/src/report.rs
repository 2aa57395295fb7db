use chrono::Local;
use clap::Args;
use cloudburst::error::AppError;
use cloudburst::forecast::{
    assess, ForecastOutcome, ImageAnalysis, RiskAssessment, RiskScorer, WeatherSnapshot,
};
#[cfg(test)]
use cloudburst::forecast::RiskTier;
use cloudburst::observations::{LabelledSnapshot, SnapshotImporter};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Relative humidity in percent
    #[arg(long)]
    pub(crate) humidity: Option<f64>,
    /// Atmospheric pressure in millibars
    #[arg(long)]
    pub(crate) pressure: Option<f64>,
    /// Cloud cover in percent
    #[arg(long = "cloudcover")]
    pub(crate) cloud_cover: Option<f64>,
    /// Precipitation in millimeters
    #[arg(long = "precip")]
    pub(crate) precipitation: Option<f64>,
    /// Temperature in degrees Celsius (display only)
    #[arg(long)]
    pub(crate) temperature: Option<f64>,
    /// Name shown next to the assessment
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Score every row of a CSV file (location,humidity,pressure,cloudcover,precip,temperature)
    #[arg(
        long,
        conflicts_with_all = ["humidity", "pressure", "cloud_cover", "precipitation", "temperature", "location"]
    )]
    pub(crate) csv: Option<PathBuf>,
    /// Emit JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AnalysisArgs {
    /// Analysis text produced by the image analysis service
    #[arg(long)]
    pub(crate) text: String,
    /// Location the analysed image covers
    #[arg(long)]
    pub(crate) location: Option<String>,
}

#[derive(Debug, Serialize)]
struct AssessedLocation<'a> {
    location: &'a str,
    assessment: &'a RiskAssessment,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        humidity,
        pressure,
        cloud_cover,
        precipitation,
        temperature,
        location,
        csv,
        json,
    } = args;

    let rows = match csv {
        Some(path) => SnapshotImporter::from_path(path)?,
        None => vec![LabelledSnapshot {
            location: location.unwrap_or_else(|| "Manual readings".to_string()),
            snapshot: WeatherSnapshot {
                humidity,
                pressure,
                cloud_cover,
                precipitation,
                temperature,
            },
        }],
    };

    let assessed = assess_rows(rows);
    println!("{}", render_assessed(&assessed, json)?);
    Ok(())
}

fn assess_rows(rows: Vec<LabelledSnapshot>) -> Vec<(String, RiskAssessment)> {
    let scorer = RiskScorer::new();
    rows.into_iter()
        .map(|row| {
            let assessment = scorer.assess(&row.snapshot);
            (row.location, assessment)
        })
        .collect()
}

/// Text report or pretty JSON array of `{location, assessment}` entries.
pub(crate) fn render_assessed(
    assessed: &[(String, RiskAssessment)],
    json: bool,
) -> Result<String, AppError> {
    if json {
        let entries: Vec<AssessedLocation<'_>> = assessed
            .iter()
            .map(|(location, assessment)| AssessedLocation {
                location,
                assessment,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let blocks: Vec<String> = assessed
        .iter()
        .map(|(location, assessment)| assessment_lines(location, assessment).join("\n"))
        .collect();
    Ok(blocks.join("\n\n"))
}

pub(crate) fn run_analysis(args: AnalysisArgs) -> Result<(), AppError> {
    let analysis = ImageAnalysis::new(args.text, args.location)?;
    let location = analysis
        .location
        .clone()
        .unwrap_or_else(|| "Uploaded Image".to_string());

    if let Some(ForecastOutcome::ImageAnalysis { analysis, .. }) =
        ForecastOutcome::resolve(None, Some(analysis))
    {
        println!("AI cloudburst analysis for {location}");
        println!("{analysis}");
    }

    Ok(())
}

pub(crate) fn run_demo() {
    println!("Cloudburst risk demo ({})", Local::now().format("%Y-%m-%d %H:%M"));

    for (location, snapshot) in demo_scenarios() {
        println!();
        for line in assessment_lines(location, &assess(&snapshot)) {
            println!("{line}");
        }
    }
}

/// One calm, one building and one severe reading set.
pub(crate) fn demo_scenarios() -> [(&'static str, WeatherSnapshot); 3] {
    [
        ("Jaipur, clear afternoon", WeatherSnapshot::new(35.0, 1016.0, 10.0, 0.0, 36.0)),
        ("Dehradun, building clouds", WeatherSnapshot::new(78.0, 1006.0, 70.0, 1.5, 26.0)),
        ("Kedarnath, monsoon cell", WeatherSnapshot::new(95.0, 992.0, 90.0, 14.0, 11.0)),
    ]
}

pub(crate) fn assessment_lines(location: &str, assessment: &RiskAssessment) -> Vec<String> {
    let mut lines = vec![
        format!("Cloudburst prediction for {location}"),
        format!("Risk level: {}", assessment.summary()),
        format!("Prediction: {}", assessment.prediction),
    ];

    if assessment.factors.is_empty() {
        lines.push("Contributing factors: none".to_string());
    } else {
        lines.push("Contributing factors".to_string());
        for component in &assessment.components {
            lines.push(format!("- {} (+{})", component.label, component.points));
        }
    }

    lines.push("Recommended actions".to_string());
    for action in &assessment.recommended_actions {
        lines.push(format!("- {action}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_list_factors_with_points() {
        let assessment = assess(&WeatherSnapshot::new(75.0, 1005.0, 65.0, 2.0, 22.0));
        let lines = assessment_lines("Dehradun", &assessment);

        assert_eq!(lines[0], "Cloudburst prediction for Dehradun");
        assert_eq!(lines[1], "Risk level: Moderate risk (45%)");
        assert!(lines.contains(&"- Moderate humidity (+15)".to_string()));
        assert!(lines.contains(&"- Alert residents in vulnerable areas".to_string()));
    }

    #[test]
    fn calm_lines_report_no_factors() {
        let assessment = assess(&WeatherSnapshot::default());
        let lines = assessment_lines("Leh", &assessment);

        assert!(lines.contains(&"Contributing factors: none".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("- Update forecasts every 3-6 hours"));
    }

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../crates/cloudburst/tests/fixtures/monsoon_readings.csv")
    }

    #[test]
    fn demo_covers_each_tier_once() {
        let tiers: Vec<RiskTier> = demo_scenarios()
            .iter()
            .map(|(_, snapshot)| assess(snapshot).tier)
            .collect();
        assert_eq!(tiers, vec![RiskTier::Low, RiskTier::Moderate, RiskTier::High]);
    }

    #[test]
    fn csv_batch_renders_as_json_array() {
        let rows = SnapshotImporter::from_path(fixture_path()).expect("fixture imports");
        let rendered = render_assessed(&assess_rows(rows), true).expect("renders");

        let payload: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let entries = payload.as_array().expect("array of entries");
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["location"], "Kedarnath");
        assert_eq!(entries[0]["assessment"]["tier"], "high");
        assert_eq!(entries[1]["assessment"]["score"], 45);
    }

    #[test]
    fn csv_batch_renders_as_text_blocks() {
        let rows = SnapshotImporter::from_path(fixture_path()).expect("fixture imports");
        let rendered = render_assessed(&assess_rows(rows), false).expect("renders");

        assert_eq!(rendered.matches("Cloudburst prediction for ").count(), 4);
        assert!(rendered.contains("Cloudburst prediction for Jaipur\nRisk level: Low risk (0%)"));
    }

    #[test]
    fn run_assess_scores_csv_in_both_formats() {
        for json in [true, false] {
            let args = AssessArgs {
                csv: Some(fixture_path()),
                json,
                ..AssessArgs::default()
            };
            run_assess(args).expect("batch assessed");
        }
    }

    #[test]
    fn run_assess_reports_missing_csv() {
        let args = AssessArgs {
            csv: Some(PathBuf::from("does/not/exist.csv")),
            ..AssessArgs::default()
        };
        assert!(matches!(run_assess(args), Err(AppError::Import(_))));
    }

    #[test]
    fn blank_analysis_is_rejected() {
        let result = run_analysis(AnalysisArgs {
            text: " ".to_string(),
            location: None,
        });
        assert!(matches!(result, Err(AppError::Request(_))));
    }
}
