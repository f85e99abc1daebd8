use std::io::Write;

use serde::Serialize;

use crate::domain::model::{MaterialType, MinePhase, OreSample, ProductionRecord};
use crate::utils::error::Result;

/// Expected against actual grade and tonnage for one phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSummary {
    pub name: String,
    pub pit: String,
    pub expected_grade: f64,
    pub actual_grade: f64,
    pub variance_grade: f64,
    pub expected_tonnage: f64,
    pub actual_tonnage: f64,
    pub variance_tonnage: f64,
}

/// Builds the grade/tonnage comparison table, ordered by phase sequence.
///
/// Actual tonnage is the sum of ore production for the phase; actual grade is
/// the tonnage-weighted mean of its samples, falling back to a plain mean
/// when sample tonnages are all zero and to 0 when there are no samples.
pub fn phase_summaries(
    phases: &[MinePhase],
    records: &[ProductionRecord],
    samples: &[OreSample],
) -> Vec<PhaseSummary> {
    let mut ordered: Vec<&MinePhase> = phases.iter().collect();
    ordered.sort_by_key(|p| p.sequence_order);

    ordered
        .iter()
        .map(|phase| {
            let actual_tonnage: f64 = records
                .iter()
                .filter(|r| r.phase == phase.name && r.material_type == MaterialType::Ore)
                .map(|r| r.tonnage)
                .sum();

            let phase_samples: Vec<&OreSample> =
                samples.iter().filter(|s| s.phase == phase.name).collect();
            let actual_grade = weighted_grade(&phase_samples);

            let expected_grade = phase.expected_grade.unwrap_or(0.0);
            let expected_tonnage = phase.expected_tonnage.unwrap_or(0.0);

            PhaseSummary {
                name: phase.name.clone(),
                pit: phase.pit.clone(),
                expected_grade,
                actual_grade,
                variance_grade: actual_grade - expected_grade,
                expected_tonnage,
                actual_tonnage,
                variance_tonnage: actual_tonnage - expected_tonnage,
            }
        })
        .collect()
}

fn weighted_grade(samples: &[&OreSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let total_tonnage: f64 = samples.iter().map(|s| s.tonnage).sum();
    if total_tonnage > 0.0 {
        samples.iter().map(|s| s.grade_g_t * s.tonnage).sum::<f64>() / total_tonnage
    } else {
        samples.iter().map(|s| s.grade_g_t).sum::<f64>() / samples.len() as f64
    }
}

/// Writes the summary table as CSV, same columns as the dashboard export.
pub fn export_summary_csv<W: Write>(writer: W, summaries: &[PhaseSummary]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Mine Phase",
        "Expected Grade",
        "Actual Grade",
        "Variance Grade",
        "Expected Tonnage",
        "Actual Tonnage",
        "Variance Tonnage",
    ])?;

    for summary in summaries {
        csv_writer.write_record([
            summary.name.clone(),
            format!("{:.2}", summary.expected_grade),
            format!("{:.2}", summary.actual_grade),
            format!("{:.2}", summary.variance_grade),
            format!("{:.2}", summary.expected_tonnage),
            format!("{:.2}", summary.actual_tonnage),
            format!("{:.2}", summary.variance_tonnage),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// JSON form of the summary table for chart consumption.
pub fn summaries_json(summaries: &[PhaseSummary]) -> Result<String> {
    Ok(serde_json::to_string(summaries)?)
}
