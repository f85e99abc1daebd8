use serde::Serialize;

use crate::domain::model::{PhaseSchedule, PhaseState};

/// Planned against removed tonnage for one phase, with variance columns
/// rounded to two decimals. The percent is `None` when nothing was planned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseVarianceRow {
    pub phase: String,
    pub planned: f64,
    pub removed: f64,
    pub variance: f64,
    pub variance_percent: Option<f64>,
    pub progress_percent: f64,
    pub state: PhaseState,
}

pub fn variance_rows(schedules: &[PhaseSchedule]) -> Vec<PhaseVarianceRow> {
    schedules
        .iter()
        .map(|schedule| {
            let planned = schedule.planned_tonnage;
            let removed = schedule.removed_tonnage;
            let variance = removed - planned;
            let variance_percent = if planned != 0.0 {
                Some(round2(variance / planned * 100.0))
            } else {
                None
            };

            PhaseVarianceRow {
                phase: schedule.phase.clone(),
                planned,
                removed,
                variance: round2(variance),
                variance_percent,
                progress_percent: schedule.progress_percent(),
                state: schedule.state(),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
