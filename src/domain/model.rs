use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of the tonnage variance sign for a production entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakStatus {
    Overbreak,
    Underbreak,
    OnTarget,
    Unknown,
}

/// Snapshot produced for every recomputation of the production-entry form.
/// Fresh on each input change, nothing is carried between computations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceResult {
    pub expected: Option<f64>,
    pub actual: Option<f64>,
    pub variance: Option<f64>,
    pub status: BreakStatus,
    pub display_text: String,
    pub display_color: Option<&'static str>,
}

impl VarianceResult {
    /// Formatted value for the variance form field, empty when variance is
    /// not computable. Negative zero prints unsigned, as the form always has.
    pub fn variance_field(&self) -> String {
        self.variance
            .map(|v| {
                let v = if v == 0.0 { 0.0 } else { v };
                format!("{:.2}", v)
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Ore,
    Waste,
}

/// Tonnage moved out of a phase at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub phase: String,
    pub timestamp: DateTime<Utc>,
    pub tonnage: f64,
    pub expected_tonnage: Option<f64>,
    pub material_type: MaterialType,
    #[serde(default)]
    pub source: String,
}

impl ProductionRecord {
    pub fn is_underbreak(&self) -> bool {
        matches!(self.expected_tonnage, Some(expected) if self.tonnage < expected)
    }

    /// Tonnes short of expectation; zero unless the record is an underbreak.
    pub fn shortfall_t(&self) -> f64 {
        match self.expected_tonnage {
            Some(expected) if self.tonnage < expected => expected - self.tonnage,
            _ => 0.0,
        }
    }
}

/// Ore grade sample taken from a phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OreSample {
    pub phase: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub sample_id: String,
    pub grade_g_t: f64,
    pub tonnage: f64,
}

/// A mining phase or pushback within a pit, with the planning targets the
/// summary views compare actuals against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinePhase {
    pub name: String,
    pub pit: String,
    pub phase_number: u32,
    pub sequence_order: u32,
    pub expected_grade: Option<f64>,
    pub expected_tonnage: Option<f64>,
}

/// Ore stockpile ready for plant feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stockpile {
    pub name: String,
    pub current_tonnage: f64,
    pub projected_tonnage: f64,
    pub grade: Option<f64>,
}

impl Stockpile {
    pub fn variance(&self) -> f64 {
        self.current_tonnage - self.projected_tonnage
    }

    pub fn variance_percent(&self) -> f64 {
        if self.projected_tonnage != 0.0 {
            (self.current_tonnage - self.projected_tonnage) / self.projected_tonnage * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseState {
    Planned,
    Active,
    Completed,
}

/// Planned against removed tonnage for a phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseSchedule {
    pub phase: String,
    pub planned_tonnage: f64,
    pub removed_tonnage: f64,
}

impl PhaseSchedule {
    /// Progress toward the planned tonnage, capped at 100 and rounded to one
    /// decimal. A phase with no plan reports zero progress.
    pub fn progress_percent(&self) -> f64 {
        if self.planned_tonnage <= 0.0 {
            return 0.0;
        }
        let pct = (self.removed_tonnage / self.planned_tonnage * 100.0).min(100.0);
        (pct * 10.0).round() / 10.0
    }

    pub fn state(&self) -> PhaseState {
        let progress = self.progress_percent();
        if progress == 0.0 {
            PhaseState::Planned
        } else if progress < 100.0 {
            PhaseState::Active
        } else {
            PhaseState::Completed
        }
    }
}
