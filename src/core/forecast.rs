use serde::Serialize;

use crate::domain::model::Stockpile;

/// One stockpile line in the forecast table, values rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub name: String,
    pub current_tonnage: f64,
    pub projected_tonnage: f64,
    pub grade: Option<f64>,
    pub variance: f64,
    pub variance_percent: f64,
}

/// Builds the stockpile forecast table, ordered by name. Variance columns are
/// rounded to one decimal; a stockpile with no projection reports 0%.
pub fn forecast_rows(stockpiles: &[Stockpile]) -> Vec<ForecastRow> {
    let mut rows: Vec<ForecastRow> = stockpiles
        .iter()
        .map(|s| ForecastRow {
            name: s.name.clone(),
            current_tonnage: s.current_tonnage,
            projected_tonnage: s.projected_tonnage,
            grade: s.grade,
            variance: round1(s.variance()),
            variance_percent: round1(s.variance_percent()),
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
