use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::LossConfig;
use crate::domain::model::ProductionRecord;

/// Aggregation bucket for the processing-loss analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossPeriod {
    Daily,
    Weekly,
    Monthly,
}

/// Chart payload for the processing-loss dashboard: one entry per bucket,
/// oldest first. Gold is in kilograms rounded to six decimals, revenue in USD
/// rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossReport {
    pub labels: Vec<String>,
    pub gold: Vec<f64>,
    pub revenue: Vec<f64>,
}

#[derive(Default)]
struct Bucket {
    gold_lost_kg: f64,
    revenue_lost_usd: f64,
}

/// Estimated gold lost to an underbreak record, in kilograms. Grade and
/// recovery come from configuration since production records carry tonnage
/// only.
pub fn gold_lost_kg(record: &ProductionRecord, config: &LossConfig) -> f64 {
    record.shortfall_t() * config.default_grade_g_t * config.recovery_rate / 1000.0
}

pub fn revenue_lost_usd(record: &ProductionRecord, config: &LossConfig) -> f64 {
    gold_lost_kg(record, config) * config.gold_price_usd_per_kg
}

/// Aggregates underbreak losses over an optional inclusive date range
/// (date-only, matching the dashboard's pickers). Records that met or beat
/// their expected tonnage contribute nothing and are dropped up front.
pub fn processing_loss(
    records: &[ProductionRecord],
    period: LossPeriod,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    config: &LossConfig,
) -> LossReport {
    let mut buckets: BTreeMap<(i32, u32, u32), Bucket> = BTreeMap::new();

    for record in records {
        let date = record.timestamp.date_naive();
        if let Some(start) = start {
            if date < start {
                continue;
            }
        }
        if let Some(end) = end {
            if date > end {
                continue;
            }
        }
        if !record.is_underbreak() {
            continue;
        }

        let key = bucket_key(date, period);
        let bucket = buckets.entry(key).or_default();
        bucket.gold_lost_kg += gold_lost_kg(record, config);
        bucket.revenue_lost_usd += revenue_lost_usd(record, config);
    }

    let mut report = LossReport {
        labels: Vec::with_capacity(buckets.len()),
        gold: Vec::with_capacity(buckets.len()),
        revenue: Vec::with_capacity(buckets.len()),
    };

    for (key, bucket) in buckets {
        report.labels.push(bucket_label(key, period));
        report.gold.push(round6(bucket.gold_lost_kg));
        report.revenue.push(round2(bucket.revenue_lost_usd));
    }

    report
}

fn bucket_key(date: NaiveDate, period: LossPeriod) -> (i32, u32, u32) {
    match period {
        LossPeriod::Daily => (date.year(), date.month(), date.day()),
        LossPeriod::Weekly => {
            let week = date.iso_week();
            (week.year(), week.week(), 0)
        }
        LossPeriod::Monthly => (date.year(), date.month(), 0),
    }
}

fn bucket_label(key: (i32, u32, u32), period: LossPeriod) -> String {
    match period {
        LossPeriod::Daily => format!("{:04}-{:02}-{:02}", key.0, key.1, key.2),
        LossPeriod::Weekly => format!("{}-W{}", key.0, key.1),
        LossPeriod::Monthly => format!("{}-{:02}", key.0, key.1),
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
