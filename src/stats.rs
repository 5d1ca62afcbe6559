use crate::dataset::DatasetStore;
use crate::models::{Period, PeriodDataset};
use serde::{Deserialize, Serialize};

/// Summary statistics for one period table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    pub count: usize,
    /// Rows without a usable precipitation value.
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub wettest: Option<String>,
    pub driest: Option<String>,
}

/// Summarize a single period table.
pub fn summarize(period: Period, dataset: &PeriodDataset) -> PeriodSummary {
    let mut vals: Vec<(f64, &str)> = Vec::new();
    let mut missing = 0;
    for (_, rec) in dataset.iter() {
        match rec.precipitation_mm {
            Some(v) if v.is_finite() => vals.push((v, rec.country.as_deref().unwrap_or_default())),
            _ => missing += 1,
        }
    }
    missing += dataset.len() - dataset.iter().count();

    vals.sort_by(|a, b| a.0.total_cmp(&b.0));
    let count = vals.len();
    let min = vals.first().map(|v| v.0);
    let max = vals.last().map(|v| v.0);
    let mean = if count > 0 {
        Some(vals.iter().map(|v| v.0).sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2].0)
    } else {
        Some((vals[count / 2 - 1].0 + vals[count / 2].0) / 2.0)
    };
    PeriodSummary {
        period,
        count,
        missing,
        min,
        max,
        mean,
        median,
        wettest: vals.last().map(|v| v.1.to_string()),
        driest: vals.first().map(|v| v.1.to_string()),
    }
}

/// Summaries for every period, in selector order.
pub fn period_summaries(store: &DatasetStore) -> Vec<PeriodSummary> {
    store
        .iter()
        .map(|(period, dataset)| summarize(period, dataset))
        .collect()
}
