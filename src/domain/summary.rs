// Per-metric window summaries
use super::sample::{MetricKey, Sample};
use serde::Serialize;

/// `None` fields mean insufficient data, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricSummary {
    pub latest: Option<f64>,
    pub change: Option<f64>,
    pub average: Option<f64>,
}

pub fn summarize(window: &[Sample], key: MetricKey) -> MetricSummary {
    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return MetricSummary::default();
    };

    let latest = last.metric(key);
    let change = match (window.len() > 1, first.metric(key), latest) {
        (true, Some(start), Some(end)) => Some(end - start),
        _ => None,
    };

    let values: Vec<f64> = window.iter().filter_map(|s| s.metric(key)).collect();
    let average = if values.is_empty() {
        None
    } else {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        // halves round up
        Some((mean + 0.5).floor()).filter(|v| v.is_finite())
    };

    MetricSummary {
        latest,
        change,
        average,
    }
}
