// Axis domain resolution for chart display ranges
use super::sample::{MetricKey, Sample};
use serde::Serialize;

/// Smallest padding applied on each side of an auto-computed domain.
const MIN_PADDING: f64 = 1.0;
/// Padding used instead of the 10% margin when every value is equal.
const FLAT_PADDING: f64 = 5.0;
const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub const EMPTY: AxisDomain = AxisDomain { min: 0.0, max: 0.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Evenly spaced tick values; a single tick for a zero-width domain.
    pub fn ticks(&self) -> Vec<f64> {
        if self.span() <= 0.0 {
            return vec![self.min];
        }
        let step = self.span() / (TICK_COUNT - 1) as f64;
        (0..TICK_COUNT).map(|i| self.min + step * i as f64).collect()
    }
}

/// Computes the final domain for an axis from its window and metric keys.
pub type CustomDomain = fn(&[Sample], &[MetricKey]) -> AxisDomain;

#[derive(Debug, Clone, Copy)]
pub enum DomainRule {
    /// Padded min/max of the data.
    Auto,
    /// Padded min/max, with either side replaced when set.
    Bounds { min: Option<f64>, max: Option<f64> },
    Custom(CustomDomain),
}

/// Every finite value of every key across the window.
pub fn collect_values(window: &[Sample], keys: &[MetricKey]) -> Vec<f64> {
    window
        .iter()
        .flat_map(|s| keys.iter().filter_map(move |k| s.metric(*k)))
        .collect()
}

fn extent(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

pub fn resolve(rule: &DomainRule, window: &[Sample], keys: &[MetricKey]) -> AxisDomain {
    let (fixed_min, fixed_max) = match *rule {
        DomainRule::Custom(custom) => return custom(window, keys),
        DomainRule::Auto => (None, None),
        DomainRule::Bounds { min, max } => (min, max),
    };

    let Some((min, max)) = extent(&collect_values(window, keys)) else {
        return AxisDomain::EMPTY;
    };

    let range = max - min;
    let margin = if range > 0.0 { 0.1 * range } else { FLAT_PADDING };
    let padding = margin.max(MIN_PADDING);

    AxisDomain::new(
        fixed_min.unwrap_or(min - padding),
        fixed_max.unwrap_or(max + padding),
    )
}

/// Pads by `max(padding, 5% of range)` and clamps into `[floor, ceil]`.
pub fn dynamic_padded_domain(
    window: &[Sample],
    keys: &[MetricKey],
    padding: f64,
    floor: f64,
    ceil: f64,
) -> AxisDomain {
    let Some((min, max)) = extent(&collect_values(window, keys)) else {
        return AxisDomain::EMPTY;
    };

    let pad = padding.max(0.05 * (max - min));
    let lower = (min - pad).max(floor);
    let upper = (max + pad).min(ceil);
    if lower >= upper {
        return AxisDomain::new(floor, ceil);
    }
    AxisDomain::new(lower, upper)
}
