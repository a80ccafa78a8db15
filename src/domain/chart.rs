// Chart-ready projections of a sample window
use super::axis::{Axis, AxisDomain};
use super::focus::{FocusConfig, SeriesSpec};
use super::sample::{MetricKey, Sample};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    /// `None` leaves a gap in the line.
    pub value: Option<f64>,
}

impl ChartPoint {
    pub fn new(date: String, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    pub metric: MetricKey,
    pub label: String,
    pub color: String,
    pub axis: Axis,
    pub points: Vec<ChartPoint>,
}

impl SeriesView {
    pub fn project(spec: &SeriesSpec, window: &[Sample]) -> Self {
        let points = window
            .iter()
            .map(|s| ChartPoint::new(s.date_label(), s.metric(spec.metric)))
            .collect();

        Self {
            metric: spec.metric,
            label: spec.label.to_string(),
            color: spec.color.to_string(),
            axis: spec.axis,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisView {
    pub side: Axis,
    pub domain: AxisDomain,
    pub ticks: Vec<AxisTick>,
}

impl AxisView {
    pub fn resolve(config: &FocusConfig, side: Axis, window: &[Sample]) -> Self {
        let domain = config.resolve_domain(side, window);
        let format = config.tick_format(side);
        let ticks = domain
            .ticks()
            .into_iter()
            .map(|value| AxisTick {
                value,
                label: format.format(value),
            })
            .collect();

        Self {
            side,
            domain,
            ticks,
        }
    }
}
