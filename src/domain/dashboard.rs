// Dashboard view - everything the presentation layer renders for one (timeframe, focus) pair
use super::chart::{AxisView, SeriesView};
use super::focus::{FocusConfig, FocusMode};
use super::sample::{MetricKey, Sample};
use super::summary::{summarize, MetricSummary};
use super::window::WindowBounds;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SpotlightView {
    pub metric: MetricKey,
    pub label: String,
    pub summary: MetricSummary,
    pub latest: Option<String>,
    pub change: Option<String>,
    pub average: Option<String>,
}

impl SpotlightView {
    pub fn summarize(config: &FocusConfig, metric: MetricKey, window: &[Sample]) -> Self {
        let summary = summarize(window, metric);
        let format = config.value_format(metric);
        let label = config
            .series_for(metric)
            .map(|s| s.label)
            .unwrap_or(metric.as_str());

        Self {
            metric,
            label: label.to_string(),
            summary,
            latest: summary.latest.map(|v| format.format(v)),
            change: summary.change.map(|v| format.format_change(v)),
            average: summary.average.map(|v| format.format(v)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub focus: FocusMode,
    pub label: String,
    pub description: String,
    pub unit: Option<String>,
    pub timeframe_days: u32,
    pub window: Option<WindowBounds>,
    pub samples: Vec<Sample>,
    pub series: Vec<SeriesView>,
    pub axes: Vec<AxisView>,
    pub spotlight: SpotlightView,
    pub secondary_spotlight: Option<SpotlightView>,
}

impl DashboardView {
    pub fn build(
        config: &FocusConfig,
        timeframe_days: u32,
        window: Option<WindowBounds>,
        samples: &[Sample],
    ) -> Self {
        let series = config
            .series
            .iter()
            .map(|spec| SeriesView::project(spec, samples))
            .collect();
        let axes = config
            .axes_in_use()
            .into_iter()
            .map(|side| AxisView::resolve(config, side, samples))
            .collect();

        Self {
            focus: config.mode,
            label: config.label.to_string(),
            description: config.description.to_string(),
            unit: config.unit.map(str::to_string),
            timeframe_days,
            window,
            samples: samples.to_vec(),
            series,
            axes,
            spotlight: SpotlightView::summarize(config, config.spotlight, samples),
            secondary_spotlight: config
                .secondary_spotlight
                .map(|metric| SpotlightView::summarize(config, metric, samples)),
        }
    }
}
