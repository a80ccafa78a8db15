// Focus mode registry - static per-view chart and summary configuration
use super::axis::{self, dynamic_padded_domain, Axis, AxisDomain, DomainRule};
use super::error::DashboardError;
use super::format::{format_duration_minutes, format_hours_tick, ValueFormat};
use super::sample::{MetricKey, Sample};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusMode {
    Sleep,
    Stress,
    HeartRate,
    Oxygenation,
    Activity,
}

impl FocusMode {
    pub const ALL: [FocusMode; 5] = [
        FocusMode::Sleep,
        FocusMode::Stress,
        FocusMode::HeartRate,
        FocusMode::Oxygenation,
        FocusMode::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusMode::Sleep => "sleep",
            FocusMode::Stress => "stress",
            FocusMode::HeartRate => "heart-rate",
            FocusMode::Oxygenation => "oxygenation",
            FocusMode::Activity => "activity",
        }
    }
}

impl FromStr for FocusMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sleep" => Ok(FocusMode::Sleep),
            "stress" => Ok(FocusMode::Stress),
            "heart-rate" | "heartRate" | "heart_rate" => Ok(FocusMode::HeartRate),
            "oxygenation" | "spo2" => Ok(FocusMode::Oxygenation),
            "activity" => Ok(FocusMode::Activity),
            other => Err(DashboardError::UnknownFocus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeriesSpec {
    pub metric: MetricKey,
    pub label: &'static str,
    pub color: &'static str,
    pub axis: Axis,
    pub format: ValueFormat,
}

#[derive(Debug, Clone, Copy)]
pub struct AxisSpec {
    pub axis: Axis,
    pub rule: DomainRule,
    /// Overrides the first series' value format for tick labels.
    pub tick_format: Option<fn(f64) -> String>,
}

#[derive(Debug)]
pub struct FocusConfig {
    pub mode: FocusMode,
    pub label: &'static str,
    pub description: &'static str,
    pub unit: Option<&'static str>,
    pub series: &'static [SeriesSpec],
    pub axes: &'static [AxisSpec],
    pub spotlight: MetricKey,
    pub secondary_spotlight: Option<MetricKey>,
}

impl FocusConfig {
    /// Axes with at least one series, left before right.
    pub fn axes_in_use(&self) -> Vec<Axis> {
        [Axis::Left, Axis::Right]
            .into_iter()
            .filter(|a| self.series.iter().any(|s| s.axis == *a))
            .collect()
    }

    pub fn keys_on(&self, axis: Axis) -> Vec<MetricKey> {
        self.series
            .iter()
            .filter(|s| s.axis == axis)
            .map(|s| s.metric)
            .collect()
    }

    pub fn series_for(&self, metric: MetricKey) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.metric == metric)
    }

    pub fn value_format(&self, metric: MetricKey) -> ValueFormat {
        self.series_for(metric)
            .map(|s| s.format)
            .unwrap_or(ValueFormat::Default)
    }

    fn axis_spec(&self, axis: Axis) -> Option<&AxisSpec> {
        self.axes.iter().find(|a| a.axis == axis)
    }

    pub fn tick_format(&self, axis: Axis) -> ValueFormat {
        if let Some(formatter) = self.axis_spec(axis).and_then(|a| a.tick_format) {
            return ValueFormat::Custom(formatter);
        }
        self.series
            .iter()
            .find(|s| s.axis == axis)
            .map(|s| s.format)
            .unwrap_or(ValueFormat::Default)
    }

    pub fn resolve_domain(&self, axis: Axis, window: &[Sample]) -> AxisDomain {
        let rule = self
            .axis_spec(axis)
            .map(|a| a.rule)
            .unwrap_or(DomainRule::Auto);
        axis::resolve(&rule, window, &self.keys_on(axis))
    }
}

fn sleep_minutes_domain(window: &[Sample], keys: &[MetricKey]) -> AxisDomain {
    dynamic_padded_domain(window, keys, 30.0, 0.0, 960.0)
}

fn heart_rate_domain(window: &[Sample], keys: &[MetricKey]) -> AxisDomain {
    dynamic_padded_domain(window, keys, 5.0, 30.0, 220.0)
}

fn oxygenation_domain(window: &[Sample], keys: &[MetricKey]) -> AxisDomain {
    dynamic_padded_domain(window, keys, 1.0, 70.0, 100.0)
}

static SLEEP: FocusConfig = FocusConfig {
    mode: FocusMode::Sleep,
    label: "Sleep",
    description: "Nightly sleep duration against the sleep score.",
    unit: None,
    series: &[
        SeriesSpec {
            metric: MetricKey::SleepMinutes,
            label: "Time asleep",
            color: "#6366f1",
            axis: Axis::Left,
            format: ValueFormat::Custom(format_duration_minutes),
        },
        SeriesSpec {
            metric: MetricKey::SleepScore,
            label: "Sleep score",
            color: "#22d3ee",
            axis: Axis::Right,
            format: ValueFormat::Decimals(0),
        },
    ],
    axes: &[
        AxisSpec {
            axis: Axis::Left,
            rule: DomainRule::Custom(sleep_minutes_domain),
            tick_format: Some(format_hours_tick),
        },
        AxisSpec {
            axis: Axis::Right,
            rule: DomainRule::Bounds {
                min: Some(0.0),
                max: Some(100.0),
            },
            tick_format: None,
        },
    ],
    spotlight: MetricKey::SleepMinutes,
    secondary_spotlight: Some(MetricKey::SleepScore),
};

static STRESS: FocusConfig = FocusConfig {
    mode: FocusMode::Stress,
    label: "Stress",
    description: "Daily stress score on a 0-100 scale.",
    unit: None,
    series: &[SeriesSpec {
        metric: MetricKey::Stress,
        label: "Stress",
        color: "#f97316",
        axis: Axis::Left,
        format: ValueFormat::Decimals(0),
    }],
    axes: &[AxisSpec {
        axis: Axis::Left,
        rule: DomainRule::Bounds {
            min: Some(0.0),
            max: Some(100.0),
        },
        tick_format: None,
    }],
    spotlight: MetricKey::Stress,
    secondary_spotlight: None,
};

static HEART_RATE: FocusConfig = FocusConfig {
    mode: FocusMode::HeartRate,
    label: "Heart rate",
    description: "Average heart rate with the daily low and high.",
    unit: Some("bpm"),
    series: &[
        SeriesSpec {
            metric: MetricKey::HeartRate,
            label: "Average",
            color: "#ef4444",
            axis: Axis::Left,
            format: ValueFormat::Decimals(0),
        },
        SeriesSpec {
            metric: MetricKey::HeartRateMin,
            label: "Low",
            color: "#fca5a5",
            axis: Axis::Left,
            format: ValueFormat::Decimals(0),
        },
        SeriesSpec {
            metric: MetricKey::HeartRateMax,
            label: "High",
            color: "#b91c1c",
            axis: Axis::Left,
            format: ValueFormat::Decimals(0),
        },
    ],
    axes: &[AxisSpec {
        axis: Axis::Left,
        rule: DomainRule::Custom(heart_rate_domain),
        tick_format: None,
    }],
    spotlight: MetricKey::HeartRate,
    secondary_spotlight: Some(MetricKey::HeartRateMin),
};

static OXYGENATION: FocusConfig = FocusConfig {
    mode: FocusMode::Oxygenation,
    label: "Oxygenation",
    description: "Blood oxygen saturation with the daily low and high.",
    unit: Some("%"),
    series: &[
        SeriesSpec {
            metric: MetricKey::Spo2,
            label: "Average",
            color: "#0ea5e9",
            axis: Axis::Left,
            format: ValueFormat::Decimals(1),
        },
        SeriesSpec {
            metric: MetricKey::Spo2Min,
            label: "Low",
            color: "#7dd3fc",
            axis: Axis::Left,
            format: ValueFormat::Decimals(1),
        },
        SeriesSpec {
            metric: MetricKey::Spo2Max,
            label: "High",
            color: "#0369a1",
            axis: Axis::Left,
            format: ValueFormat::Decimals(1),
        },
    ],
    axes: &[AxisSpec {
        axis: Axis::Left,
        rule: DomainRule::Custom(oxygenation_domain),
        tick_format: None,
    }],
    spotlight: MetricKey::Spo2,
    secondary_spotlight: Some(MetricKey::Spo2Min),
};

static ACTIVITY: FocusConfig = FocusConfig {
    mode: FocusMode::Activity,
    label: "Activity",
    description: "Steps compared with calories burned.",
    unit: None,
    series: &[
        SeriesSpec {
            metric: MetricKey::Steps,
            label: "Steps",
            color: "#10b981",
            axis: Axis::Left,
            format: ValueFormat::Default,
        },
        SeriesSpec {
            metric: MetricKey::Calories,
            label: "Calories",
            color: "#eab308",
            axis: Axis::Right,
            format: ValueFormat::Default,
        },
    ],
    axes: &[
        AxisSpec {
            axis: Axis::Left,
            rule: DomainRule::Bounds {
                min: Some(0.0),
                max: None,
            },
            tick_format: None,
        },
        AxisSpec {
            axis: Axis::Right,
            rule: DomainRule::Bounds {
                min: Some(0.0),
                max: None,
            },
            tick_format: None,
        },
    ],
    spotlight: MetricKey::Steps,
    secondary_spotlight: Some(MetricKey::Calories),
};

pub fn config_for(mode: FocusMode) -> &'static FocusConfig {
    match mode {
        FocusMode::Sleep => &SLEEP,
        FocusMode::Stress => &STRESS,
        FocusMode::HeartRate => &HEART_RATE,
        FocusMode::Oxygenation => &OXYGENATION,
        FocusMode::Activity => &ACTIVITY,
    }
}
