// Rolling window selection over the sample store
use super::error::DashboardError;
use super::sample::{Sample, SampleStore};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Week,
    Fortnight,
    Month,
    Quarter,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Week,
        Timeframe::Fortnight,
        Timeframe::Month,
        Timeframe::Quarter,
    ];

    pub fn days(&self) -> u32 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Fortnight => 14,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
        }
    }
}

impl TryFrom<u32> for Timeframe {
    type Error = DashboardError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Timeframe::ALL
            .into_iter()
            .find(|t| t.days() == days)
            .ok_or(DashboardError::UnsupportedTimeframe(days))
    }
}

/// Inclusive bounds of a selected window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowBounds {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Window anchored at the latest sample, not at the current time.
pub fn bounds(store: &SampleStore, timeframe: Timeframe) -> Option<WindowBounds> {
    let anchor = store.latest()?.timestamp;
    let start = anchor - Duration::days(i64::from(timeframe.days()) - 1);
    Some(WindowBounds { start, end: anchor })
}

/// Trailing samples within `[anchor - (days - 1), anchor]`, in store order.
pub fn select(store: &SampleStore, timeframe: Timeframe) -> &[Sample] {
    let Some(window) = bounds(store, timeframe) else {
        return &[];
    };

    let samples = store.samples();
    let first = samples.partition_point(|s| s.timestamp < window.start);
    &samples[first..]
}
