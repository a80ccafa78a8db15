// Sample domain model - one day of health observations
use super::error::StoreError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The numeric fields a sample carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    HeartRate,
    HeartRateMin,
    HeartRateMax,
    Spo2,
    Spo2Min,
    Spo2Max,
    Steps,
    SleepMinutes,
    SleepScore,
    Stress,
    Calories,
}

impl MetricKey {
    pub const ALL: [MetricKey; 11] = [
        MetricKey::HeartRate,
        MetricKey::HeartRateMin,
        MetricKey::HeartRateMax,
        MetricKey::Spo2,
        MetricKey::Spo2Min,
        MetricKey::Spo2Max,
        MetricKey::Steps,
        MetricKey::SleepMinutes,
        MetricKey::SleepScore,
        MetricKey::Stress,
        MetricKey::Calories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::HeartRate => "heartRate",
            MetricKey::HeartRateMin => "heartRateMin",
            MetricKey::HeartRateMax => "heartRateMax",
            MetricKey::Spo2 => "spo2",
            MetricKey::Spo2Min => "spo2Min",
            MetricKey::Spo2Max => "spo2Max",
            MetricKey::Steps => "steps",
            MetricKey::SleepMinutes => "sleepMinutes",
            MetricKey::SleepScore => "sleepScore",
            MetricKey::Stress => "stress",
            MetricKey::Calories => "calories",
        }
    }

    /// Record keys accepted for this metric, canonical name first.
    pub fn record_keys(&self) -> &'static [&'static str] {
        match self {
            MetricKey::HeartRate => &["heartRate", "heartRateAvg", "avgHeartRate", "heartRateMean"],
            MetricKey::HeartRateMin => &["heartRateMin", "minHeartRate", "restingHeartRate"],
            MetricKey::HeartRateMax => &["heartRateMax", "maxHeartRate"],
            MetricKey::Spo2 => &["spo2", "spO2", "spO2Avg", "spo2Avg", "oxygenSaturation"],
            MetricKey::Spo2Min => &["spo2Min", "spO2Min", "minSpo2", "minSpO2"],
            MetricKey::Spo2Max => &["spo2Max", "spO2Max", "maxSpo2", "maxSpO2"],
            MetricKey::Steps => &["steps", "stepCount"],
            MetricKey::SleepMinutes => &["sleepMinutes", "sleep", "sleepDuration", "sleepMin"],
            MetricKey::SleepScore => &["sleepScore"],
            MetricKey::Stress => &["stress", "stressScore", "stressLevel"],
            MetricKey::Calories => &["calories", "activeCalories", "caloriesKcal"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub heart_rate: Option<f64>,
    pub heart_rate_min: Option<f64>,
    pub heart_rate_max: Option<f64>,
    pub spo2: Option<f64>,
    pub spo2_min: Option<f64>,
    pub spo2_max: Option<f64>,
    pub steps: Option<f64>,
    pub sleep_minutes: Option<f64>,
    pub sleep_score: Option<f64>,
    pub stress: Option<f64>,
    pub calories: Option<f64>,
}

impl Sample {
    /// A sample with every metric absent.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            heart_rate: None,
            heart_rate_min: None,
            heart_rate_max: None,
            spo2: None,
            spo2_min: None,
            spo2_max: None,
            steps: None,
            sleep_minutes: None,
            sleep_score: None,
            stress: None,
            calories: None,
        }
    }

    pub fn with(mut self, key: MetricKey, value: f64) -> Self {
        *self.slot(key) = Some(value);
        self
    }

    /// Value of `key`, or `None` when absent or not finite.
    pub fn metric(&self, key: MetricKey) -> Option<f64> {
        let value = match key {
            MetricKey::HeartRate => self.heart_rate,
            MetricKey::HeartRateMin => self.heart_rate_min,
            MetricKey::HeartRateMax => self.heart_rate_max,
            MetricKey::Spo2 => self.spo2,
            MetricKey::Spo2Min => self.spo2_min,
            MetricKey::Spo2Max => self.spo2_max,
            MetricKey::Steps => self.steps,
            MetricKey::SleepMinutes => self.sleep_minutes,
            MetricKey::SleepScore => self.sleep_score,
            MetricKey::Stress => self.stress,
            MetricKey::Calories => self.calories,
        };
        value.filter(|v| v.is_finite())
    }

    fn slot(&mut self, key: MetricKey) -> &mut Option<f64> {
        match key {
            MetricKey::HeartRate => &mut self.heart_rate,
            MetricKey::HeartRateMin => &mut self.heart_rate_min,
            MetricKey::HeartRateMax => &mut self.heart_rate_max,
            MetricKey::Spo2 => &mut self.spo2,
            MetricKey::Spo2Min => &mut self.spo2_min,
            MetricKey::Spo2Max => &mut self.spo2_max,
            MetricKey::Steps => &mut self.steps,
            MetricKey::SleepMinutes => &mut self.sleep_minutes,
            MetricKey::SleepScore => &mut self.sleep_score,
            MetricKey::Stress => &mut self.stress,
            MetricKey::Calories => &mut self.calories,
        }
    }

    /// Calendar date of the sample in `YYYY-MM-DD` form.
    pub fn date_label(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Record keys that may carry the sample date, in priority order.
const DATE_KEYS: [&str; 3] = ["date", "timestamp", "day"];

/// Wire form of a sample as written by the CSV normalizer: one JSON object.
///
/// Exports often carry several headers for one metric (`Calories` and
/// `Active Calories`), so keys are resolved per metric rather than per field.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SampleRecord(serde_json::Map<String, serde_json::Value>);

impl SampleRecord {
    /// First present key wins; later spellings of the same metric are ignored.
    fn lookup<'a>(&'a self, keys: &[&str]) -> Option<&'a serde_json::Value> {
        keys.iter().find_map(|key| self.0.get(*key))
    }

    /// Numbers pass through; the empty-string sentinel and retained raw text become absent.
    fn metric(&self, key: MetricKey) -> Option<f64> {
        self.lookup(key.record_keys())
            .and_then(serde_json::Value::as_f64)
            .filter(|v| v.is_finite())
    }
}

impl TryFrom<SampleRecord> for Sample {
    type Error = StoreError;

    fn try_from(record: SampleRecord) -> Result<Self, Self::Error> {
        let timestamp = match record.lookup(&DATE_KEYS) {
            None => return Err(StoreError::MissingTimestamp),
            Some(serde_json::Value::String(raw)) => {
                parse_timestamp(raw).ok_or_else(|| StoreError::InvalidTimestamp(raw.clone()))?
            }
            Some(other) => return Err(StoreError::InvalidTimestamp(other.to_string())),
        };

        Ok(MetricKey::ALL
            .into_iter()
            .fold(Sample::new(timestamp), |sample, key| match record.metric(key) {
                Some(value) => sample.with(key, value),
                None => sample,
            }))
    }
}

/// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339, or a naive ISO date-time taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Time-ordered, read-only sequence of samples.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    pub fn new(mut samples: Vec<Sample>) -> Result<Self, StoreError> {
        samples.sort_by_key(|s| s.timestamp);
        if let Some(pair) = samples.windows(2).find(|w| w[0].timestamp == w[1].timestamp) {
            return Err(StoreError::DuplicateTimestamp(pair[0].timestamp));
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str) -> DateTime<Utc> {
        parse_timestamp(date).unwrap()
    }

    #[test]
    fn test_store_sorts_by_timestamp() {
        let store = SampleStore::new(vec![
            Sample::new(day("2024-01-03")),
            Sample::new(day("2024-01-01")),
            Sample::new(day("2024-01-02")),
        ])
        .unwrap();

        let dates: Vec<String> = store.samples().iter().map(|s| s.date_label()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(store.latest().unwrap().date_label(), "2024-01-03");
    }

    #[test]
    fn test_store_rejects_duplicate_timestamps() {
        let result = SampleStore::new(vec![
            Sample::new(day("2024-01-01")),
            Sample::new(day("2024-01-01")),
        ]);
        assert_eq!(result.unwrap_err(), StoreError::DuplicateTimestamp(day("2024-01-01")));
    }

    #[test]
    fn test_record_treats_text_as_absent() {
        let json = r#"{"date":"2024-01-05","heartRate":72,"steps":"","stress":"n/a","spO2Avg":96.5}"#;
        let record: SampleRecord = serde_json::from_str(json).unwrap();
        let sample = Sample::try_from(record).unwrap();

        assert_eq!(sample.metric(MetricKey::HeartRate), Some(72.0));
        assert_eq!(sample.metric(MetricKey::Steps), None);
        assert_eq!(sample.metric(MetricKey::Stress), None);
        assert_eq!(sample.metric(MetricKey::Spo2), Some(96.5));
        assert_eq!(sample.metric(MetricKey::Calories), None);
    }

    #[test]
    fn test_record_with_raw_date_is_rejected() {
        let record: SampleRecord = serde_json::from_str(r#"{"date":"yesterday"}"#).unwrap();
        assert_eq!(
            Sample::try_from(record).unwrap_err(),
            StoreError::InvalidTimestamp("yesterday".to_string())
        );
    }

    #[test]
    fn test_record_with_overlapping_keys_keeps_first_spelling() {
        let json = r#"{"date":"2024-01-05","steps":1000,"calories":2200,"activeCalories":400,"minHeartRate":50,"restingHeartRate":55}"#;
        let record: SampleRecord = serde_json::from_str(json).unwrap();
        let sample = Sample::try_from(record).unwrap();

        assert_eq!(sample.metric(MetricKey::Steps), Some(1000.0));
        assert_eq!(sample.metric(MetricKey::Calories), Some(2200.0));
        assert_eq!(sample.metric(MetricKey::HeartRateMin), Some(50.0));
    }

    #[test]
    fn test_record_without_date_is_rejected() {
        let record: SampleRecord = serde_json::from_str(r#"{"heartRate":68}"#).unwrap();
        assert_eq!(Sample::try_from(record).unwrap_err(), StoreError::MissingTimestamp);

        let record: SampleRecord = serde_json::from_str(r#"{"date":20240105}"#).unwrap();
        assert_eq!(
            Sample::try_from(record).unwrap_err(),
            StoreError::InvalidTimestamp("20240105".to_string())
        );
    }

    #[test]
    fn test_parse_timestamp_forms() {
        assert_eq!(day("2024-01-05").to_rfc3339(), "2024-01-05T00:00:00+00:00");
        assert_eq!(
            parse_timestamp("2024-01-05T08:30:00+02:00").unwrap().to_rfc3339(),
            "2024-01-05T06:30:00+00:00"
        );
        assert!(parse_timestamp("2024-01-05T08:30:00").is_some());
        assert!(parse_timestamp("5 Jan").is_none());
    }

    #[test]
    fn test_metric_ignores_non_finite() {
        let sample = Sample::new(day("2024-01-01")).with(MetricKey::Steps, f64::NAN);
        assert_eq!(sample.metric(MetricKey::Steps), None);
    }
}
