// JSON file repository - reads the normalizer's output
use crate::application::sample_repository::SampleRepository;
use crate::domain::sample::{Sample, SampleRecord};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Records that do not describe a sample are skipped, not fatal.
    pub fn parse_samples(json: &str) -> Result<Vec<Sample>> {
        let records: Vec<serde_json::Value> =
            serde_json::from_str(json).context("Sample data is not a JSON array")?;

        let mut samples = Vec::with_capacity(records.len());
        for (index, value) in records.into_iter().enumerate() {
            let sample = serde_json::from_value::<SampleRecord>(value)
                .map_err(anyhow::Error::from)
                .and_then(|record| Ok(Sample::try_from(record)?));

            match sample {
                Ok(sample) => samples.push(sample),
                Err(e) => tracing::warn!(index, error = %e, "skipping sample record"),
            }
        }

        Ok(samples)
    }
}

impl SampleRepository for JsonFileRepository {
    fn load_samples(&self) -> Result<Vec<Sample>> {
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read samples from {}", self.path.display()))?;
        Self::parse_samples(&json)
    }
}
