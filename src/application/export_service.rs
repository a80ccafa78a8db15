// Export service - Use case for converting a CSV export into sample JSON
use crate::domain::record::normalize_csv;

/// Normalize a CSV export into a pretty-printed JSON array of records.
pub fn convert_export(text: &str) -> anyhow::Result<String> {
    let records = normalize_csv(text)?;
    tracing::info!(records = records.len(), "normalized export");
    Ok(serde_json::to_string_pretty(&records)?)
}
