use crate::domain::error::DashboardError;
use crate::domain::window::Timeframe;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = "config/dashboard";
const ENV_PREFIX: &str = "HEALTH_DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub samples_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub default_timeframe_days: u32,
}

impl DashboardSettings {
    pub fn default_timeframe(&self) -> Result<Timeframe, DashboardError> {
        Timeframe::try_from(self.default_timeframe_days)
    }
}

/// Defaults, then the config file (required only when given explicitly), then
/// `HEALTH_DASHBOARD__SECTION__KEY` environment variables.
pub fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("data.samples_path", "data/samples.json")?
        .set_default("dashboard.default_timeframe_days", 14)?
        .add_source(config::File::with_name(path.unwrap_or(DEFAULT_CONFIG)).required(path.is_some()))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
