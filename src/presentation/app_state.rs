// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::domain::window::Timeframe;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub default_timeframe: Timeframe,
}
