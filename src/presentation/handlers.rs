// HTTP request handlers
use crate::application::dashboard_service::FocusEntry;
use crate::domain::dashboard::DashboardView;
use crate::domain::focus::FocusMode;
use crate::domain::window::Timeframe;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RangeQuery {
    pub days: Option<u32>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the available focus modes
pub async fn list_focus_modes(State(state): State<Arc<AppState>>) -> Json<Vec<FocusEntry>> {
    Json(state.dashboard_service.focus_modes())
}

/// Dashboard view for one focus mode over the requested number of days
pub async fn get_dashboard(
    Path(focus): Path<String>,
    Query(query): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Arc<DashboardView>>, ApiError> {
    let focus: FocusMode = focus.parse()?;
    let timeframe = match query.days {
        Some(days) => Timeframe::try_from(days)?,
        None => state.default_timeframe,
    };

    Ok(Json(state.dashboard_service.get_dashboard(timeframe, focus)))
}
