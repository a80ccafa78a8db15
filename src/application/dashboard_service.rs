// Dashboard service - Use case for building dashboard views
use crate::application::sample_repository::SampleRepository;
use crate::domain::dashboard::DashboardView;
use crate::domain::focus::{config_for, FocusMode};
use crate::domain::sample::SampleStore;
use crate::domain::window::{self, Timeframe};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

type ViewKey = (Timeframe, FocusMode);

#[derive(Debug, Clone, Serialize)]
pub struct FocusEntry {
    pub mode: FocusMode,
    pub label: &'static str,
    pub description: &'static str,
}

/// Views are pure functions of (timeframe, focus) and are cached per pair.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<SampleStore>,
    views: Arc<RwLock<HashMap<ViewKey, Arc<DashboardView>>>>,
}

impl DashboardService {
    pub fn new(store: SampleStore) -> Self {
        Self {
            store: Arc::new(store),
            views: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn from_repository(repository: &dyn SampleRepository) -> anyhow::Result<Self> {
        let store = SampleStore::new(repository.load_samples()?)?;
        if store.is_empty() {
            tracing::warn!("sample store is empty, every view will be blank");
        } else {
            tracing::info!(samples = store.len(), "sample store loaded");
        }
        Ok(Self::new(store))
    }

    pub fn focus_modes(&self) -> Vec<FocusEntry> {
        FocusMode::ALL
            .into_iter()
            .map(|mode| {
                let config = config_for(mode);
                FocusEntry {
                    mode,
                    label: config.label,
                    description: config.description,
                }
            })
            .collect()
    }

    pub fn get_dashboard(&self, timeframe: Timeframe, focus: FocusMode) -> Arc<DashboardView> {
        let key = (timeframe, focus);
        if let Some(view) = self
            .views
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return view.clone();
        }

        let view = Arc::new(self.build(timeframe, focus));
        self.views
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(view)
            .clone()
    }

    fn build(&self, timeframe: Timeframe, focus: FocusMode) -> DashboardView {
        let samples = window::select(&self.store, timeframe);
        let bounds = window::bounds(&self.store, timeframe);

        tracing::debug!(
            focus = focus.as_str(),
            days = timeframe.days(),
            samples = samples.len(),
            "building dashboard view"
        );

        DashboardView::build(config_for(focus), timeframe.days(), bounds, samples)
    }
}
