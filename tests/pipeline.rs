use health_dashboard::application::dashboard_service::DashboardService;
use health_dashboard::application::export_service::convert_export;
use health_dashboard::domain::axis::{Axis, AxisDomain};
use health_dashboard::domain::focus::FocusMode;
use health_dashboard::domain::sample::SampleStore;
use health_dashboard::domain::window::Timeframe;
use health_dashboard::infrastructure::json_repository::JsonFileRepository;

const EXPORT: &str = include_str!("../data/export.csv");
const SAMPLES: &str = include_str!("../data/samples.json");

fn service() -> DashboardService {
    let json = convert_export(EXPORT).unwrap();
    let samples = JsonFileRepository::parse_samples(&json).unwrap();
    DashboardService::new(SampleStore::new(samples).unwrap())
}

#[test]
fn export_converts_to_bundled_samples() {
    assert_eq!(convert_export(EXPORT).unwrap(), SAMPLES.trim_end());
}

#[test]
fn heart_rate_week() {
    let view = service().get_dashboard(Timeframe::Week, FocusMode::HeartRate);

    assert_eq!(view.samples.len(), 7);
    assert_eq!(view.spotlight.summary.latest, Some(64.0));
    assert_eq!(view.spotlight.summary.change, Some(0.0));
    assert_eq!(view.spotlight.summary.average, Some(64.0));
    assert_eq!(view.spotlight.change.as_deref(), Some("0"));
    assert_eq!(view.unit.as_deref(), Some("bpm"));
    assert_eq!(view.axes.len(), 1);
}

#[test]
fn sleep_skips_missing_night() {
    let view = service().get_dashboard(Timeframe::Week, FocusMode::Sleep);

    let minutes = &view.series[0];
    assert_eq!(minutes.points.len(), 7);
    assert_eq!(minutes.points[3].date, "2024-03-04");
    assert_eq!(minutes.points[3].value, None);

    assert_eq!(view.spotlight.latest.as_deref(), Some("7h 20m"));
    assert_eq!(view.spotlight.change.as_deref(), Some("+8m"));
    assert_eq!(view.spotlight.average.as_deref(), Some("7h 19m"));

    let score = view.secondary_spotlight.as_ref().unwrap();
    assert_eq!(score.latest.as_deref(), Some("82"));

    let right = view.axes.iter().find(|a| a.side == Axis::Right).unwrap();
    assert_eq!(right.domain, AxisDomain::new(0.0, 100.0));
    assert_eq!(right.ticks[2].label, "50");
}

#[test]
fn oxygenation_axis_is_capped_at_full_saturation() {
    let view = service().get_dashboard(Timeframe::Week, FocusMode::Oxygenation);
    assert_eq!(view.axes[0].domain, AxisDomain::new(88.0, 100.0));
    assert_eq!(view.spotlight.latest.as_deref(), Some("96.0"));
}

#[test]
fn shorter_timeframe_than_history_is_a_suffix() {
    let service = service();
    let week = service.get_dashboard(Timeframe::Week, FocusMode::Stress);
    let quarter = service.get_dashboard(Timeframe::Quarter, FocusMode::Stress);

    assert_eq!(week.samples, quarter.samples);
    assert_eq!(week.spotlight.summary.change, Some(-2.0));
}
