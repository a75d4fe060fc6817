//! Application state and navigation logic.

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::metric::{catalog, MetricId, MetricSpec};
use crate::data::threshold::ThresholdBands;
use crate::data::{Alert, AlertLog, Attention, History, TelemetryData};
use crate::settings::{Settings, ThemePreference};
use crate::sim::series::{self, SeriesSpec, TimeRange, TimeSeries};
use crate::source::TelemetrySource;
use crate::ui::Theme;

/// The current view/tab in the TUI.
///
/// Alert detail is shown as an overlay (controlled by
/// `App::show_detail_overlay`) rather than as a separate view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Gauges, KPI cards, and the recent-alert strip.
    Overview,
    /// Time-series charts with the range selector.
    Charts,
    /// The filterable alert log.
    Alerts,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Charts,
            View::Charts => View::Alerts,
            View::Alerts => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Overview => View::Alerts,
            View::Charts => View::Overview,
            View::Alerts => View::Charts,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Charts => "Charts",
            View::Alerts => "Alerts",
        }
    }
}

/// The chart view's regenerated-wholesale series set.
#[derive(Debug, Clone)]
pub struct ChartSet {
    /// One window per charted metric, catalog order (gas concentration is a
    /// gauge-only metric and has no chart).
    pub metrics: Vec<(MetricSpec, TimeSeries)>,
    /// The scripted anomaly-demonstration series.
    pub false_signal: TimeSeries,
}

impl ChartSet {
    fn generate(rng: &mut StdRng, specs: &[MetricSpec], range: TimeRange) -> Self {
        let metrics = specs
            .iter()
            .filter(|spec| spec.id != MetricId::GasConcentration)
            .map(|spec| {
                let window =
                    series::generate(rng, range, &SeriesSpec::normal(spec.baseline, spec.step));
                (spec.clone(), window)
            })
            .collect();
        let false_signal = series::generate(rng, range, &SeriesSpec::false_signal());
        Self {
            metrics,
            false_signal,
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    // Telemetry
    source: Box<dyn TelemetrySource>,
    specs: Vec<MetricSpec>,
    pub data: Option<TelemetryData>,
    pub history: History,
    pub load_error: Option<String>,

    // Alerts
    pub alerts: AlertLog,
    pub alert_filter: Option<Attention>,

    // Charts
    pub charts: ChartSet,
    chart_rng: StdRng,
    pub time_range: TimeRange,

    // Refresh lifecycle (the main loop owns the actual timer)
    pub auto_refresh: bool,
    pub refresh_interval: Duration,

    // Navigation state
    pub selected_metric_index: usize,
    pub selected_alert_index: usize,

    // Search/filter
    pub filter_text: String,
    pub filter_active: bool,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over the given telemetry source.
    pub fn new(source: Box<dyn TelemetrySource>, settings: Settings) -> Self {
        let mut specs = catalog();
        // The gas bands are user-adjustable; everything else is fixed.
        if let Some(gas) = specs.iter_mut().find(|s| s.id == MetricId::GasConcentration) {
            gas.bands = ThresholdBands::new(
                crate::data::Status::Safe,
                vec![
                    (settings.gas_warning, crate::data::Status::Warning),
                    (settings.gas_danger, crate::data::Status::Danger),
                ],
            );
        }

        let mut chart_rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let time_range = TimeRange::default();
        let charts = ChartSet::generate(&mut chart_rng, &specs, time_range);

        let theme = match settings.theme {
            ThemePreference::Auto => Theme::auto_detect(),
            ThemePreference::Dark => Theme::dark(),
            ThemePreference::Light => Theme::light(),
        };

        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            show_detail_overlay: false,
            source,
            specs,
            data: None,
            history: History::new(),
            load_error: None,
            alerts: AlertLog::seeded(),
            alert_filter: None,
            charts,
            chart_rng,
            time_range,
            auto_refresh: true,
            refresh_interval: Duration::from_secs(settings.refresh_secs),
            selected_metric_index: 0,
            selected_alert_index: 0,
            filter_text: String::new(),
            filter_active: false,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current telemetry source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the telemetry source and rebuild display state.
    ///
    /// Returns Ok(true) if a new snapshot was processed, Ok(false) if the
    /// source had nothing new (or is in an error state).
    pub fn refresh(&mut self) -> Result<bool> {
        if let Some(err) = self.source.error() {
            self.load_error = Some(err.to_string());
            return Ok(false);
        }

        if let Some(snapshot) = self.source.poll() {
            let data = TelemetryData::classify(&self.specs, &snapshot);

            // Record history before swapping in the new data.
            self.history.record(&data);
            self.data = Some(data);
            self.load_error = None;

            // Chart windows are regenerated wholesale on every tick.
            self.regenerate_charts();
            Ok(true)
        } else {
            // Poll may have surfaced a fresh error (e.g. replay file gone).
            if let Some(err) = self.source.error() {
                self.load_error = Some(err.to_string());
            }
            Ok(false)
        }
    }

    /// Throw away the current chart windows and generate new ones.
    pub fn regenerate_charts(&mut self) {
        self.charts = ChartSet::generate(&mut self.chart_rng, &self.specs, self.time_range);
    }

    /// Switch the chart window and regenerate.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
        self.regenerate_charts();
    }

    /// Cycle to the next chart window.
    pub fn cycle_time_range(&mut self) {
        self.set_time_range(self.time_range.next());
    }

    /// Pause or resume the auto-refresh timer.
    pub fn toggle_auto_refresh(&mut self) {
        self.auto_refresh = !self.auto_refresh;
        let state = if self.auto_refresh { "on" } else { "paused" };
        self.set_status_message(format!("Auto-refresh {}", state));
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.set_view(self.current_view.next());
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.set_view(self.current_view.prev());
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
        self.show_detail_overlay = false;
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        match self.current_view {
            View::Overview => {
                let count = self.visible_metric_count();
                let max = count.saturating_sub(1);
                self.selected_metric_index = (self.selected_metric_index + n).min(max);
            }
            View::Alerts => {
                let count = self.visible_alerts().len();
                let max = count.saturating_sub(1);
                self.selected_alert_index = (self.selected_alert_index + n).min(max);
            }
            View::Charts => {}
        }
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        match self.current_view {
            View::Overview => {
                self.selected_metric_index = self.selected_metric_index.saturating_sub(n);
            }
            View::Alerts => {
                self.selected_alert_index = self.selected_alert_index.saturating_sub(n);
            }
            View::Charts => {}
        }
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        match self.current_view {
            View::Overview => self.selected_metric_index = 0,
            View::Alerts => self.selected_alert_index = 0,
            View::Charts => {}
        }
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        match self.current_view {
            View::Overview => {
                self.selected_metric_index = self.visible_metric_count().saturating_sub(1);
            }
            View::Alerts => {
                self.selected_alert_index = self.visible_alerts().len().saturating_sub(1);
            }
            View::Charts => {}
        }
    }

    /// Metric rows after applying the text filter.
    pub fn visible_metric_count(&self) -> usize {
        let Some(ref data) = self.data else {
            return 0;
        };
        data.readings
            .iter()
            .filter(|r| self.matches_filter(r.spec.name))
            .count()
    }

    /// Alerts after applying the attention pill and the text filter.
    pub fn visible_alerts(&self) -> Vec<&Alert> {
        self.alerts
            .alerts
            .iter()
            .filter(|a| self.alert_filter.map_or(true, |att| a.attention == att))
            .filter(|a| {
                self.matches_filter(a.title)
                    || self.matches_filter(a.area)
                    || self.matches_filter(a.sensor)
            })
            .collect()
    }

    /// Id of the alert under the cursor, if any.
    pub fn selected_alert_id(&self) -> Option<u32> {
        self.visible_alerts()
            .get(self.selected_alert_index)
            .map(|a| a.id)
    }

    /// Acknowledge the alert under the cursor.
    pub fn acknowledge_selected(&mut self) {
        let Some(id) = self.selected_alert_id() else {
            return;
        };
        let already = self
            .alerts
            .alerts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.acknowledged)
            .unwrap_or(false);
        self.alerts.acknowledge(id);
        if already {
            self.set_status_message(format!("Alert #{} was already acknowledged", id));
        } else {
            self.set_status_message(format!("Alert #{} acknowledged", id));
        }
    }

    /// Cycle the attention filter pill: All → Normal → High → Low → All.
    pub fn cycle_alert_filter(&mut self) {
        self.alert_filter = match self.alert_filter {
            None => Some(Attention::Normal),
            Some(Attention::Normal) => Some(Attention::High),
            Some(Attention::High) => Some(Attention::Low),
            Some(Attention::Low) => None,
        };
        self.selected_alert_index = 0;
    }

    /// Open the detail overlay for the current selection.
    pub fn enter_detail(&mut self) {
        if self.current_view == View::Alerts && !self.visible_alerts().is_empty() {
            self.show_detail_overlay = true;
        }
    }

    /// Navigate back: close overlays first, then fall back to Overview.
    pub fn go_back(&mut self) {
        if self.show_detail_overlay {
            self.show_detail_overlay = false;
            return;
        }
        if self.current_view != View::Overview {
            self.current_view = View::Overview;
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Enter filter input mode (starts capturing keystrokes for search).
    pub fn start_filter(&mut self) {
        self.filter_active = true;
    }

    /// Exit filter input mode without clearing the filter text.
    pub fn cancel_filter(&mut self) {
        self.filter_active = false;
    }

    /// Clear the filter text and exit filter mode.
    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
        self.filter_active = false;
        self.selected_alert_index = 0;
    }

    /// Append a character to the filter text.
    pub fn filter_push(&mut self, c: char) {
        self.filter_text.push(c);
        self.selected_alert_index = 0;
    }

    /// Remove the last character from the filter text.
    pub fn filter_pop(&mut self) {
        self.filter_text.pop();
    }

    /// Check if a name matches the current filter.
    pub fn matches_filter(&self, name: &str) -> bool {
        if self.filter_text.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.filter_text.to_lowercase())
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export current station state and the alert log to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };

        let json = serde_json::to_string_pretty(&self.export_value(data))?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn export_value(&self, data: &TelemetryData) -> serde_json::Value {
        use crate::data::Status;

        let readings: Vec<serde_json::Value> = data
            .readings
            .iter()
            .map(|r| {
                serde_json::json!({
                    "metric": r.spec.id,
                    "name": r.spec.name,
                    "value": r.value,
                    "unit": r.spec.unit,
                    "min": r.spec.min,
                    "max": r.spec.max,
                    "status": r.status.label(),
                })
            })
            .collect();

        serde_json::json!({
            "station": {
                "status": data.station_status().label(),
                "safe": data.count(Status::Safe),
                "warning": data.count(Status::Warning),
                "danger": data.count(Status::Danger),
            },
            "readings": readings,
            "alerts": self.alerts.alerts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SimSource;

    fn test_app() -> App {
        let mut settings = Settings::default();
        settings.seed = Some(1);
        App::new(Box::new(SimSource::with_seed(1)), settings)
    }

    #[test]
    fn test_view_cycle_is_closed() {
        let mut view = View::Overview;
        for _ in 0..3 {
            view = view.next();
        }
        assert_eq!(view, View::Overview);
        assert_eq!(View::Overview.prev(), View::Alerts);
    }

    #[test]
    fn test_refresh_populates_data_and_history() {
        let mut app = test_app();
        assert!(app.data.is_none());

        assert!(app.refresh().unwrap());
        assert!(app.data.is_some());
        assert_eq!(app.history.ticks(), 1);

        assert!(app.refresh().unwrap());
        assert_eq!(app.history.ticks(), 2);
    }

    #[test]
    fn test_range_change_regenerates_charts() {
        let mut app = test_app();
        assert_eq!(app.charts.false_signal.len(), series::SAMPLES_PER_WINDOW);

        let before: Vec<f64> = app.charts.false_signal.values().collect();
        app.cycle_time_range();
        assert_eq!(app.time_range, TimeRange::Hour6);
        let after: Vec<f64> = app.charts.false_signal.values().collect();

        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
    }

    #[test]
    fn test_alert_filter_and_selection() {
        let mut app = test_app();
        assert_eq!(app.visible_alerts().len(), 4);

        app.cycle_alert_filter(); // Normal
        assert_eq!(app.visible_alerts().len(), 2);
        app.cycle_alert_filter(); // High attention
        assert_eq!(app.visible_alerts().len(), 1);
        assert_eq!(app.visible_alerts()[0].id, 1);
        app.cycle_alert_filter(); // Low attention
        app.cycle_alert_filter(); // back to All
        assert_eq!(app.visible_alerts().len(), 4);
    }

    #[test]
    fn test_acknowledge_selected_is_idempotent() {
        let mut app = test_app();
        app.current_view = View::Alerts;
        app.selected_alert_index = 0;

        app.acknowledge_selected();
        assert!(app.alerts.alerts[0].acknowledged);

        app.acknowledge_selected();
        assert!(app.alerts.alerts[0].acknowledged);
        assert!(app
            .get_status_message()
            .unwrap()
            .contains("already acknowledged"));
    }

    #[test]
    fn test_text_filter_narrows_alerts() {
        let mut app = test_app();
        app.filter_text = "zone a".to_string();
        let visible = app.visible_alerts();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_gas_band_override_applies() {
        let mut settings = Settings::default();
        settings.seed = Some(1);
        settings.gas_warning = 40.0;
        settings.gas_danger = 60.0;
        let mut app = App::new(Box::new(SimSource::with_seed(1)), settings);

        app.refresh().unwrap();
        let gas = &app.data.as_ref().unwrap().readings[0];
        // The walk starts near 45, which the tightened bands classify as
        // at least Warning.
        assert!(gas.status >= crate::data::Status::Warning);
    }

    #[test]
    fn test_export_without_data_fails() {
        let app = test_app();
        let dir = tempfile::tempdir().unwrap();
        let err = app.export_state(&dir.path().join("out.json")).unwrap_err();
        assert!(err.to_string().contains("No data"));
    }

    #[test]
    fn test_export_contains_readings_and_alerts() {
        let mut app = test_app();
        app.refresh().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        app.export_state(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["readings"].as_array().unwrap().len(), 5);
        assert_eq!(value["alerts"].as_array().unwrap().len(), 4);
        assert!(value["alerts"][0]["acknowledged"].is_boolean());
        assert!(value["station"]["status"].is_string());
    }
}
