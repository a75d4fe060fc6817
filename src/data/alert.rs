//! The alert log: seed records, acknowledgment, and filtering.
//!
//! Alerts are created once at load from canned demonstration data. The
//! "analysis" text and signal statuses are static strings on the records,
//! not the output of any detection logic.

use serde::Serialize;

/// Alert severity, for list badges and row coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

/// Attention level assigned by the (canned) analysis text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attention {
    Normal,
    High,
    Low,
}

impl Attention {
    /// All filter pills in display order.
    pub const ALL: [Attention; 3] = [Attention::Normal, Attention::High, Attention::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Attention::Normal => "Normal",
            Attention::High => "High attention",
            Attention::Low => "Low attention",
        }
    }
}

/// Raw signal classification shown next to each alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalStatus {
    Hh,
    Ll,
    Normal,
}

impl SignalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SignalStatus::Hh => "HH",
            SignalStatus::Ll => "LL",
            SignalStatus::Normal => "Normal",
        }
    }
}

/// Progress state of a response action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Completed,
    InProgress,
    Running,
    Failed,
    Cancelled,
    Pending,
}

impl ActionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::Completed => "Completed",
            ActionStatus::InProgress => "In Progress",
            ActionStatus::Running => "Running",
            ActionStatus::Failed => "Failed",
            ActionStatus::Cancelled => "Cancelled",
            ActionStatus::Pending => "Pending",
        }
    }
}

/// A response step attached to an alert.
#[derive(Debug, Clone, Serialize)]
pub struct AlertAction {
    pub text: &'static str,
    pub status: ActionStatus,
}

/// One alert record.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    /// Relative label shown in lists ("2 min ago").
    pub raised: &'static str,
    /// Absolute timestamp shown in the detail overlay.
    pub raised_at: &'static str,
    pub sensor: &'static str,
    pub sensor_type: &'static str,
    pub area: &'static str,
    pub location: &'static str,
    pub signal: SignalStatus,
    pub attention: Attention,
    /// Canned assessment text.
    pub analysis: &'static str,
    /// Stated confidence of the assessment, percent.
    pub confidence: f64,
    pub current_value: f64,
    pub threshold_value: f64,
    pub unit: &'static str,
    pub trend: &'static str,
    /// Recent readings for the detail-overlay sparkline.
    pub sparkline: Vec<f64>,
    pub actions: Vec<AlertAction>,
    pub acknowledged: bool,
}

impl Alert {
    /// Mark the alert acknowledged.
    ///
    /// Idempotent: returns `true` only when the state actually changed.
    /// The flag never reverts.
    pub fn acknowledge(&mut self) -> bool {
        let changed = !self.acknowledged;
        self.acknowledged = true;
        changed
    }
}

/// The in-memory alert collection owned by the app.
#[derive(Debug, Clone)]
pub struct AlertLog {
    pub alerts: Vec<Alert>,
}

impl AlertLog {
    /// Load the canned demonstration alerts.
    pub fn seeded() -> Self {
        Self {
            alerts: seed_alerts(),
        }
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Acknowledge by id. Returns false for unknown ids.
    pub fn acknowledge(&mut self, id: u32) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.acknowledge();
                true
            }
            None => false,
        }
    }

    /// Alerts matching an attention pill (`None` = All).
    pub fn filtered(&self, attention: Option<Attention>) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| attention.map_or(true, |att| a.attention == att))
            .collect()
    }

    /// Count for one attention pill.
    pub fn count_for(&self, attention: Attention) -> usize {
        self.alerts.iter().filter(|a| a.attention == attention).count()
    }

    /// Most recent unacknowledged alerts, for the overview strip.
    pub fn recent_unacknowledged(&self, limit: usize) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| !a.acknowledged)
            .take(limit)
            .collect()
    }
}

/// The demonstration alert records, newest first.
fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            title: "Gas Level Critical",
            description: "Gas concentration above safety threshold in Zone A",
            severity: Severity::High,
            raised: "2 min ago",
            raised_at: "2024-01-15 14:28:00",
            sensor: "Gas-01",
            sensor_type: "Methane Detector",
            area: "Zone A",
            location: "Sector A-1, Level 2",
            signal: SignalStatus::Hh,
            attention: Attention::High,
            analysis: "Critical gas leak detected. Immediate evacuation recommended.",
            confidence: 98.5,
            current_value: 18.5,
            threshold_value: 15.0,
            unit: "ppm",
            trend: "Increasing",
            sparkline: vec![14.2, 15.8, 16.9, 17.8, 18.5],
            actions: vec![
                AlertAction {
                    text: "Evacuation initiated",
                    status: ActionStatus::Completed,
                },
                AlertAction {
                    text: "Emergency response team notified",
                    status: ActionStatus::InProgress,
                },
                AlertAction {
                    text: "Ventilation system activated",
                    status: ActionStatus::Running,
                },
            ],
            acknowledged: false,
        },
        Alert {
            id: 2,
            title: "Temperature Alert",
            description: "Temperature fluctuation detected in sector 3",
            severity: Severity::Medium,
            raised: "5 min ago",
            raised_at: "2024-01-15 14:25:00",
            sensor: "Temp-03",
            sensor_type: "Temperature Sensor",
            area: "Sector 3",
            location: "Sector 3-B, Compressor Bay",
            signal: SignalStatus::Hh,
            attention: Attention::Normal,
            analysis: "False alarm - calibration test in progress. No safety risk detected.",
            confidence: 96.8,
            current_value: 41.8,
            threshold_value: 45.0,
            unit: "°C",
            trend: "Stable",
            sparkline: vec![40.2, 40.8, 41.1, 41.5, 41.8],
            actions: vec![
                AlertAction {
                    text: "Calibration test confirmed",
                    status: ActionStatus::Completed,
                },
                AlertAction {
                    text: "Monitoring continues",
                    status: ActionStatus::Running,
                },
                AlertAction {
                    text: "No action required",
                    status: ActionStatus::Cancelled,
                },
            ],
            acknowledged: false,
        },
        Alert {
            id: 3,
            title: "System Maintenance",
            description: "Scheduled maintenance due for sensor array",
            severity: Severity::Low,
            raised: "1 hour ago",
            raised_at: "2024-01-15 13:30:00",
            sensor: "System",
            sensor_type: "System Monitor",
            area: "Network",
            location: "Control Room",
            signal: SignalStatus::Normal,
            attention: Attention::Normal,
            analysis: "Routine maintenance required within 24 hours.",
            confidence: 89.7,
            current_value: 0.0,
            threshold_value: 0.0,
            unit: "",
            trend: "Scheduled",
            sparkline: vec![0.0, 0.0, 0.0, 0.0, 0.0],
            actions: vec![
                AlertAction {
                    text: "Maintenance scheduled",
                    status: ActionStatus::Completed,
                },
                AlertAction {
                    text: "Technician assigned",
                    status: ActionStatus::Completed,
                },
                AlertAction {
                    text: "Parts ordered",
                    status: ActionStatus::InProgress,
                },
            ],
            acknowledged: false,
        },
        Alert {
            id: 4,
            title: "Network Latency",
            description: "Increased response time from remote sensors",
            severity: Severity::Medium,
            raised: "2 hours ago",
            raised_at: "2024-01-15 12:30:00",
            sensor: "Network",
            sensor_type: "Network Monitor",
            area: "Gateway",
            location: "Network Gateway Room",
            signal: SignalStatus::Ll,
            attention: Attention::Low,
            analysis: "Sensor malfunction detected. Signal unreliable, no actual safety concern.",
            confidence: 92.1,
            current_value: 145.0,
            threshold_value: 200.0,
            unit: "ms",
            trend: "Fluctuating",
            sparkline: vec![120.0, 180.0, 145.0, 165.0, 145.0],
            actions: vec![
                AlertAction {
                    text: "Network diagnostics run",
                    status: ActionStatus::Completed,
                },
                AlertAction {
                    text: "Backup sensors active",
                    status: ActionStatus::Running,
                },
                AlertAction {
                    text: "IT team investigating",
                    status: ActionStatus::InProgress,
                },
            ],
            acknowledged: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_is_one_way_and_idempotent() {
        let mut log = AlertLog::seeded();
        assert!(!log.alerts[0].acknowledged);

        assert!(log.alerts[0].acknowledge());
        assert!(log.alerts[0].acknowledged);

        // Second acknowledge changes nothing and is not an error.
        assert!(!log.alerts[0].acknowledge());
        assert!(log.alerts[0].acknowledged);
    }

    #[test]
    fn test_acknowledge_by_id() {
        let mut log = AlertLog::seeded();
        assert!(log.acknowledge(3));
        assert!(log.alerts.iter().find(|a| a.id == 3).unwrap().acknowledged);
        assert!(!log.acknowledge(999));
    }

    #[test]
    fn test_attention_filter_counts() {
        let log = AlertLog::seeded();
        assert_eq!(log.filtered(None).len(), 4);
        assert_eq!(log.count_for(Attention::Normal), 2);
        assert_eq!(log.count_for(Attention::High), 1);
        assert_eq!(log.count_for(Attention::Low), 1);
        assert_eq!(log.filtered(Some(Attention::High))[0].id, 1);
    }

    #[test]
    fn test_recent_unacknowledged_strip() {
        let mut log = AlertLog::seeded();
        assert_eq!(log.recent_unacknowledged(3).len(), 3);

        log.acknowledge(1);
        let recent = log.recent_unacknowledged(3);
        assert_eq!(recent.len(), 3);
        assert!(recent.iter().all(|a| a.id != 1));
    }

    #[test]
    fn test_seed_alert_shape() {
        let log = AlertLog::seeded();
        for alert in &log.alerts {
            assert_eq!(alert.sparkline.len(), 5);
            assert!(!alert.actions.is_empty());
            assert!(alert.confidence > 0.0 && alert.confidence <= 100.0);
        }
    }
}
