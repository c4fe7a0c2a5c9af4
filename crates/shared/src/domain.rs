use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(SignalId);
id_newtype!(HotspotId);
id_newtype!(AreaId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStatus {
    Red,
    Amber,
    Green,
}

impl SignalStatus {
    pub const ALL: [SignalStatus; 3] = [SignalStatus::Red, SignalStatus::Amber, SignalStatus::Green];

    pub fn as_str(self) -> &'static str {
        match self {
            SignalStatus::Red => "red",
            SignalStatus::Amber => "amber",
            SignalStatus::Green => "green",
        }
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }

    /// Congestion percentage shown for a hotspot of this severity.
    pub fn congestion_percent(self) -> u8 {
        match self {
            Severity::Critical => 85,
            Severity::High => 72,
            Severity::Medium => 58,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionLevel {
    High,
    Medium,
    Low,
}

/// A simulated traffic light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: SignalId,
    pub latitude: f64,
    pub longitude: f64,
    pub status: SignalStatus,
    pub location: String,
    pub is_active: bool,
}

/// An AI-flagged congestion point. Only `vehicle_count` and `severity` change
/// after seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: HotspotId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub severity: Severity,
    pub ai_detected: bool,
    pub vehicle_count: u32,
    pub estimated_delay: String,
}

impl Hotspot {
    pub fn congestion_percent(&self) -> u8 {
        self.severity.congestion_percent()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub congestion_level: CongestionLevel,
    pub signal_count: u32,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionArea {
    pub name: String,
    pub level: u8,
    pub vehicles: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEfficiency {
    pub id: SignalId,
    pub location: String,
    pub efficiency: u8,
    pub throughput: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyTraffic {
    pub hour: u8,
    pub vehicles: u32,
    pub avg_delay: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_signals: u32,
    pub active_signals: u32,
    pub total_vehicles: u32,
    pub average_delay: String,
    pub peak_hours: Vec<String>,
    pub congestion_areas: Vec<CongestionArea>,
    pub signal_efficiency: Vec<SignalEfficiency>,
    pub hourly_traffic: Vec<HourlyTraffic>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub green: u32,
    pub red: u32,
    pub amber: u32,
    pub offline: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemMode {
    Ai,
    Hybrid,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTime {
    Conservative,
    Normal,
    Aggressive,
}

/// System-wide control preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub system_mode: SystemMode,
    pub ai_aggressiveness: u8,
    pub auto_intervention: bool,
    /// Operator preference only; display bands come from fixed thresholds.
    pub congestion_threshold: u8,
    pub response_time: ResponseTime,
    pub emergency_override: bool,
    pub data_sync: bool,
    pub notifications: bool,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            system_mode: SystemMode::Hybrid,
            ai_aggressiveness: 75,
            auto_intervention: true,
            congestion_threshold: 80,
            response_time: ResponseTime::Normal,
            emergency_override: true,
            data_sync: true,
            notifications: true,
        }
    }
}

/// Intervention switches shown on a hotspot's control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotControls {
    pub ai_mode: bool,
    pub intervention_level: u8,
    pub traffic_redirection: bool,
    pub signal_coordination: bool,
}

impl Default for HotspotControls {
    fn default() -> Self {
        Self {
            ai_mode: true,
            intervention_level: 70,
            traffic_redirection: false,
            signal_coordination: true,
        }
    }
}
