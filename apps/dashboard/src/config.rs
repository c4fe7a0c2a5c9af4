use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{ControlSettings, SystemMode};
use traffic_core::DashboardConfig;

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_period_ms: u64,
    pub status_change_latency_ms: u64,
    pub seed: Option<u64>,
    pub event_buffer: usize,
    pub control: ControlSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_period_ms: 3000,
            status_change_latency_ms: 1000,
            seed: None,
            event_buffer: 256,
            control: ControlSettings::default(),
        }
    }
}

impl Settings {
    pub fn to_dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            tick_period: Duration::from_millis(self.tick_period_ms.max(1)),
            status_change_latency: Duration::from_millis(self.status_change_latency_ms),
            seed: self.seed,
            event_buffer: self.event_buffer.max(1),
            settings: self.control.clone(),
        }
    }
}

/// Defaults, then the TOML file, then `APP__*` environment variables.
/// A missing default file is fine; an explicit path must exist.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_settings_file(default_path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

/// Unparseable numeric values are ignored and the previous value is kept.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__TICK_PERIOD_MS").and_then(|v| v.parse().ok()) {
        settings.tick_period_ms = v;
    }
    if let Some(v) = lookup("APP__STATUS_CHANGE_LATENCY_MS").and_then(|v| v.parse().ok()) {
        settings.status_change_latency_ms = v;
    }
    if let Some(v) = lookup("APP__SEED").and_then(|v| v.parse().ok()) {
        settings.seed = Some(v);
    }
    if let Some(v) = lookup("APP__EVENT_BUFFER").and_then(|v| v.parse().ok()) {
        settings.event_buffer = v;
    }
    if let Some(v) = lookup("APP__CONGESTION_THRESHOLD").and_then(|v| v.parse().ok()) {
        settings.control.congestion_threshold = v;
    }
    if let Some(v) = lookup("APP__SYSTEM_MODE") {
        match v.to_ascii_lowercase().as_str() {
            "ai" => settings.control.system_mode = SystemMode::Ai,
            "hybrid" => settings.control.system_mode = SystemMode::Hybrid,
            "manual" => settings.control.system_mode = SystemMode::Manual,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
