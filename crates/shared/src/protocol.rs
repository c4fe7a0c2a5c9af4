use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    domain::{
        AnalyticsSnapshot, ControlSettings, Hotspot, HotspotControls, HotspotId, Severity,
        SignalId, SignalStatus,
    },
    error::{CommandError, ControlError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeId(pub Uuid);

impl ChangeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChangeId {
    fn default() -> Self {
        Self::new()
    }
}

/// The entity currently presented in the side control panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Focus {
    #[default]
    None,
    Signal(SignalId),
    Hotspot(HotspotId),
}

/// Which control surface the view should render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ControlSurface {
    #[default]
    None,
    Signal(SignalId),
    Hotspot(HotspotId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionView {
    pub focus: Focus,
    pub show_signal_control: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervention_signal: Option<SignalId>,
}

impl SelectionView {
    pub fn selected_signal(&self) -> Option<&SignalId> {
        match &self.focus {
            Focus::Signal(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_hotspot(&self) -> Option<&HotspotId> {
        match &self.focus {
            Focus::Hotspot(id) => Some(id),
            _ => None,
        }
    }
}

/// Fields of a hotspot that may change after seeding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

const HOTSPOT_IDENTITY_FIELDS: &[&str] = &["id", "name", "latitude", "longitude"];

impl HotspotPatch {
    /// Parses an untyped partial update, refusing identity and position
    /// fields by name.
    pub fn from_json(value: &Value) -> Result<Self, ControlError> {
        let Some(fields) = value.as_object() else {
            return Err(ControlError::InvalidPatch(
                "hotspot patch must be a JSON object".to_string(),
            ));
        };

        for key in fields.keys() {
            if HOTSPOT_IDENTITY_FIELDS.contains(&key.as_str()) {
                return Err(ControlError::ImmutableField { field: key.clone() });
            }
            if key != "vehicle_count" && key != "severity" {
                return Err(ControlError::InvalidPatch(format!(
                    "unknown hotspot field '{key}'"
                )));
            }
        }

        serde_json::from_value(value.clone())
            .map_err(|err| ControlError::InvalidPatch(err.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.vehicle_count.is_none() && self.severity.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotControlsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervention_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_redirection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_coordination: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlIntent {
    SignalStatusChange,
    HotspotUpdate,
    HotspotControls,
    SettingsUpdate,
}

/// One row of the append-only control log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlLogEntry {
    pub timestamp: DateTime<Utc>,
    pub intent: ControlIntent,
    pub entity_id: String,
    pub from_state: String,
    pub to_state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DashboardCommand {
    SelectSignal {
        signal_id: SignalId,
    },
    SelectHotspot {
        hotspot_id: HotspotId,
    },
    ClearSelection,
    OpenSignalControl,
    CloseSignalControl,
    RequestStatusChange {
        signal_id: SignalId,
        status: SignalStatus,
    },
    CancelStatusChange {
        signal_id: SignalId,
    },
    UpdateHotspot {
        hotspot_id: HotspotId,
        patch: Value,
    },
    UpdateHotspotControls {
        hotspot_id: HotspotId,
        patch: HotspotControlsPatch,
    },
    UpdateSettings {
        settings: ControlSettings,
    },
    StartSyntheticUpdates,
    StopSyntheticUpdates,
    TickSynthetic,
}

impl DashboardCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardCommand::SelectSignal { .. } => "select_signal",
            DashboardCommand::SelectHotspot { .. } => "select_hotspot",
            DashboardCommand::ClearSelection => "clear_selection",
            DashboardCommand::OpenSignalControl => "open_signal_control",
            DashboardCommand::CloseSignalControl => "close_signal_control",
            DashboardCommand::RequestStatusChange { .. } => "request_status_change",
            DashboardCommand::CancelStatusChange { .. } => "cancel_status_change",
            DashboardCommand::UpdateHotspot { .. } => "update_hotspot",
            DashboardCommand::UpdateHotspotControls { .. } => "update_hotspot_controls",
            DashboardCommand::UpdateSettings { .. } => "update_settings",
            DashboardCommand::StartSyntheticUpdates => "start_synthetic_updates",
            DashboardCommand::StopSyntheticUpdates => "stop_synthetic_updates",
            DashboardCommand::TickSynthetic => "tick_synthetic",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DashboardEvent {
    SnapshotUpdated {
        analytics: AnalyticsSnapshot,
        hotspots: Vec<Hotspot>,
    },
    SelectionChanged {
        selection: SelectionView,
        surface: ControlSurface,
    },
    StatusChangeStarted {
        change_id: ChangeId,
        signal_id: SignalId,
        from: SignalStatus,
        to: SignalStatus,
    },
    SignalStatusChanged {
        change_id: ChangeId,
        signal_id: SignalId,
        from: SignalStatus,
        to: SignalStatus,
    },
    StatusChangeCancelled {
        change_id: ChangeId,
        signal_id: SignalId,
    },
    StatusChangeFailed {
        change_id: ChangeId,
        signal_id: SignalId,
        error: CommandError,
    },
    HotspotUpdated {
        hotspot: Hotspot,
    },
    HotspotControlsChanged {
        hotspot_id: HotspotId,
        controls: HotspotControls,
    },
    SettingsChanged {
        settings: ControlSettings,
    },
    SyntheticUpdatesStarted {
        period_ms: u64,
    },
    SyntheticUpdatesStopped,
    CommandRejected {
        command: String,
        error: CommandError,
    },
}
