//! In-memory state core for the traffic control dashboard.
//!
//! [`TrafficDashboard`] owns the seeded entities, the synthetic analytics
//! timer, the selection model and the manual control simulator. Views read
//! clones of the state and follow changes through [`TrafficDashboard::subscribe_events`].

use std::{
    collections::HashMap,
    sync::{Arc, Weak},
    time::Duration,
};

use shared::{
    domain::{
        AnalyticsSnapshot, Area, ControlSettings, Hotspot, HotspotControls, HotspotId, Signal,
        SignalId, SignalStatus, StatusDistribution,
    },
    error::{CommandError, ControlError},
    protocol::{
        ChangeId, ControlIntent, ControlLogEntry, ControlSurface, DashboardCommand,
        DashboardEvent, HotspotControlsPatch, HotspotPatch, SelectionView,
    },
};
use tokio::{
    sync::{broadcast, Mutex},
    task::{AbortHandle, JoinHandle},
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

pub mod control;
pub mod control_log;
pub mod derivation;
pub mod seed;
pub mod selection;
pub mod synthetic;

pub use control::{SignalActuator, SimulatedActuator};
pub use control_log::ControlLog;
pub use selection::{nearest_signal, SelectionCoordinator};
pub use synthetic::SyntheticUpdater;

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(3000);
const DEFAULT_EVENT_BUFFER: usize = 256;
const MAX_PERCENT: u8 = 100;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub tick_period: Duration,
    pub status_change_latency: Duration,
    pub seed: Option<u64>,
    pub event_buffer: usize,
    pub settings: ControlSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            status_change_latency: control::DEFAULT_STATUS_CHANGE_LATENCY,
            seed: None,
            event_buffer: DEFAULT_EVENT_BUFFER,
            settings: ControlSettings::default(),
        }
    }
}

struct InFlightChange {
    change_id: ChangeId,
    abort: AbortHandle,
}

struct DashboardState {
    signals: Vec<Signal>,
    hotspots: Vec<Hotspot>,
    areas: Vec<Area>,
    analytics: AnalyticsSnapshot,
    selection: SelectionCoordinator,
    updater: SyntheticUpdater,
    synthetic_generation: u64,
    synthetic_running: bool,
    in_flight: HashMap<SignalId, InFlightChange>,
    hotspot_controls: HashMap<HotspotId, HotspotControls>,
    settings: ControlSettings,
    log: ControlLog,
}

/// Handle to an accepted status change that is waiting on the actuator.
pub struct PendingStatusChange {
    pub change_id: ChangeId,
    pub signal_id: SignalId,
    pub from: SignalStatus,
    pub to: SignalStatus,
    handle: JoinHandle<Result<Signal, ControlError>>,
}

impl PendingStatusChange {
    /// Resolves with the updated signal, or `Cancelled` if the change was
    /// withdrawn before it landed.
    pub async fn wait(self) -> Result<Signal, ControlError> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(ControlError::Cancelled {
                signal_id: self.signal_id,
            }),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

pub struct TrafficDashboard {
    actuator: Arc<dyn SignalActuator>,
    tick_period: Duration,
    inner: Mutex<DashboardState>,
    synthetic_task: Mutex<Option<JoinHandle<()>>>,
    events: broadcast::Sender<DashboardEvent>,
}

impl TrafficDashboard {
    pub fn new(config: DashboardConfig) -> Arc<Self> {
        let actuator = Arc::new(SimulatedActuator::new(config.status_change_latency));
        Self::new_with_actuator(config, actuator)
    }

    pub fn new_with_actuator(
        config: DashboardConfig,
        actuator: Arc<dyn SignalActuator>,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(config.event_buffer.max(1));
        let hotspots = seed::hotspots();
        let hotspot_controls = hotspots
            .iter()
            .map(|hotspot| (hotspot.id.clone(), HotspotControls::default()))
            .collect();

        Arc::new(Self {
            actuator,
            tick_period: config.tick_period.max(Duration::from_millis(1)),
            inner: Mutex::new(DashboardState {
                signals: seed::signals(),
                hotspots,
                areas: seed::areas(),
                analytics: seed::analytics(),
                selection: SelectionCoordinator::new(),
                updater: SyntheticUpdater::new(config.seed),
                synthetic_generation: 0,
                synthetic_running: false,
                in_flight: HashMap::new(),
                hotspot_controls,
                settings: config.settings,
                log: ControlLog::new(),
            }),
            synthetic_task: Mutex::new(None),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    pub async fn analytics(&self) -> AnalyticsSnapshot {
        self.inner.lock().await.analytics.clone()
    }

    pub async fn signals(&self) -> Vec<Signal> {
        self.inner.lock().await.signals.clone()
    }

    pub async fn signal(&self, signal_id: &SignalId) -> Option<Signal> {
        let guard = self.inner.lock().await;
        guard.signals.iter().find(|s| &s.id == signal_id).cloned()
    }

    pub async fn hotspots(&self) -> Vec<Hotspot> {
        self.inner.lock().await.hotspots.clone()
    }

    pub async fn hotspot(&self, hotspot_id: &HotspotId) -> Option<Hotspot> {
        let guard = self.inner.lock().await;
        guard.hotspots.iter().find(|h| &h.id == hotspot_id).cloned()
    }

    pub async fn areas(&self) -> Vec<Area> {
        self.inner.lock().await.areas.clone()
    }

    pub async fn selection(&self) -> SelectionView {
        self.inner.lock().await.selection.view()
    }

    pub async fn control_surface(&self) -> ControlSurface {
        self.inner.lock().await.selection.control_surface()
    }

    pub async fn is_changing(&self, signal_id: &SignalId) -> bool {
        self.inner.lock().await.in_flight.contains_key(signal_id)
    }

    pub async fn settings(&self) -> ControlSettings {
        self.inner.lock().await.settings.clone()
    }

    pub async fn hotspot_controls(&self, hotspot_id: &HotspotId) -> Option<HotspotControls> {
        self.inner
            .lock()
            .await
            .hotspot_controls
            .get(hotspot_id)
            .copied()
    }

    pub async fn control_log(&self) -> Vec<ControlLogEntry> {
        self.inner.lock().await.log.entries().to_vec()
    }

    pub async fn control_log_for(&self, entity_id: &str) -> Vec<ControlLogEntry> {
        let guard = self.inner.lock().await;
        guard.log.for_entity(entity_id).cloned().collect()
    }

    pub async fn status_distribution(&self) -> StatusDistribution {
        derivation::signal_status_distribution(&self.inner.lock().await.signals)
    }

    pub async fn hotspot_area_count(&self) -> usize {
        derivation::hotspot_area_count(&self.inner.lock().await.analytics.congestion_areas)
    }

    pub async fn synthetic_ticks(&self) -> u64 {
        self.inner.lock().await.updater.ticks()
    }

    pub async fn select_signal(&self, signal_id: &SignalId) -> Result<SelectionView, ControlError> {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        let before = state.selection.control_signal().cloned();
        if let Err(err) = state.selection.select_signal(&state.signals, signal_id) {
            return self.reject("select_signal", err);
        }
        Ok(self.publish_selection(state, before))
    }

    pub async fn select_hotspot(
        &self,
        hotspot_id: &HotspotId,
    ) -> Result<SelectionView, ControlError> {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        let before = state.selection.control_signal().cloned();
        if let Err(err) = state.selection.select_hotspot(&state.hotspots, hotspot_id) {
            return self.reject("select_hotspot", err);
        }
        if let Some(hotspot) = state.hotspots.iter().find(|h| &h.id == hotspot_id) {
            info!(hotspot_id = %hotspot.id, name = %hotspot.name, "hotspot focused");
        }
        Ok(self.publish_selection(state, before))
    }

    pub async fn clear_selection(&self) -> SelectionView {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        let before = state.selection.control_signal().cloned();
        state.selection.clear();
        self.publish_selection(state, before)
    }

    /// Manual intervention from a hotspot: shows the control surface of the
    /// signal nearest to the focused hotspot.
    pub async fn open_signal_control_from_hotspot(&self) -> Result<SignalId, ControlError> {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        let before = state.selection.control_signal().cloned();
        let signal_id = match state
            .selection
            .open_signal_control(&state.hotspots, &state.signals)
        {
            Ok(signal_id) => signal_id,
            Err(err) => return self.reject("open_signal_control", err),
        };
        info!(%signal_id, "manual intervention opened signal control");
        self.publish_selection(state, before);
        Ok(signal_id)
    }

    pub async fn close_signal_control(&self) -> SelectionView {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        let before = state.selection.control_signal().cloned();
        state.selection.close_signal_control();
        self.publish_selection(state, before)
    }

    /// Validates and starts a manual colour change. The stored status flips
    /// once the actuator completes, unless the change is cancelled first.
    pub async fn request_status_change(
        self: &Arc<Self>,
        signal_id: &SignalId,
        status: SignalStatus,
    ) -> Result<PendingStatusChange, ControlError> {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;

        let Some(signal) = state.signals.iter().find(|s| &s.id == signal_id) else {
            return self.reject("request_status_change", ControlError::signal_not_found(signal_id));
        };
        if state.in_flight.contains_key(signal_id) {
            return self.reject(
                "request_status_change",
                ControlError::ConcurrentChange {
                    signal_id: signal_id.clone(),
                },
            );
        }
        if let Err(err) = control::check_transition(signal, status) {
            return self.reject("request_status_change", err);
        }

        let from = signal.status;
        let change_id = ChangeId::new();
        let dashboard = Arc::clone(self);
        let task_signal_id = signal_id.clone();
        let handle = tokio::spawn(async move {
            let outcome = dashboard
                .actuator
                .apply_status(&task_signal_id, status)
                .await;
            dashboard
                .finish_status_change(change_id, &task_signal_id, status, outcome)
                .await
        });
        state.in_flight.insert(
            signal_id.clone(),
            InFlightChange {
                change_id,
                abort: handle.abort_handle(),
            },
        );

        info!(%signal_id, %from, to = %status, "signal status change requested");
        let _ = self.events.send(DashboardEvent::StatusChangeStarted {
            change_id,
            signal_id: signal_id.clone(),
            from,
            to: status,
        });

        Ok(PendingStatusChange {
            change_id,
            signal_id: signal_id.clone(),
            from,
            to: status,
            handle,
        })
    }

    /// Returns whether a pending change was withdrawn.
    pub async fn cancel_status_change(&self, signal_id: &SignalId) -> bool {
        let mut guard = self.inner.lock().await;
        self.cancel_in_flight(&mut guard, signal_id)
    }

    pub async fn update_hotspot(
        &self,
        hotspot_id: &HotspotId,
        patch: HotspotPatch,
    ) -> Result<Hotspot, ControlError> {
        if patch.is_empty() {
            return self.reject(
                "update_hotspot",
                ControlError::InvalidPatch("hotspot patch has no fields".to_string()),
            );
        }

        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        let Some(hotspot) = state.hotspots.iter_mut().find(|h| &h.id == hotspot_id) else {
            return self.reject(
                "update_hotspot",
                ControlError::hotspot_not_found(hotspot_id.as_str()),
            );
        };

        let from_state = describe_hotspot(hotspot);
        if let Some(vehicle_count) = patch.vehicle_count {
            hotspot.vehicle_count = vehicle_count;
        }
        if let Some(severity) = patch.severity {
            hotspot.severity = severity;
        }
        let updated = hotspot.clone();
        let to_state = describe_hotspot(&updated);

        info!(%hotspot_id, from = %from_state, to = %to_state, "hotspot updated");
        state
            .log
            .record(ControlIntent::HotspotUpdate, hotspot_id.as_str(), from_state, to_state);
        let _ = self.events.send(DashboardEvent::HotspotUpdated {
            hotspot: updated.clone(),
        });
        Ok(updated)
    }

    /// Untyped variant of [`Self::update_hotspot`] for partial objects coming
    /// from outside the crate.
    pub async fn update_hotspot_json(
        &self,
        hotspot_id: &HotspotId,
        patch: &serde_json::Value,
    ) -> Result<Hotspot, ControlError> {
        match HotspotPatch::from_json(patch) {
            Ok(patch) => self.update_hotspot(hotspot_id, patch).await,
            Err(err) => self.reject("update_hotspot", err),
        }
    }

    pub async fn update_hotspot_controls(
        &self,
        hotspot_id: &HotspotId,
        patch: HotspotControlsPatch,
    ) -> Result<HotspotControls, ControlError> {
        if patch.intervention_level.is_some_and(|level| level > MAX_PERCENT) {
            return self.reject(
                "update_hotspot_controls",
                ControlError::InvalidPatch("intervention_level must be within 0..=100".to_string()),
            );
        }

        let mut guard = self.inner.lock().await;
        let state = &mut *guard;
        if !state.hotspots.iter().any(|h| &h.id == hotspot_id) {
            return self.reject(
                "update_hotspot_controls",
                ControlError::hotspot_not_found(hotspot_id.as_str()),
            );
        }

        let controls = state.hotspot_controls.entry(hotspot_id.clone()).or_default();
        let before = *controls;
        if let Some(ai_mode) = patch.ai_mode {
            controls.ai_mode = ai_mode;
        }
        if let Some(level) = patch.intervention_level {
            controls.intervention_level = level;
        }
        if let Some(redirection) = patch.traffic_redirection {
            controls.traffic_redirection = redirection;
        }
        if let Some(coordination) = patch.signal_coordination {
            controls.signal_coordination = coordination;
        }
        let after = *controls;

        info!(
            %hotspot_id,
            ai_mode = after.ai_mode,
            intervention_level = after.intervention_level,
            traffic_redirection = after.traffic_redirection,
            signal_coordination = after.signal_coordination,
            "hotspot controls updated"
        );
        state.log.record(
            ControlIntent::HotspotControls,
            hotspot_id.as_str(),
            describe_controls(&before),
            describe_controls(&after),
        );
        let _ = self.events.send(DashboardEvent::HotspotControlsChanged {
            hotspot_id: hotspot_id.clone(),
            controls: after,
        });
        Ok(after)
    }

    pub async fn update_settings(
        &self,
        settings: ControlSettings,
    ) -> Result<ControlSettings, ControlError> {
        for (field, value) in [
            ("ai_aggressiveness", settings.ai_aggressiveness),
            ("congestion_threshold", settings.congestion_threshold),
        ] {
            if value > MAX_PERCENT {
                return self.reject(
                    "update_settings",
                    ControlError::InvalidPatch(format!("{field} must be within 0..=100")),
                );
            }
        }

        let mut guard = self.inner.lock().await;
        let previous = std::mem::replace(&mut guard.settings, settings.clone());
        info!(
            mode = ?settings.system_mode,
            ai_aggressiveness = settings.ai_aggressiveness,
            congestion_threshold = settings.congestion_threshold,
            "control settings updated"
        );
        guard.log.record(
            ControlIntent::SettingsUpdate,
            "system",
            describe_settings(&previous),
            describe_settings(&settings),
        );
        let _ = self.events.send(DashboardEvent::SettingsChanged {
            settings: settings.clone(),
        });
        Ok(settings)
    }

    /// Starts the periodic jitter. Returns `false` if a timer is already
    /// running.
    pub async fn start_synthetic_updates(self: &Arc<Self>) -> bool {
        let mut task = self.synthetic_task.lock().await;
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            debug!("synthetic updates already running");
            return false;
        }

        let generation = {
            let mut guard = self.inner.lock().await;
            guard.synthetic_generation += 1;
            guard.synthetic_running = true;
            guard.synthetic_generation
        };

        let period = self.tick_period;
        let dashboard = Arc::downgrade(self);
        *task = Some(tokio::spawn(run_synthetic_timer(dashboard, period, generation)));

        info!(period_ms = period.as_millis() as u64, "synthetic updates started");
        let _ = self.events.send(DashboardEvent::SyntheticUpdatesStarted {
            period_ms: period.as_millis() as u64,
        });
        true
    }

    /// Stops the timer. No tick lands after this returns; the last snapshot
    /// is kept.
    pub async fn stop_synthetic_updates(&self) -> bool {
        let mut task = self.synthetic_task.lock().await;
        let was_running = {
            let mut guard = self.inner.lock().await;
            guard.synthetic_generation += 1;
            std::mem::replace(&mut guard.synthetic_running, false)
        };
        if let Some(handle) = task.take() {
            handle.abort();
        }

        if was_running {
            info!("synthetic updates stopped");
            let _ = self.events.send(DashboardEvent::SyntheticUpdatesStopped);
        }
        was_running
    }

    /// Applies one synthetic tick right away, independent of the timer.
    pub async fn tick_synthetic(&self) -> AnalyticsSnapshot {
        let mut guard = self.inner.lock().await;
        self.apply_tick(&mut guard)
    }

    /// Stops the timer and withdraws every pending status change.
    pub async fn shutdown(&self) {
        self.stop_synthetic_updates().await;
        let mut guard = self.inner.lock().await;
        let pending: Vec<SignalId> = guard.in_flight.keys().cloned().collect();
        for signal_id in pending {
            self.cancel_in_flight(&mut guard, &signal_id);
        }
        info!("dashboard shut down");
    }

    /// Dispatches a serialized command. Status changes are started but not
    /// awaited; their handle is returned.
    pub async fn apply_command(
        self: &Arc<Self>,
        command: DashboardCommand,
    ) -> Result<Option<PendingStatusChange>, ControlError> {
        debug!(command = command.name(), "applying dashboard command");
        match command {
            DashboardCommand::SelectSignal { signal_id } => {
                self.select_signal(&signal_id).await?;
            }
            DashboardCommand::SelectHotspot { hotspot_id } => {
                self.select_hotspot(&hotspot_id).await?;
            }
            DashboardCommand::ClearSelection => {
                self.clear_selection().await;
            }
            DashboardCommand::OpenSignalControl => {
                self.open_signal_control_from_hotspot().await?;
            }
            DashboardCommand::CloseSignalControl => {
                self.close_signal_control().await;
            }
            DashboardCommand::RequestStatusChange { signal_id, status } => {
                return self
                    .request_status_change(&signal_id, status)
                    .await
                    .map(Some);
            }
            DashboardCommand::CancelStatusChange { signal_id } => {
                self.cancel_status_change(&signal_id).await;
            }
            DashboardCommand::UpdateHotspot { hotspot_id, patch } => {
                self.update_hotspot_json(&hotspot_id, &patch).await?;
            }
            DashboardCommand::UpdateHotspotControls { hotspot_id, patch } => {
                self.update_hotspot_controls(&hotspot_id, patch).await?;
            }
            DashboardCommand::UpdateSettings { settings } => {
                self.update_settings(settings).await?;
            }
            DashboardCommand::StartSyntheticUpdates => {
                self.start_synthetic_updates().await;
            }
            DashboardCommand::StopSyntheticUpdates => {
                self.stop_synthetic_updates().await;
            }
            DashboardCommand::TickSynthetic => {
                self.tick_synthetic().await;
            }
        }
        Ok(None)
    }

    async fn timer_tick(&self, generation: u64) -> bool {
        let mut guard = self.inner.lock().await;
        if !guard.synthetic_running || guard.synthetic_generation != generation {
            return false;
        }
        self.apply_tick(&mut guard);
        true
    }

    fn apply_tick(&self, state: &mut DashboardState) -> AnalyticsSnapshot {
        let DashboardState {
            analytics,
            hotspots,
            updater,
            ..
        } = state;
        updater.tick(analytics, hotspots);
        debug!(
            tick = updater.ticks(),
            total_vehicles = analytics.total_vehicles,
            "synthetic tick applied"
        );
        let _ = self.events.send(DashboardEvent::SnapshotUpdated {
            analytics: analytics.clone(),
            hotspots: hotspots.clone(),
        });
        analytics.clone()
    }

    async fn finish_status_change(
        &self,
        change_id: ChangeId,
        signal_id: &SignalId,
        status: SignalStatus,
        outcome: Result<(), ControlError>,
    ) -> Result<Signal, ControlError> {
        let mut guard = self.inner.lock().await;
        let state = &mut *guard;

        let is_current = state
            .in_flight
            .get(signal_id)
            .is_some_and(|change| change.change_id == change_id);
        if !is_current {
            return Err(ControlError::Cancelled {
                signal_id: signal_id.clone(),
            });
        }
        state.in_flight.remove(signal_id);

        if let Err(err) = outcome {
            warn!(%signal_id, error = %err, "signal status change failed");
            let _ = self.events.send(DashboardEvent::StatusChangeFailed {
                change_id,
                signal_id: signal_id.clone(),
                error: CommandError::from(&err),
            });
            return Err(err);
        }

        let Some(signal) = state.signals.iter_mut().find(|s| &s.id == signal_id) else {
            return Err(ControlError::signal_not_found(signal_id));
        };
        let from = signal.status;
        signal.status = status;
        let updated = signal.clone();

        info!(%signal_id, %from, to = %status, "signal status changed");
        state.log.record(
            ControlIntent::SignalStatusChange,
            signal_id.as_str(),
            from.as_str(),
            status.as_str(),
        );
        let _ = self.events.send(DashboardEvent::SignalStatusChanged {
            change_id,
            signal_id: signal_id.clone(),
            from,
            to: status,
        });
        Ok(updated)
    }

    fn cancel_in_flight(&self, state: &mut DashboardState, signal_id: &SignalId) -> bool {
        let Some(change) = state.in_flight.remove(signal_id) else {
            return false;
        };
        change.abort.abort();
        info!(%signal_id, "pending signal status change cancelled");
        let _ = self.events.send(DashboardEvent::StatusChangeCancelled {
            change_id: change.change_id,
            signal_id: signal_id.clone(),
        });
        true
    }

    /// Publishes the new selection and withdraws a pending change whose
    /// control surface just closed.
    fn publish_selection(
        &self,
        state: &mut DashboardState,
        previous_control: Option<SignalId>,
    ) -> SelectionView {
        if let Some(previous) = previous_control {
            if state.selection.control_signal() != Some(&previous) {
                self.cancel_in_flight(state, &previous);
            }
        }

        let selection = state.selection.view();
        let surface = state.selection.control_surface();
        debug!(?surface, "selection changed");
        let _ = self.events.send(DashboardEvent::SelectionChanged {
            selection: selection.clone(),
            surface,
        });
        selection
    }

    fn reject<T>(&self, command: &str, err: ControlError) -> Result<T, ControlError> {
        warn!(command, code = ?err.code(), error = %err, "dashboard command rejected");
        let _ = self.events.send(DashboardEvent::CommandRejected {
            command: command.to_string(),
            error: CommandError::from(&err),
        });
        Err(err)
    }
}

async fn run_synthetic_timer(dashboard: Weak<TrafficDashboard>, period: Duration, generation: u64) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let Some(dashboard) = dashboard.upgrade() else {
            break;
        };
        if !dashboard.timer_tick(generation).await {
            break;
        }
    }
}

fn describe_hotspot(hotspot: &Hotspot) -> String {
    format!(
        "severity={} vehicle_count={}",
        hotspot.severity, hotspot.vehicle_count
    )
}

fn describe_controls(controls: &HotspotControls) -> String {
    format!(
        "ai_mode={} intervention_level={} traffic_redirection={} signal_coordination={}",
        controls.ai_mode,
        controls.intervention_level,
        controls.traffic_redirection,
        controls.signal_coordination
    )
}

fn describe_settings(settings: &ControlSettings) -> String {
    format!(
        "mode={:?} ai_aggressiveness={} congestion_threshold={} response_time={:?}",
        settings.system_mode,
        settings.ai_aggressiveness,
        settings.congestion_threshold,
        settings.response_time
    )
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
