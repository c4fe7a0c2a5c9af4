//! Single-focus selection between signals and hotspots.

use shared::{
    domain::{Hotspot, HotspotId, Signal, SignalId},
    error::ControlError,
    protocol::{ControlSurface, Focus, SelectionView},
};

/// Half-width, in degrees, of the box used to pair a hotspot with a signal.
pub const SIGNAL_MATCH_EPSILON: f64 = 0.01;

/// First signal inside the epsilon box around `hotspot`, in list order.
/// Falls back to the first signal when none is close enough; `None` only for
/// an empty list.
pub fn nearest_signal<'a>(hotspot: &Hotspot, signals: &'a [Signal]) -> Option<&'a Signal> {
    signals
        .iter()
        .find(|signal| {
            (signal.latitude - hotspot.latitude).abs() < SIGNAL_MATCH_EPSILON
                && (signal.longitude - hotspot.longitude).abs() < SIGNAL_MATCH_EPSILON
        })
        .or_else(|| signals.first())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCoordinator {
    focus: Focus,
    show_signal_control: bool,
    intervention_signal: Option<SignalId>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn select_signal(&mut self, signals: &[Signal], id: &SignalId) -> Result<(), ControlError> {
        if !signals.iter().any(|signal| &signal.id == id) {
            return Err(ControlError::signal_not_found(id));
        }
        self.reset();
        self.focus = Focus::Signal(id.clone());
        Ok(())
    }

    pub fn select_hotspot(
        &mut self,
        hotspots: &[Hotspot],
        id: &HotspotId,
    ) -> Result<(), ControlError> {
        if !hotspots.iter().any(|hotspot| &hotspot.id == id) {
            return Err(ControlError::hotspot_not_found(id.as_str()));
        }
        self.reset();
        self.focus = Focus::Hotspot(id.clone());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.reset();
    }

    /// Switches a focused hotspot to the signal control surface of its
    /// nearest signal. The hotspot stays focused.
    pub fn open_signal_control(
        &mut self,
        hotspots: &[Hotspot],
        signals: &[Signal],
    ) -> Result<SignalId, ControlError> {
        let Focus::Hotspot(hotspot_id) = &self.focus else {
            return Err(ControlError::NoHotspotFocus);
        };
        let hotspot = hotspots
            .iter()
            .find(|hotspot| &hotspot.id == hotspot_id)
            .ok_or_else(|| ControlError::hotspot_not_found(hotspot_id.as_str()))?;
        let signal = nearest_signal(hotspot, signals)
            .ok_or_else(|| ControlError::signal_not_found(&SignalId::from("")))?;

        self.show_signal_control = true;
        self.intervention_signal = Some(signal.id.clone());
        Ok(signal.id.clone())
    }

    pub fn close_signal_control(&mut self) {
        self.show_signal_control = false;
        self.intervention_signal = None;
    }

    /// Signal whose control surface is currently shown, if any.
    pub fn control_signal(&self) -> Option<&SignalId> {
        match &self.focus {
            Focus::Signal(id) => Some(id),
            Focus::Hotspot(_) if self.show_signal_control => self.intervention_signal.as_ref(),
            _ => None,
        }
    }

    pub fn control_surface(&self) -> ControlSurface {
        match &self.focus {
            Focus::None => ControlSurface::None,
            Focus::Signal(id) => ControlSurface::Signal(id.clone()),
            Focus::Hotspot(id) => match (&self.intervention_signal, self.show_signal_control) {
                (Some(signal_id), true) => ControlSurface::Signal(signal_id.clone()),
                _ => ControlSurface::Hotspot(id.clone()),
            },
        }
    }

    pub fn view(&self) -> SelectionView {
        SelectionView {
            focus: self.focus.clone(),
            show_signal_control: self.show_signal_control,
            intervention_signal: self.intervention_signal.clone(),
        }
    }

    fn reset(&mut self) {
        self.focus = Focus::None;
        self.show_signal_control = false;
        self.intervention_signal = None;
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
