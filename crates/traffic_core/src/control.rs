//! Manual signal control: the device seam and the command-boundary checks.

use std::time::Duration;

use async_trait::async_trait;
use shared::{
    domain::{Signal, SignalId, SignalStatus},
    error::{ControlError, TransitionRejection},
};

use crate::derivation::status_change_allowed;

pub const DEFAULT_STATUS_CHANGE_LATENCY: Duration = Duration::from_millis(1000);

/// Applies a colour change to a signal. The dashboard writes the new status
/// only after this returns `Ok`.
#[async_trait]
pub trait SignalActuator: Send + Sync {
    async fn apply_status(
        &self,
        signal_id: &SignalId,
        status: SignalStatus,
    ) -> Result<(), ControlError>;
}

/// Waits a fixed latency and always succeeds.
pub struct SimulatedActuator {
    latency: Duration,
}

impl SimulatedActuator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedActuator {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_CHANGE_LATENCY)
    }
}

#[async_trait]
impl SignalActuator for SimulatedActuator {
    async fn apply_status(
        &self,
        _signal_id: &SignalId,
        _status: SignalStatus,
    ) -> Result<(), ControlError> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

pub(crate) fn check_transition(signal: &Signal, target: SignalStatus) -> Result<(), ControlError> {
    if status_change_allowed(signal, target) {
        return Ok(());
    }
    let reason = if !signal.is_active {
        TransitionRejection::Inactive
    } else {
        TransitionRejection::Unchanged {
            status: signal.status,
        }
    };
    Err(ControlError::InvalidTransition {
        signal_id: signal.id.clone(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn inactive_signal_is_rejected_before_same_status() {
        let signals = seed::signals();
        let offline = signals.iter().find(|s| !s.is_active).expect("inactive seed");
        let err = check_transition(offline, offline.status).expect_err("inactive");
        assert!(matches!(
            err,
            ControlError::InvalidTransition {
                reason: TransitionRejection::Inactive,
                ..
            }
        ));
    }

    #[test]
    fn same_status_is_rejected() {
        let signals = seed::signals();
        let err = check_transition(&signals[1], SignalStatus::Red).expect_err("unchanged");
        assert!(matches!(
            err,
            ControlError::InvalidTransition {
                reason: TransitionRejection::Unchanged {
                    status: SignalStatus::Red
                },
                ..
            }
        ));
        check_transition(&signals[1], SignalStatus::Amber).expect("allowed");
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_actuator_waits_for_latency() {
        let actuator = SimulatedActuator::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();
        actuator
            .apply_status(&SignalId::from("OD-002"), SignalStatus::Green)
            .await
            .expect("simulated change never fails");
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
