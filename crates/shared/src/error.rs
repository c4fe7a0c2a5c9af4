use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{SignalId, SignalStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    InvalidTransition,
    ConcurrentChange,
    ImmutableField,
    InvalidPatch,
    Cancelled,
    DeviceUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Signal,
    Hotspot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionRejection {
    Inactive,
    Unchanged { status: SignalStatus },
}

/// Rejected dashboard command. Every variant leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("unknown {kind:?} id '{id}'")]
    NotFound { kind: EntityKind, id: String },
    #[error("signal {signal_id} cannot change status: {reason:?}")]
    InvalidTransition {
        signal_id: SignalId,
        reason: TransitionRejection,
    },
    #[error("no hotspot is focused")]
    NoHotspotFocus,
    #[error("signal {signal_id} already has a status change in flight")]
    ConcurrentChange { signal_id: SignalId },
    #[error("field '{field}' cannot be changed after creation")]
    ImmutableField { field: String },
    #[error("invalid patch: {0}")]
    InvalidPatch(String),
    #[error("status change for signal {signal_id} was cancelled")]
    Cancelled { signal_id: SignalId },
    #[error("signal {signal_id} is unavailable: {message}")]
    DeviceUnavailable { signal_id: SignalId, message: String },
}

impl ControlError {
    pub fn signal_not_found(id: &SignalId) -> Self {
        Self::NotFound {
            kind: EntityKind::Signal,
            id: id.0.clone(),
        }
    }

    pub fn hotspot_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Hotspot,
            id: id.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ControlError::NotFound { .. } => ErrorCode::NotFound,
            ControlError::InvalidTransition { .. } | ControlError::NoHotspotFocus => {
                ErrorCode::InvalidTransition
            }
            ControlError::ConcurrentChange { .. } => ErrorCode::ConcurrentChange,
            ControlError::ImmutableField { .. } => ErrorCode::ImmutableField,
            ControlError::InvalidPatch(_) => ErrorCode::InvalidPatch,
            ControlError::Cancelled { .. } => ErrorCode::Cancelled,
            ControlError::DeviceUnavailable { .. } => ErrorCode::DeviceUnavailable,
        }
    }
}

/// Wire form of a [`ControlError`], carried on the event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub code: ErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&ControlError> for CommandError {
    fn from(value: &ControlError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}

impl From<ControlError> for CommandError {
    fn from(value: ControlError) -> Self {
        Self::from(&value)
    }
}
