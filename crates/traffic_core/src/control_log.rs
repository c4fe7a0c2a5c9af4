//! Append-only record of applied control actions.

use chrono::Utc;
use shared::protocol::{ControlIntent, ControlLogEntry};

#[derive(Debug, Default, Clone)]
pub struct ControlLog {
    entries: Vec<ControlLogEntry>,
}

impl ControlLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        intent: ControlIntent,
        entity_id: impl Into<String>,
        from_state: impl Into<String>,
        to_state: impl Into<String>,
    ) {
        self.entries.push(ControlLogEntry {
            timestamp: Utc::now(),
            intent,
            entity_id: entity_id.into(),
            from_state: from_state.into(),
            to_state: to_state.into(),
        });
    }

    pub fn entries(&self) -> &[ControlLogEntry] {
        &self.entries
    }

    pub fn for_entity<'a>(
        &'a self,
        entity_id: &'a str,
    ) -> impl Iterator<Item = &'a ControlLogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.entity_id == entity_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
