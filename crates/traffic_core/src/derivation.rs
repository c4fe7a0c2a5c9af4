//! Threshold mappings shared by every view. Nothing else in the crate may
//! compare levels against literal cutoffs.

use serde::Serialize;
use shared::domain::{CongestionArea, Hotspot, Severity, Signal, SignalStatus, StatusDistribution};

pub const EFFICIENCY_OPTIMAL_MIN: u8 = 90;
pub const EFFICIENCY_GOOD_MIN: u8 = 75;
pub const CONGESTION_RED_MIN: u8 = 80;
pub const CONGESTION_AMBER_MIN: u8 = 60;
/// Areas strictly above this level count as hotspots in the summary tile.
pub const HOTSPOT_LEVEL_FLOOR: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyBand {
    Optimal,
    Good,
    NeedsAttention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionBand {
    Red,
    Amber,
    Green,
}

pub fn efficiency_band(efficiency: u8) -> EfficiencyBand {
    if efficiency >= EFFICIENCY_OPTIMAL_MIN {
        EfficiencyBand::Optimal
    } else if efficiency >= EFFICIENCY_GOOD_MIN {
        EfficiencyBand::Good
    } else {
        EfficiencyBand::NeedsAttention
    }
}

pub fn severity_congestion(severity: Severity) -> u8 {
    severity.congestion_percent()
}

pub fn congestion_band(level: u8) -> CongestionBand {
    if level >= CONGESTION_RED_MIN {
        CongestionBand::Red
    } else if level >= CONGESTION_AMBER_MIN {
        CongestionBand::Amber
    } else {
        CongestionBand::Green
    }
}

pub fn is_hotspot_level(level: u8) -> bool {
    level > HOTSPOT_LEVEL_FLOOR
}

pub fn hotspot_area_count(areas: &[CongestionArea]) -> usize {
    areas.iter().filter(|area| is_hotspot_level(area.level)).count()
}

/// Congestion percentage for a hotspot, always derived from its severity.
pub fn hotspot_congestion(hotspot: &Hotspot) -> u8 {
    hotspot.congestion_percent()
}

/// Inactive signals are reported as offline regardless of their last colour.
pub fn signal_status_distribution(signals: &[Signal]) -> StatusDistribution {
    signals
        .iter()
        .fold(StatusDistribution::default(), |mut dist, signal| {
            if !signal.is_active {
                dist.offline += 1;
                return dist;
            }
            match signal.status {
                SignalStatus::Green => dist.green += 1,
                SignalStatus::Red => dist.red += 1,
                SignalStatus::Amber => dist.amber += 1,
            }
            dist
        })
}

/// Whether the control surface should enable the button for `target`.
pub fn status_change_allowed(signal: &Signal, target: SignalStatus) -> bool {
    signal.is_active && signal.status != target
}

#[cfg(test)]
#[path = "tests/derivation_tests.rs"]
mod tests;
