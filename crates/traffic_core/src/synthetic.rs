//! Bounded random jitter standing in for live telemetry.

use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::domain::{AnalyticsSnapshot, Hotspot};

pub const LEVEL_MIN: u8 = 30;
pub const LEVEL_MAX: u8 = 100;
pub const AREA_VEHICLE_FLOOR: u32 = 50;

const TOTAL_VEHICLE_JITTER: i64 = 10;
const AREA_LEVEL_JITTER: i64 = 5;
const AREA_VEHICLE_JITTER: i64 = 10;
const HOTSPOT_VEHICLE_JITTER: i64 = 3;

pub struct SyntheticUpdater {
    rng: StdRng,
    ticks: u64,
}

impl SyntheticUpdater {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Applies one round of jitter. Signal counts and severities are never
    /// touched.
    pub fn tick(&mut self, analytics: &mut AnalyticsSnapshot, hotspots: &mut [Hotspot]) {
        analytics.total_vehicles = jitter_floor(
            &mut self.rng,
            analytics.total_vehicles,
            TOTAL_VEHICLE_JITTER,
            0,
        );

        for area in &mut analytics.congestion_areas {
            let delta = self.rng.gen_range(-AREA_LEVEL_JITTER..=AREA_LEVEL_JITTER);
            area.level = (i64::from(area.level) + delta)
                .clamp(i64::from(LEVEL_MIN), i64::from(LEVEL_MAX)) as u8;
            area.vehicles = jitter_floor(
                &mut self.rng,
                area.vehicles,
                AREA_VEHICLE_JITTER,
                AREA_VEHICLE_FLOOR,
            );
        }

        for hotspot in hotspots.iter_mut() {
            hotspot.vehicle_count = jitter_floor(
                &mut self.rng,
                hotspot.vehicle_count,
                HOTSPOT_VEHICLE_JITTER,
                0,
            );
        }

        self.ticks += 1;
    }
}

fn jitter_floor(rng: &mut StdRng, value: u32, spread: i64, floor: u32) -> u32 {
    let delta = rng.gen_range(-spread..=spread);
    (i64::from(value) + delta).clamp(i64::from(floor), i64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "tests/synthetic_tests.rs"]
mod tests;
