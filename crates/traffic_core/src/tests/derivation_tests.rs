use super::*;
use crate::seed;
use proptest::prelude::*;

#[test]
fn efficiency_bands_follow_thresholds() {
    assert_eq!(efficiency_band(100), EfficiencyBand::Optimal);
    assert_eq!(efficiency_band(90), EfficiencyBand::Optimal);
    assert_eq!(efficiency_band(89), EfficiencyBand::Good);
    assert_eq!(efficiency_band(75), EfficiencyBand::Good);
    assert_eq!(efficiency_band(74), EfficiencyBand::NeedsAttention);
    assert_eq!(efficiency_band(0), EfficiencyBand::NeedsAttention);
}

#[test]
fn severity_maps_to_fixed_congestion() {
    assert_eq!(severity_congestion(Severity::Critical), 85);
    assert_eq!(severity_congestion(Severity::High), 72);
    assert_eq!(severity_congestion(Severity::Medium), 58);
}

#[test]
fn critical_hotspot_renders_red() {
    let hot_1 = seed::hotspots()
        .into_iter()
        .find(|h| h.id.as_str() == "hot-1")
        .expect("hot-1 seeded");
    assert_eq!(hot_1.severity, Severity::Critical);
    assert_eq!(hotspot_congestion(&hot_1), 85);
    assert_eq!(hot_1.congestion_percent(), hotspot_congestion(&hot_1));
    assert_eq!(congestion_band(hotspot_congestion(&hot_1)), CongestionBand::Red);
}

#[test]
fn congestion_band_edges() {
    assert_eq!(congestion_band(80), CongestionBand::Red);
    assert_eq!(congestion_band(79), CongestionBand::Amber);
    assert_eq!(congestion_band(60), CongestionBand::Amber);
    assert_eq!(congestion_band(59), CongestionBand::Green);
}

#[test]
fn seeded_analytics_have_two_hotspot_areas() {
    // 85 and 72 are above the floor, 68 and 45 are not.
    assert_eq!(hotspot_area_count(&seed::analytics().congestion_areas), 2);
    assert!(!is_hotspot_level(70));
    assert!(is_hotspot_level(71));
}

#[test]
fn status_distribution_counts_inactive_as_offline() {
    let dist = signal_status_distribution(&seed::signals());
    assert_eq!(dist.offline, 1);
    assert_eq!(dist.green, 3);
    assert_eq!(dist.red, 2);
    assert_eq!(dist.amber, 1);
}

#[test]
fn status_change_requires_active_signal_and_new_colour() {
    let signals = seed::signals();
    let od_002 = &signals[1];
    assert!(status_change_allowed(od_002, SignalStatus::Green));
    assert!(!status_change_allowed(od_002, SignalStatus::Red));

    let offline = signals.iter().find(|s| !s.is_active).expect("inactive seed");
    for status in SignalStatus::ALL {
        assert!(!status_change_allowed(offline, status));
    }
}

proptest! {
    #[test]
    fn derivations_are_pure(levels in prop::collection::vec(any::<u8>(), 1..64)) {
        let first: Vec<_> = levels
            .iter()
            .map(|l| (efficiency_band(*l), congestion_band(*l)))
            .collect();
        let reversed: Vec<_> = levels
            .iter()
            .rev()
            .map(|l| (efficiency_band(*l), congestion_band(*l)))
            .collect();
        let replay: Vec<_> = reversed.into_iter().rev().collect();
        prop_assert_eq!(first, replay);

        for severity in [Severity::Critical, Severity::High, Severity::Medium] {
            prop_assert_eq!(severity_congestion(severity), severity_congestion(severity));
        }
    }

    #[test]
    fn red_band_implies_hotspot_level(level in 0u8..=100) {
        if congestion_band(level) == CongestionBand::Red {
            prop_assert!(is_hotspot_level(level));
        }
    }
}
