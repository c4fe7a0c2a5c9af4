use std::time::Duration;

use shared::{
    domain::{HotspotId, Severity, SignalId, SignalStatus},
    protocol::{ControlSurface, DashboardEvent},
};
use traffic_core::{
    derivation::{congestion_band, hotspot_area_count, severity_congestion, CongestionBand},
    nearest_signal, seed,
    synthetic::{AREA_VEHICLE_FLOOR, LEVEL_MAX, LEVEL_MIN},
    DashboardConfig, TrafficDashboard,
};

#[tokio::test(start_paused = true)]
async fn operator_turns_hospital_signal_green_acceptance() {
    let dashboard = TrafficDashboard::new(DashboardConfig {
        seed: Some(99),
        ..DashboardConfig::default()
    });
    let mut events = dashboard.subscribe_events();
    let od_002 = SignalId::from("OD-002");

    dashboard.select_signal(&od_002).await.expect("focus signal");
    assert_eq!(
        dashboard.control_surface().await,
        ControlSurface::Signal(od_002.clone())
    );

    let pending = dashboard
        .request_status_change(&od_002, SignalStatus::Green)
        .await
        .expect("change accepted");
    assert!(dashboard.is_changing(&od_002).await);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    let updated = pending.wait().await.expect("change applied");

    assert_eq!(updated.status, SignalStatus::Green);
    assert!(!dashboard.is_changing(&od_002).await);

    let mut started = false;
    let mut changed = false;
    while let Ok(event) = events.try_recv() {
        match event {
            DashboardEvent::StatusChangeStarted { signal_id, .. } if signal_id == od_002 => {
                started = true;
            }
            DashboardEvent::SignalStatusChanged {
                signal_id, from, to, ..
            } if signal_id == od_002 => {
                assert!(started, "start event precedes completion");
                assert_eq!((from, to), (SignalStatus::Red, SignalStatus::Green));
                changed = true;
            }
            _ => {}
        }
    }
    assert!(changed);
}

#[tokio::test]
async fn critical_hotspot_maps_to_red_band_acceptance() {
    let dashboard = TrafficDashboard::new(DashboardConfig::default());
    let hot_1 = dashboard
        .hotspot(&HotspotId::from("hot-1"))
        .await
        .expect("hot-1 seeded");

    assert_eq!(hot_1.severity, Severity::Critical);
    assert_eq!(severity_congestion(Severity::Critical), 85);
    assert_eq!(congestion_band(85), CongestionBand::Red);
}

#[test]
fn hotspot_signal_lookup_acceptance() {
    let signals = seed::signals();
    let hotspots = seed::hotspots();

    let hot_1 = &hotspots[0];
    assert_eq!((hot_1.latitude, hot_1.longitude), (20.2961, 85.8245));
    let exact = nearest_signal(hot_1, &signals).expect("exact match");
    assert_eq!((exact.latitude, exact.longitude), (hot_1.latitude, hot_1.longitude));

    let isolated = hotspots
        .iter()
        .find(|h| h.id.as_str() == "hot-4")
        .expect("isolated hotspot");
    let fallback = nearest_signal(isolated, &signals).expect("never null");
    assert_eq!(fallback.id, signals[0].id);
}

#[tokio::test(start_paused = true)]
async fn long_running_synthetic_updates_stay_bounded_acceptance() {
    let dashboard = TrafficDashboard::new(DashboardConfig {
        seed: Some(5),
        tick_period: Duration::from_millis(50),
        ..DashboardConfig::default()
    });
    let initial = dashboard.analytics().await;
    assert_eq!((initial.active_signals, initial.total_signals), (24, 28));

    dashboard.start_synthetic_updates().await;
    tokio::time::sleep(Duration::from_millis(50 * 500 + 5)).await;
    dashboard.stop_synthetic_updates().await;

    assert_eq!(dashboard.synthetic_ticks().await, 500);
    let analytics = dashboard.analytics().await;
    assert!(analytics.active_signals <= analytics.total_signals);
    assert_eq!(analytics.active_signals, 24);
    for area in &analytics.congestion_areas {
        assert!((LEVEL_MIN..=LEVEL_MAX).contains(&area.level));
        assert!(area.vehicles >= AREA_VEHICLE_FLOOR);
    }
    assert!(hotspot_area_count(&analytics.congestion_areas) <= analytics.congestion_areas.len());
}
