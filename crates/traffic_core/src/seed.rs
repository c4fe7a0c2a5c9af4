//! Fixed initial entities loaded when a dashboard is created.

use shared::domain::{
    AnalyticsSnapshot, Area, AreaId, CongestionArea, CongestionLevel, Hotspot, HotspotId,
    HourlyTraffic, Severity, Signal, SignalEfficiency, SignalId, SignalStatus,
};

fn signal(
    id: &str,
    location: &str,
    latitude: f64,
    longitude: f64,
    status: SignalStatus,
    is_active: bool,
) -> Signal {
    Signal {
        id: SignalId::from(id),
        latitude,
        longitude,
        status,
        location: location.to_string(),
        is_active,
    }
}

fn hotspot(
    id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    severity: Severity,
    vehicle_count: u32,
    estimated_delay: &str,
) -> Hotspot {
    Hotspot {
        id: HotspotId::from(id),
        name: name.to_string(),
        latitude,
        longitude,
        severity,
        ai_detected: true,
        vehicle_count,
        estimated_delay: estimated_delay.to_string(),
    }
}

pub fn signals() -> Vec<Signal> {
    vec![
        signal("OD-001", "Airport Square", 20.2520, 85.8178, SignalStatus::Green, true),
        signal("OD-002", "Kalinga Hospital Square", 20.2961, 85.8245, SignalStatus::Red, true),
        signal("OD-003", "Patia Crossing", 20.3540, 85.8190, SignalStatus::Amber, true),
        signal("OD-004", "Jaydev Vihar Square", 20.2984, 85.8183, SignalStatus::Green, true),
        signal("OD-005", "Rasulgarh Square", 20.2952, 85.8581, SignalStatus::Red, true),
        signal("OD-006", "Master Canteen", 20.2689, 85.8426, SignalStatus::Amber, false),
        signal("OD-007", "Vani Vihar Square", 20.2906, 85.8432, SignalStatus::Green, true),
    ]
}

pub fn hotspots() -> Vec<Hotspot> {
    vec![
        hotspot(
            "hot-1",
            "Kalinga Hospital Junction",
            20.2961,
            85.8245,
            Severity::Critical,
            45,
            "8-12 min",
        ),
        hotspot(
            "hot-2",
            "Kalinga Stadium Exit Route",
            20.2870,
            85.8210,
            Severity::High,
            32,
            "5-8 min",
        ),
        hotspot(
            "hot-3",
            "Patia Market Access",
            20.3545,
            85.8195,
            Severity::Medium,
            18,
            "2-4 min",
        ),
        // No signal within the match box; manual intervention falls back.
        hotspot(
            "hot-4",
            "Khandagiri Square",
            20.2553,
            85.7792,
            Severity::High,
            27,
            "4-6 min",
        ),
    ]
}

pub fn areas() -> Vec<Area> {
    let area = |id: &str, name: &str, level, signal_count, last_updated: &str| Area {
        id: AreaId::from(id),
        name: name.to_string(),
        congestion_level: level,
        signal_count,
        last_updated: last_updated.to_string(),
    };

    vec![
        area("1", "Airport Zone", CongestionLevel::High, 12, "2 min ago"),
        area("2", "University Corridor", CongestionLevel::Medium, 8, "1 min ago"),
        area("3", "Chandrasekharpur North", CongestionLevel::Low, 6, "3 min ago"),
        area("4", "Mancheswar Industrial Estate", CongestionLevel::Medium, 4, "1 min ago"),
    ]
}

pub fn analytics() -> AnalyticsSnapshot {
    let congestion = |name: &str, level, vehicles| CongestionArea {
        name: name.to_string(),
        level,
        vehicles,
    };
    let efficiency_row = |id: &str, location: &str, efficiency, throughput| SignalEfficiency {
        id: SignalId::from(id),
        location: location.to_string(),
        efficiency,
        throughput,
    };
    let hourly = [
        (6, 145, 1.2),
        (7, 298, 2.1),
        (8, 456, 4.2),
        (9, 523, 5.1),
        (10, 387, 3.8),
        (11, 342, 2.9),
        (12, 398, 3.2),
        (13, 423, 3.5),
        (14, 356, 2.8),
        (15, 445, 4.1),
        (16, 512, 4.8),
        (17, 598, 5.9),
        (18, 623, 6.2),
        (19, 487, 4.5),
        (20, 321, 2.7),
    ];

    AnalyticsSnapshot {
        total_signals: 28,
        active_signals: 24,
        total_vehicles: 1247,
        average_delay: "3.2 min".to_string(),
        peak_hours: vec!["08:00-10:00".to_string(), "17:00-19:00".to_string()],
        congestion_areas: vec![
            congestion("Bhubaneswar Airport", 85, 342),
            congestion("Kalinga Stadium", 72, 186),
            congestion("Patia Square", 68, 154),
            congestion("Jaydev Vihar", 45, 98),
        ],
        signal_efficiency: vec![
            efficiency_row("OD-001", "Airport Square", 92, 450),
            efficiency_row("OD-002", "Kalinga Hospital", 87, 320),
            efficiency_row("OD-003", "Patia Crossing", 78, 280),
            efficiency_row("OD-004", "Jaydev Vihar", 95, 380),
        ],
        hourly_traffic: hourly
            .into_iter()
            .map(|(hour, vehicles, avg_delay)| HourlyTraffic {
                hour,
                vehicles,
                avg_delay,
            })
            .collect(),
    }
}
