use super::{apply_env_overrides, load_settings, read_settings_file, Settings};

use std::{collections::HashMap, fs, path::Path, time::Duration};

use shared::domain::{ResponseTime, SystemMode};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_dashboard_timings() {
    let settings = Settings::default();
    let config = settings.to_dashboard_config();
    assert_eq!(config.tick_period, Duration::from_millis(3000));
    assert_eq!(config.status_change_latency, Duration::from_millis(1000));
    assert_eq!(config.seed, None);
    assert_eq!(config.settings.system_mode, SystemMode::Hybrid);
}

#[test]
fn reads_partial_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dashboard.toml");
    fs::write(
        &path,
        r#"
tick_period_ms = 500
seed = 42

[control]
system_mode = "manual"
response_time = "aggressive"
"#,
    )
    .expect("write config");

    let settings = read_settings_file(&path).expect("parse");
    assert_eq!(settings.tick_period_ms, 500);
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.status_change_latency_ms, 1000);
    assert_eq!(settings.control.system_mode, SystemMode::Manual);
    assert_eq!(settings.control.response_time, ResponseTime::Aggressive);
    assert_eq!(settings.control.congestion_threshold, 80);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = load_settings(Some(Path::new("/definitely/not/here/dashboard.toml")))
        .expect_err("missing file");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn malformed_file_reports_parse_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "tick_period_ms = \"fast\"").expect("write config");

    let err = read_settings_file(&path).expect_err("bad type");
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
fn env_overrides_win_and_bad_numbers_are_ignored() {
    let mut settings = Settings {
        tick_period_ms: 500,
        ..Settings::default()
    };
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("APP__TICK_PERIOD_MS", "abc"),
            ("APP__STATUS_CHANGE_LATENCY_MS", "250"),
            ("APP__SEED", "7"),
            ("APP__SYSTEM_MODE", "AI"),
            ("APP__CONGESTION_THRESHOLD", "70"),
        ]),
    );

    assert_eq!(settings.tick_period_ms, 500);
    assert_eq!(settings.status_change_latency_ms, 250);
    assert_eq!(settings.seed, Some(7));
    assert_eq!(settings.control.system_mode, SystemMode::Ai);
    assert_eq!(settings.control.congestion_threshold, 70);
}

#[test]
fn zero_period_is_clamped() {
    let settings = Settings {
        tick_period_ms: 0,
        event_buffer: 0,
        ..Settings::default()
    };
    let config = settings.to_dashboard_config();
    assert_eq!(config.tick_period, Duration::from_millis(1));
    assert_eq!(config.event_buffer, 1);
}
