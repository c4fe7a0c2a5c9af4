use super::*;
use crate::seed;
use proptest::prelude::*;
use shared::error::ErrorCode;

fn sid(id: &str) -> SignalId {
    SignalId::from(id)
}

fn hid(id: &str) -> HotspotId {
    HotspotId::from(id)
}

fn focus_count(view: &SelectionView) -> usize {
    usize::from(view.selected_signal().is_some()) + usize::from(view.selected_hotspot().is_some())
}

#[test]
fn starts_without_focus() {
    let selection = SelectionCoordinator::new();
    assert_eq!(selection.focus(), &Focus::None);
    assert_eq!(selection.control_surface(), ControlSurface::None);
    assert!(selection.control_signal().is_none());
}

#[test]
fn selecting_hotspot_clears_signal_and_back() {
    let (signals, hotspots) = (seed::signals(), seed::hotspots());
    let mut selection = SelectionCoordinator::new();

    selection.select_signal(&signals, &sid("OD-003")).expect("signal");
    assert_eq!(selection.control_surface(), ControlSurface::Signal(sid("OD-003")));

    selection.select_hotspot(&hotspots, &hid("hot-2")).expect("hotspot");
    let view = selection.view();
    assert_eq!(view.selected_hotspot(), Some(&hid("hot-2")));
    assert!(view.selected_signal().is_none());

    selection.select_signal(&signals, &sid("OD-001")).expect("signal");
    let view = selection.view();
    assert_eq!(view.selected_signal(), Some(&sid("OD-001")));
    assert!(view.selected_hotspot().is_none());

    selection.clear();
    assert_eq!(selection.view(), SelectionView::default());
}

#[test]
fn unknown_ids_leave_focus_untouched() {
    let (signals, hotspots) = (seed::signals(), seed::hotspots());
    let mut selection = SelectionCoordinator::new();
    selection.select_hotspot(&hotspots, &hid("hot-1")).expect("hotspot");
    let before = selection.clone();

    let err = selection
        .select_hotspot(&hotspots, &hid("hot-404"))
        .expect_err("unknown hotspot");
    assert_eq!(err.code(), ErrorCode::NotFound);
    let err = selection
        .select_signal(&signals, &sid("OD-404"))
        .expect_err("unknown signal");
    assert_eq!(err.code(), ErrorCode::NotFound);

    assert_eq!(selection, before);
}

#[test]
fn nearest_signal_matches_exact_position() {
    let (signals, hotspots) = (seed::signals(), seed::hotspots());
    let hot_1 = &hotspots[0];
    assert_eq!((hot_1.latitude, hot_1.longitude), (20.2961, 85.8245));

    let matched = nearest_signal(hot_1, &signals).expect("match");
    assert_eq!(matched.id, sid("OD-002"));
    assert_eq!((matched.latitude, matched.longitude), (20.2961, 85.8245));
}

#[test]
fn nearest_signal_takes_first_in_box_by_list_order() {
    let (signals, hotspots) = (seed::signals(), seed::hotspots());
    // hot-2 sits within the box of OD-002 only.
    let matched = nearest_signal(&hotspots[1], &signals).expect("match");
    assert_eq!(matched.id, sid("OD-002"));

    let mut reordered = signals.clone();
    reordered.swap(1, 3);
    // hot-1 is inside the box of both OD-002 and OD-004; list order decides.
    let matched = nearest_signal(&hotspots[0], &reordered).expect("match");
    assert_eq!(matched.id, sid("OD-004"));
}

#[test]
fn nearest_signal_falls_back_to_first_signal() {
    let (signals, hotspots) = (seed::signals(), seed::hotspots());
    let hot_4 = hotspots.iter().find(|h| h.id == hid("hot-4")).expect("hot-4");
    assert!(signals.iter().all(|s| {
        (s.latitude - hot_4.latitude).abs() >= SIGNAL_MATCH_EPSILON
            || (s.longitude - hot_4.longitude).abs() >= SIGNAL_MATCH_EPSILON
    }));

    let matched = nearest_signal(hot_4, &signals).expect("fallback");
    assert_eq!(matched.id, signals[0].id);
    assert!(nearest_signal(hot_4, &[]).is_none());
}

#[test]
fn open_signal_control_keeps_hotspot_focus() {
    let (signals, hotspots) = (seed::signals(), seed::hotspots());
    let mut selection = SelectionCoordinator::new();

    let err = selection
        .open_signal_control(&hotspots, &signals)
        .expect_err("needs hotspot focus");
    assert!(matches!(err, ControlError::NoHotspotFocus));

    selection.select_hotspot(&hotspots, &hid("hot-1")).expect("hotspot");
    let signal_id = selection.open_signal_control(&hotspots, &signals).expect("open");
    assert_eq!(signal_id, sid("OD-002"));
    assert_eq!(selection.focus(), &Focus::Hotspot(hid("hot-1")));
    assert_eq!(selection.control_surface(), ControlSurface::Signal(sid("OD-002")));
    assert_eq!(selection.control_signal(), Some(&sid("OD-002")));

    selection.close_signal_control();
    assert_eq!(selection.control_surface(), ControlSurface::Hotspot(hid("hot-1")));
    assert!(selection.control_signal().is_none());
}

#[test]
fn selecting_a_signal_drops_intervention_mode() {
    let (signals, hotspots) = (seed::signals(), seed::hotspots());
    let mut selection = SelectionCoordinator::new();
    selection.select_hotspot(&hotspots, &hid("hot-4")).expect("hotspot");
    selection.open_signal_control(&hotspots, &signals).expect("open");

    selection.select_signal(&signals, &sid("OD-005")).expect("signal");
    let view = selection.view();
    assert!(!view.show_signal_control);
    assert!(view.intervention_signal.is_none());
}

#[derive(Debug, Clone)]
enum Step {
    Signal(usize),
    Hotspot(usize),
    UnknownHotspot,
    OpenControl,
    CloseControl,
    Clear,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..7).prop_map(Step::Signal),
        (0usize..4).prop_map(Step::Hotspot),
        Just(Step::UnknownHotspot),
        Just(Step::OpenControl),
        Just(Step::CloseControl),
        Just(Step::Clear),
    ]
}

proptest! {
    #[test]
    fn at_most_one_focus_after_every_step(steps in prop::collection::vec(step_strategy(), 0..64)) {
        let (signals, hotspots) = (seed::signals(), seed::hotspots());
        let mut selection = SelectionCoordinator::new();

        for step in steps {
            let _ = match step {
                Step::Signal(i) => selection.select_signal(&signals, &signals[i].id.clone()),
                Step::Hotspot(i) => selection.select_hotspot(&hotspots, &hotspots[i].id.clone()),
                Step::UnknownHotspot => selection.select_hotspot(&hotspots, &hid("nope")),
                Step::OpenControl => selection.open_signal_control(&hotspots, &signals).map(|_| ()),
                Step::CloseControl => {
                    selection.close_signal_control();
                    Ok(())
                }
                Step::Clear => {
                    selection.clear();
                    Ok(())
                }
            };

            let view = selection.view();
            prop_assert!(focus_count(&view) <= 1);
            if view.show_signal_control {
                prop_assert!(view.selected_hotspot().is_some());
                prop_assert!(view.intervention_signal.is_some());
            }
        }
    }
}
