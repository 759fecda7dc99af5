//! End-to-end scroll sequences through the controller, replayed as traces.

use shynav::prelude::*;
use shynav_core::state::NavFlags;

fn controller(header_height: f32) -> ScrollNavController {
    ScrollNavController::initialize(1280.0, header_height).expect("viewport above gate")
}

const NORMAL: NavFlags = NavFlags {
    fixed: false,
    visible: false,
};
const FIXED: NavFlags = NavFlags {
    fixed: true,
    visible: false,
};
const FIXED_VISIBLE: NavFlags = NavFlags {
    fixed: true,
    visible: true,
};

#[test]
fn stationary_events_change_nothing() {
    let mut nav = controller(100.0);
    let trace = ScrollTrace::from_json(
        r#"{ "steps": [
            { "type": "scroll_to", "top": 150.0 },
            { "type": "repeat", "top": 150.0, "count": 4 }
        ] }"#,
    )
    .unwrap();

    let observed = trace.run(&mut nav);
    assert_eq!(observed, vec![FIXED; 5]);
    assert_eq!(nav.previous_top(), 150.0);
}

#[test]
fn pins_exactly_when_descending_past_header() {
    let mut nav = controller(100.0);
    let observed = ScrollTrace::from_offsets([50.0, 120.0, 150.0]).run(&mut nav);
    assert_eq!(observed, vec![NORMAL, FIXED, FIXED]);
}

#[test]
fn ascending_to_top_clears_both_flags() {
    let mut nav = controller(100.0);
    nav.on_scroll(150.0);
    assert_eq!(nav.on_scroll(0.0), NORMAL);
}

#[test]
fn ascending_while_pinned_reveals_bar() {
    let mut nav = controller(100.0);
    nav.on_scroll(150.0);
    assert_eq!(nav.on_scroll(120.0), FIXED_VISIBLE);
}

#[test]
fn down_up_cycle_returns_to_normal_only_at_top() {
    let mut nav = controller(100.0);
    let observed = ScrollTrace::from_offsets([150.0, 100.0, 0.0]).run(&mut nav);
    assert_eq!(observed, vec![FIXED, FIXED_VISIBLE, NORMAL]);
}

#[test]
fn narrow_viewport_never_activates() {
    assert!(ScrollNavController::initialize(1170.0, 100.0).is_none());
    assert!(ScrollNavController::initialize(375.0, 100.0).is_none());
}

#[test]
fn slow_crawl_down_then_jitter_up() {
    // Descend in small steps, pin after crossing the header, then a single
    // upward jitter reveals the bar without unpinning it.
    let mut nav = controller(80.0);
    let observed =
        ScrollTrace::from_offsets([20.0, 40.0, 60.0, 81.0, 200.0, 199.0, 205.0]).run(&mut nav);
    assert_eq!(
        observed,
        vec![
            NORMAL,
            NORMAL,
            NORMAL,
            FIXED,
            FIXED,
            FIXED_VISIBLE,
            FIXED
        ]
    );
}

#[test]
fn render_info_tracks_trace() {
    let mut nav = controller(100.0);
    let attrs: Vec<String> = ScrollTrace::from_offsets([150.0, 120.0, 0.0])
        .run(&mut nav)
        .into_iter()
        .map(|flags| NavRenderInfo::from_flags(flags).class_attr())
        .collect();
    assert_eq!(attrs, vec!["is-fixed", "is-fixed is-visible", ""]);
}
