//! End-to-end interaction scenarios driven through `Garden`
//!
//! Time is synthetic: every step passes `t0 + offset`, so timer chains and
//! animations are advanced explicitly.

use std::time::{Duration, Instant};

use garden_core::actions::ActionState;
use garden_core::feedback::{FeedbackEvent, FeedbackHint, FeedbackState};
use garden_core::scroll::ScrollMetrics;
use garden_core::swipe::SwipeMetrics;
use garden_core::{Element, Garden, LayoutSnapshot, MotionPreference, Rect};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Fake measurement port with a 400-wide swipe item and a navigation stage
fn layout() -> LayoutSnapshot {
    LayoutSnapshot::new()
        .with(Element::SwipeItem, Rect::new(10.0, 30.0, 400.0, 48.0))
        .with(Element::NavigationStage, Rect::new(0.0, 0.0, 80.0, 40.0))
        .with(Element::NavigationItem(0), Rect::new(4.0, 6.0, 20.0, 10.0))
        .with(Element::NavigationItem(1), Rect::new(28.0, 6.0, 20.0, 10.0))
}

/// Tick every 16ms from `from` to `to`, collecting feedback events
fn run_frames(garden: &mut Garden, t0: Instant, from: u64, to: u64) -> Vec<FeedbackEvent> {
    let mut events = Vec::new();
    let mut at = from;
    while at <= to {
        events.extend(garden.tick(t0 + ms(at)).feedback);
        at += 16;
    }
    events.extend(garden.tick(t0 + ms(to)).feedback);
    events
}

#[test]
fn swipe_open_then_save() {
    let t0 = Instant::now();
    let measure = layout();
    let mut garden = Garden::new(MotionPreference::full(), t0);
    let metrics = SwipeMetrics::from_width(400.0);

    assert!(garden.pointer_down(1, 300.0, &measure, t0));
    for (i, x) in [280.0, 220.0, 150.0, 90.0, 60.0].into_iter().enumerate() {
        garden.pointer_move(1, x);
        let offset = garden.swipe().offset();
        assert!(
            (-metrics.max_reveal..=0.0).contains(&offset),
            "offset {} out of bounds at move {}",
            offset,
            i
        );
    }
    assert_eq!(garden.pointer_up(t0 + ms(100)), Some(true));

    run_frames(&mut garden, t0, 100, 400);
    assert_eq!(garden.swipe().offset(), -metrics.max_reveal);
    assert!(garden.swipe().is_open());

    assert!(garden.save(t0 + ms(500)));
    assert_eq!(garden.actions().state(), ActionState::Saved);
    run_frames(&mut garden, t0, 500, 780);
    assert_eq!(garden.swipe().offset(), 0.0);
    assert!(!garden.swipe().is_open());
    assert_eq!(garden.actions().item_label(), "Saved item");
    assert_eq!(garden.actions().state().save_label(), "Saved");
}

#[test]
fn short_drag_settles_closed() {
    let t0 = Instant::now();
    let measure = layout();
    let mut garden = Garden::new(MotionPreference::full(), t0);

    for round in 0..2u64 {
        let start = round * 1000;
        garden.pointer_down(1, 300.0, &measure, t0 + ms(start));
        garden.pointer_move(1, 250.0);
        assert_eq!(garden.pointer_up(t0 + ms(start + 50)), Some(false));
        run_frames(&mut garden, t0, start + 50, start + 400);
        assert_eq!(garden.swipe().offset(), 0.0);
    }
}

#[test]
fn feedback_love_cycle() {
    let t0 = Instant::now();
    let mut garden = Garden::new(MotionPreference::full(), t0);

    for c in "Lov".chars() {
        garden.feedback_mut().push_char(c);
    }
    assert_eq!(garden.feedback().state(), FeedbackState::Idle);
    assert!(!garden.feedback().can_submit());
    assert_eq!(garden.feedback().hint(), Some(FeedbackHint::Generic));

    garden.feedback_mut().push_char('e');
    assert_eq!(garden.feedback().hint(), None);
    assert!(garden.feedback().can_submit());

    assert!(garden.submit_feedback(t0));
    assert_eq!(garden.feedback().state(), FeedbackState::Loading);
    assert!(!garden.feedback().can_submit());
    assert!(!garden.submit_feedback(t0 + ms(100)));

    let events = run_frames(&mut garden, t0, 0, 1049);
    assert!(events.is_empty());

    let events = run_frames(&mut garden, t0, 1050, 1899);
    assert_eq!(events, vec![FeedbackEvent::Succeeded]);
    assert_eq!(garden.feedback().button_label(), "Sent");

    let events = run_frames(&mut garden, t0, 1900, 2259);
    assert_eq!(events, vec![FeedbackEvent::ResetStarted]);
    assert!(garden.feedback().is_resetting());
    assert_eq!(garden.feedback().input(), "Love");

    let events = run_frames(&mut garden, t0, 2260, 4000);
    assert_eq!(events, vec![FeedbackEvent::ResetFinished]);
    assert_eq!(garden.feedback().state(), FeedbackState::Idle);
    assert_eq!(garden.feedback().input(), "");
    assert!(!garden.feedback().is_resetting());
}

#[test]
fn reduced_motion_keeps_transition_order() {
    let t0 = Instant::now();
    let mut garden = Garden::new(MotionPreference::reduced(), t0);
    garden.feedback_mut().set_input("Love");
    assert!(garden.submit_feedback(t0));

    let report = garden.tick(t0);
    assert_eq!(
        report.feedback,
        vec![
            FeedbackEvent::Succeeded,
            FeedbackEvent::ResetStarted,
            FeedbackEvent::ResetFinished
        ]
    );
    assert_eq!(garden.feedback().input(), "");
}

#[test]
fn remove_reverts_to_default() {
    let t0 = Instant::now();
    let measure = layout();
    let mut garden = Garden::new(MotionPreference::full(), t0);

    garden.swipe_mut().open(&measure, t0);
    run_frames(&mut garden, t0, 0, 300);
    assert!(garden.remove(t0 + ms(300)));
    assert_eq!(garden.actions().state(), ActionState::Removed);

    let mut seen = vec![garden.actions().state()];
    let mut at = 300;
    while at <= 2400 {
        garden.tick(t0 + ms(at));
        let state = garden.actions().state();
        if seen.last() != Some(&state) {
            seen.push(state);
        }
        at += 50;
    }
    assert_eq!(seen, vec![ActionState::Removed, ActionState::Default]);
    assert_eq!(garden.actions().opacity(t0 + ms(2400)), 1.0);
}

#[test]
fn detail_rect_lives_until_exit_completes() {
    let t0 = Instant::now();
    let measure = layout();
    let mut garden = Garden::new(MotionPreference::full(), t0);
    assert!(garden.detail().rect().is_none());

    assert!(garden.open_detail(1, &measure, t0));
    run_frames(&mut garden, t0, 0, 450);
    assert!(garden.on_escape(t0 + ms(500)));

    let mut at = 500;
    while at < 950 {
        let report = garden.tick(t0 + ms(at));
        assert!(!report.detail_closed);
        assert!(garden.detail().rect().is_some());
        at += 16;
    }
    assert!(garden.tick(t0 + ms(950)).detail_closed);
    assert!(garden.detail().rect().is_none());
    assert!(!garden.on_escape(t0 + ms(1000)));
}

#[test]
fn scroll_bursts_coalesce_into_one_frame() {
    let t0 = Instant::now();
    let mut garden = Garden::new(MotionPreference::full(), t0);

    for top in [10.0, 40.0, 90.0, 150.0] {
        garden.on_scroll(ScrollMetrics::new(top, 400.0, 100.0));
    }
    let report = garden.tick(t0);
    assert_eq!(report.progress, Some(0.5));
    assert!(garden.tick(t0 + ms(16)).progress.is_none());

    let stages = garden.depth_stages();
    assert_eq!(stages.hero, 1.0);
    assert_eq!(stages.footer, 0.0);
}

#[test]
fn dispose_cancels_everything() {
    let t0 = Instant::now();
    let measure = layout();
    let mut garden = Garden::new(MotionPreference::full(), t0);

    garden.swipe_mut().open(&measure, t0);
    garden.tick(t0 + ms(300));
    garden.remove(t0 + ms(300));
    garden.feedback_mut().set_input("Love");
    garden.submit_feedback(t0 + ms(300));
    garden.on_scroll(ScrollMetrics::new(20.0, 200.0, 100.0));

    garden.dispose();
    assert!(!garden.needs_frame(t0 + ms(300)));
    assert!(!garden.actions().reset_pending());
    assert!(garden.tick(t0 + ms(10_000)).is_empty());
    assert_eq!(garden.actions().state(), ActionState::Removed);
    assert_eq!(garden.feedback().state(), FeedbackState::Loading);
    assert_eq!(garden.scroll().progress(), 0.0);
}
