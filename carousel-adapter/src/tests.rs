use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use carousel::{CarouselOptions, DragOutcome, Size};

fn options() -> CarouselOptions<&'static str> {
    CarouselOptions::new(vec!["a", "b", "c", "d", "e"], Size::new(300.0, 300.0))
        .with_item(Size::new(100.0, 100.0))
        .with_inactive_scale(1.0)
        .with_separator_width(0.0)
}

fn run(c: &mut Controller<&'static str>, from_ms: u64, to_ms: u64) -> Vec<f32> {
    (from_ms..=to_ms)
        .step_by(10)
        .filter_map(|now_ms| c.tick(now_ms))
        .collect()
}

#[test]
fn easing_hits_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::Decelerate] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
    assert_eq!(Easing::Decelerate.sample(0.5), 0.875);
    assert_eq!(Easing::Decelerate.sample(2.0), 1.0);
}

#[test]
fn tween_handles_negative_offsets() {
    let t = Tween::new(0.0, -100.0, 1_000, 100, Easing::Linear);
    assert_eq!(t.sample(1_000), 0.0);
    assert_eq!(t.sample(1_050), -50.0);
    assert_eq!(t.sample(1_100), -100.0);
    assert_eq!(t.sample(5_000), -100.0);
    assert!(!t.is_done(1_099));
    assert!(t.is_done(1_100));

    let mut r = t;
    r.retarget(1_050, 200.0, 100);
    assert_eq!(r.from, -50.0);
    assert_eq!(r.start_ms, 1_050);
    assert_eq!(r.sample(1_150), 200.0);
}

#[test]
fn scroll_waits_for_the_next_tick() {
    let mut c = Controller::new(options()).with_easing(Easing::Linear);
    assert_eq!(c.tick(0), None);

    assert!(c.scroll_to_index(2));
    assert_eq!(c.current_index(), 2);
    assert!(!c.is_animating());
    assert_eq!(c.carousel().scroll_position(), 0.0);

    let offsets = run(&mut c, 0, 300);
    assert!(!offsets.is_empty());
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(offsets.last().copied(), Some(100.0));
    assert!(!c.is_animating());
    assert_eq!(c.carousel().scroll_position(), 100.0);
    assert_eq!(c.tick(400), None);
}

#[test]
fn user_scroll_cancels_the_tween() {
    let mut c = Controller::new(options()).with_duration_ms(200);
    c.scroll_to_index(4);
    c.tick(0);
    c.tick(50);
    assert!(c.is_animating());

    c.on_scroll(123.0);
    assert!(!c.is_animating());
    assert_eq!(c.tick(60), None);
    assert_eq!(c.carousel().scroll_position(), 123.0);
}

#[test]
fn new_command_retargets_a_running_tween() {
    let mut c = Controller::new(options())
        .with_duration_ms(100)
        .with_easing(Easing::Linear);
    c.scroll_to_index(4);
    c.tick(0);
    let mid = c.tick(50).unwrap();
    assert_eq!(mid, 150.0);

    // Picked up at 60ms, so the new tween starts where the old one was by then.
    c.scroll_to_index(1);
    let offsets = run(&mut c, 60, 200);
    assert!(offsets[0] > mid);
    assert!(offsets.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(offsets.last().copied(), Some(0.0));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn drag_pages_then_tweens_to_the_neighbour() {
    let mut c = Controller::new(options()).with_duration_ms(100);
    c.scroll_to_index(1);
    run(&mut c, 0, 200);
    assert_eq!(c.carousel().scroll_position(), 0.0);

    c.on_scroll_begin_drag();
    c.on_scroll(40.0);
    assert_eq!(
        c.on_scroll_end_drag(),
        DragOutcome::Paged {
            target: 2,
            accepted: true
        }
    );
    run(&mut c, 300, 500);
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.carousel().scroll_position(), 100.0);
}

#[test]
fn jumps_skip_the_tween() {
    let mut c = Controller::new(options());
    assert!(c.carousel_mut().jump_to_index(3));
    assert_eq!(c.tick(0), Some(200.0));
    assert!(!c.is_animating());

    let mut instant = Controller::new(options()).with_duration_ms(0);
    instant.scroll_to_index(4);
    assert_eq!(instant.tick(0), Some(300.0));
}

#[test]
fn item_styles_follow_the_scroll_position() {
    let mut c = Controller::new(options().with_inactive_scale(0.5));
    let mid = c.carousel().geometry().breakpoints(2).unwrap().mid;
    c.on_scroll(mid);
    let styles = c.item_styles();
    assert_eq!(styles.len(), 5);
    assert_eq!(styles[2].scale, 1.0);
    assert_eq!(styles[0].scale, 0.5);
}

#[test]
fn first_item_rests_at_the_leading_edge() {
    let mut c = Controller::new(options().with_initial_index(2)).with_duration_ms(0);
    c.on_scroll(100.0);
    assert_eq!(c.carousel().geometry().item_offset(0), -100.0);

    assert!(c.scroll_to_index(0));
    assert_eq!(c.tick(0), Some(0.0));
    assert_eq!(c.carousel().scroll_position(), 0.0);

    c.on_scroll_begin_drag();
    c.on_scroll(40.0);
    assert_eq!(
        c.on_scroll_end_drag(),
        DragOutcome::Paged {
            target: 1,
            accepted: true
        }
    );
    assert_eq!(c.tick(10), Some(0.0));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn tween_to_the_first_item_never_overshoots_zero() {
    let mut c = Controller::new(options().with_initial_index(2))
        .with_duration_ms(100)
        .with_easing(Easing::Linear);
    c.on_scroll(100.0);
    c.scroll_to_index(0);
    let offsets = run(&mut c, 0, 200);
    assert!(offsets.iter().all(|&o| o >= 0.0));
    assert_eq!(offsets.last().copied(), Some(0.0));

    c.on_scroll_begin_drag();
    c.on_scroll(6.0);
    assert_eq!(
        c.on_scroll_end_drag(),
        DragOutcome::Paged {
            target: 1,
            accepted: true
        }
    );
}
