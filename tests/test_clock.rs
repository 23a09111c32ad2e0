use dino_runner::clock::Clock;
use dino_runner::entities::Vec2;
use dino_runner::movement::Movement;

const EPS: f64 = 1e-9;

// ── Clock ─────────────────────────────────────────────────────────────────────

#[test]
fn clock_starts_at_zero() {
    assert_eq!(Clock::new().current_time(), 0.0);
}

#[test]
fn clock_accumulates() {
    let mut clock = Clock::new();
    clock.advance(0.02);
    let t = clock.advance(0.03);
    assert!((t - 0.05).abs() < EPS);
    assert_eq!(t, clock.current_time());
}

#[test]
fn clock_clamps_negative_elapsed() {
    let mut clock = Clock::new();
    clock.advance(1.0);
    assert_eq!(clock.advance(-0.5), 1.0);
}

#[test]
fn clock_clamps_non_finite_elapsed() {
    let mut clock = Clock::new();
    clock.advance(0.5);
    assert_eq!(clock.advance(f64::NAN), 0.5);
    assert_eq!(clock.advance(f64::INFINITY), 0.5);
}

#[test]
fn clock_reset() {
    let mut clock = Clock::new();
    clock.advance(3.0);
    clock.reset();
    assert_eq!(clock.current_time(), 0.0);
}

// ── Movement ──────────────────────────────────────────────────────────────────

fn accelerating() -> Movement {
    Movement::new(Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(2.0, 0.0))
}

#[test]
fn first_update_anchors_the_motion() {
    let mut m = accelerating();
    m.update(1.0);
    assert_eq!(m.pos(), Vec2::ZERO);
    assert_eq!(m.velocity(), Vec2::new(10.0, 0.0));
}

#[test]
fn position_follows_closed_form() {
    let mut m = accelerating();
    m.update(1.0);
    m.update(3.0);
    // dt = 2: 10·2 + ½·2·4
    assert!((m.pos().x - 24.0).abs() < EPS);
    assert!((m.velocity().x - 14.0).abs() < EPS);
}

#[test]
fn position_does_not_depend_on_update_count() {
    let mut coarse = accelerating();
    coarse.update(1.0);
    coarse.update(3.0);

    let mut fine = accelerating();
    for i in 0..=100 {
        fine.update(1.0 + i as f64 * 0.02);
    }
    fine.update(3.0);

    assert_eq!(coarse.pos(), fine.pos());
    assert_eq!(coarse.velocity(), fine.velocity());
}

#[test]
fn times_before_anchor_evaluate_to_anchor_state() {
    let mut m = accelerating();
    m.update(5.0);
    m.update(4.0);
    assert_eq!(m.pos(), Vec2::ZERO);
}

#[test]
fn retarget_re_anchors() {
    let mut m = accelerating();
    m.update(0.0);
    m.retarget(2.0, Vec2::new(5.0, 5.0), Vec2::new(0.0, -10.0), Vec2::new(0.0, 20.0));
    assert_eq!(m.pos(), Vec2::new(5.0, 5.0));
    m.update(3.0);
    assert!((m.pos().y - 5.0).abs() < EPS); // up 10, back down 10
    assert!((m.velocity().y - 10.0).abs() < EPS);
    assert_eq!(m.acceleration(), Vec2::new(0.0, 20.0));
}

#[test]
fn reset_restores_construction_values() {
    let mut m = accelerating();
    m.update(0.0);
    m.retarget(1.0, Vec2::new(9.0, 9.0), Vec2::ZERO, Vec2::ZERO);
    m.reset();
    m.update(10.0);
    assert_eq!(m.pos(), Vec2::ZERO);
    assert_eq!(m.velocity(), Vec2::new(10.0, 0.0));
    assert_eq!(m.acceleration(), Vec2::new(2.0, 0.0));
}
