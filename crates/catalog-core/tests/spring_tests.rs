// Host-side tests for the open/close spring.

use catalog_core::{OpenAnimation, Spring, SpringParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FRAME: f32 = 1.0 / 60.0;

fn settle(spring: &mut Spring, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        spring.step(FRAME);
    }
}

#[test]
fn default_params_are_overdamped() {
    let p = SpringParams::default();
    assert_eq!(p.mass, 1.0);
    assert_eq!(p.tension, 120.0);
    assert_eq!(p.friction, 30.0);
    assert!(p.damping_ratio() > 1.0);
}

#[test]
fn new_spring_rests_at_its_value() {
    let mut s = Spring::new(1.0);
    assert!(s.is_idle());
    assert_eq!(s.step(FRAME), 1.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn closing_settles_exactly_on_zero() {
    let mut s = Spring::new(1.0);
    s.set_target(0.0);
    assert!(!s.is_idle());
    settle(&mut s, 5.0);
    assert!(s.is_idle());
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn opening_from_rest_is_monotonic() {
    let mut s = Spring::new(0.0);
    s.set_target(1.0);
    let mut prev = s.value();
    for _ in 0..300 {
        let v = s.step(FRAME);
        assert!(v + 1e-6 >= prev, "value went backwards: {prev} -> {v}");
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
    assert_eq!(s.value(), 1.0);
}

#[test]
fn retarget_keeps_value_and_velocity() {
    let mut s = Spring::new(1.0);
    s.set_target(0.0);
    for _ in 0..10 {
        s.step(FRAME);
    }
    let (value, velocity) = (s.value(), s.velocity());
    assert!(value > 0.0 && value < 1.0);
    assert!(velocity < 0.0);

    s.set_target(1.0);
    assert_eq!(s.value(), value);
    assert_eq!(s.velocity(), velocity);

    // no jump on the next frame either
    let next = s.step(FRAME);
    assert!((next - value).abs() < 0.05);
}

#[test]
fn long_frame_gaps_are_clamped() {
    let mut a = Spring::new(1.0);
    a.set_target(0.0);
    let mut b = a.clone();
    a.step(10.0);
    b.step(0.1);
    assert_eq!(a.value(), b.value());
    assert_eq!(a.velocity(), b.velocity());
}

#[test]
fn non_positive_dt_does_nothing() {
    let mut s = Spring::new(1.0);
    s.set_target(0.0);
    assert_eq!(s.step(0.0), 1.0);
    assert_eq!(s.step(-1.0), 1.0);
    assert_eq!(s.step(f32::NAN), 1.0);
}

#[test]
fn targets_are_clamped_to_unit_range() {
    let mut s = Spring::new(0.5);
    s.set_target(3.0);
    assert_eq!(s.target(), 1.0);
    s.set_target(-3.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn rapid_toggling_stays_in_range_and_converges() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut anim = OpenAnimation::new(true);
    let mut is_open = true;
    for _ in 0..2000 {
        if rng.gen_bool(0.1) {
            is_open = !is_open;
            anim.sync(is_open);
        }
        let dt = rng.gen_range(0.0..0.05);
        let o = anim.step(dt);
        assert!((0.0..=1.0).contains(&o), "o out of range: {o}");
    }
    for _ in 0..600 {
        anim.step(FRAME);
    }
    assert!(anim.is_idle());
    assert_eq!(anim.value(), if is_open { 1.0 } else { 0.0 });
}

#[test]
fn animation_starts_at_rest_in_its_initial_state() {
    let open = OpenAnimation::new(true);
    assert_eq!(open.value(), 1.0);
    assert!(open.is_idle());
    let closed = OpenAnimation::new(false);
    assert_eq!(closed.value(), 0.0);
    assert_eq!(closed.spring().target(), 0.0);
}

#[test]
fn syncing_the_same_state_stays_idle() {
    let mut anim = OpenAnimation::new(true);
    anim.sync(true);
    assert!(anim.is_idle());
    assert_eq!(anim.step(FRAME), 1.0);
}
