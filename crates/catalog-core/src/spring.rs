//! Damped spring driving the open/close scalar.
//!
//! The spring is integrated with fixed sub-steps so the result does not depend
//! on the display refresh rate. Retargeting keeps the current value and
//! velocity, which keeps the motion continuous when the user toggles mid-fold.

use crate::constants::{
    SPRING_EPSILON, SPRING_FRICTION, SPRING_MASS, SPRING_MAX_DT_SEC, SPRING_STEP_SEC,
    SPRING_TENSION,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: SPRING_MASS,
            tension: SPRING_TENSION,
            friction: SPRING_FRICTION,
        }
    }
}

impl SpringParams {
    /// 1.0 is critical damping; above that the spring never overshoots from rest.
    pub fn damping_ratio(&self) -> f32 {
        self.friction / (2.0 * (self.tension * self.mass).sqrt())
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    params: SpringParams,
    value: f32,
    velocity: f32,
    target: f32,
    idle: bool,
}

impl Spring {
    /// A spring resting at `value`, with values confined to \[0, 1\].
    pub fn new(value: f32) -> Self {
        Self::with_params(value, SpringParams::default())
    }

    pub fn with_params(value: f32, params: SpringParams) -> Self {
        let value = value.clamp(0.0, 1.0);
        Self {
            params,
            value,
            velocity: 0.0,
            target: value,
            idle: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    pub fn set_target(&mut self, target: f32) {
        let target = target.clamp(0.0, 1.0);
        if target == self.target {
            return;
        }
        log::debug!(
            "[spring] retarget {:.3} -> {:.3} at value={:.3} vel={:.3}",
            self.target,
            target,
            self.value,
            self.velocity
        );
        self.target = target;
        self.idle = false;
    }

    /// Advance by `dt_sec` of wall time. Returns the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.idle || !(dt_sec > 0.0) {
            return self.value;
        }
        let dt = dt_sec.min(SPRING_MAX_DT_SEC);
        let steps = (dt / SPRING_STEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringParams {
            mass,
            tension,
            friction,
        } = self.params;
        for _ in 0..steps {
            let accel = (-tension * (self.value - self.target) - friction * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            if !(0.0..=1.0).contains(&self.value) {
                self.value = self.value.clamp(0.0, 1.0);
                self.velocity = 0.0;
            }
            if (self.value - self.target).abs() < SPRING_EPSILON
                && self.velocity.abs() < SPRING_EPSILON
            {
                self.value = self.target;
                self.velocity = 0.0;
                self.idle = true;
                log::debug!("[spring] settled at {:.3}", self.value);
                break;
            }
        }
        self.value
    }
}

/// Eases the fold scalar `o` toward 1 (open) or 0 (closed).
#[derive(Clone, Debug)]
pub struct OpenAnimation {
    spring: Spring,
}

impl OpenAnimation {
    /// Starts at rest in the given state.
    pub fn new(is_open: bool) -> Self {
        Self {
            spring: Spring::new(target_for(is_open)),
        }
    }

    pub fn sync(&mut self, is_open: bool) {
        self.spring.set_target(target_for(is_open));
    }

    pub fn step(&mut self, dt_sec: f32) -> f32 {
        self.spring.step(dt_sec)
    }

    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    pub fn is_idle(&self) -> bool {
        self.spring.is_idle()
    }

    pub fn spring(&self) -> &Spring {
        &self.spring
    }
}

#[inline]
fn target_for(is_open: bool) -> f32 {
    if is_open {
        1.0
    } else {
        0.0
    }
}
