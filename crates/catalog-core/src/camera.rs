//! Camera types shared with the web frontend.
//!
//! `OrbitCamera` follows the usual orbit-controls model: spherical
//! coordinates around a target, with rotation and panning eased by a damping
//! factor and dolly zoom applied immediately. It avoids platform-specific APIs
//! so the math is covered by host tests.

use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR, ORBIT_PAN_SPEED,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SCALE,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

const POLE_EPS: f32 = 1e-6;

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Azimuth around +Y, 0 looking down −Z.
    pub theta: f32,
    /// Polar angle from +Y.
    pub phi: f32,
    pub fovy_radians: f32,
    pub damping: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_pan: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, CAMERA_DISTANCE)
    }
}

impl OrbitCamera {
    /// Camera on +Z at `distance` from `target`.
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            radius: distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE),
            theta: 0.0,
            phi: FRAC_PI_2,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            damping: ORBIT_DAMPING,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_pan: Vec3::ZERO,
        }
    }

    /// Unit vector from target to eye.
    fn offset_dir(&self) -> Vec3 {
        Vec3::new(
            self.phi.sin() * self.theta.sin(),
            self.phi.cos(),
            self.phi.sin() * self.theta.cos(),
        )
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.offset_dir() * self.radius
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(self.theta.cos(), 0.0, -self.theta.sin())
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(-self.offset_dir()).normalize_or_zero()
    }

    /// Drag by a pixel delta; a full viewport height is one revolution.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_h: f32) {
        let h = viewport_h.max(1.0);
        self.pending_theta -= TAU * dx_px / h * ORBIT_ROTATE_SPEED;
        self.pending_phi -= TAU * dy_px / h * ORBIT_ROTATE_SPEED;
    }

    /// Screen-space pan: the point under the cursor follows the drag at the
    /// target's depth.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, viewport_h: f32) {
        let h = viewport_h.max(1.0);
        let world_per_px = 2.0 * self.radius * (self.fovy_radians / 2.0).tan() / h;
        self.pending_pan -= self.right() * dx_px * world_per_px * ORBIT_PAN_SPEED;
        self.pending_pan += self.up() * dy_px * world_per_px * ORBIT_PAN_SPEED;
    }

    /// Wheel zoom: negative delta (scroll up) moves closer.
    pub fn zoom(&mut self, wheel_delta_y: f32) {
        let scale = if wheel_delta_y < 0.0 {
            ORBIT_ZOOM_SCALE
        } else if wheel_delta_y > 0.0 {
            1.0 / ORBIT_ZOOM_SCALE
        } else {
            1.0
        };
        self.radius = (self.radius * scale).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Apply a damped share of pending motion. Call once per frame.
    /// Returns whether the camera is still moving.
    pub fn update(&mut self) -> bool {
        let d = self.damping.clamp(0.0, 1.0);
        self.theta += self.pending_theta * d;
        self.phi += self.pending_phi * d;
        let min_phi = ORBIT_MIN_POLAR.max(POLE_EPS);
        let max_phi = ORBIT_MAX_POLAR.min(PI - POLE_EPS);
        self.phi = self.phi.clamp(min_phi, max_phi);
        self.target += self.pending_pan * d;

        self.pending_theta *= 1.0 - d;
        self.pending_phi *= 1.0 - d;
        self.pending_pan *= 1.0 - d;

        let moving = self.pending_theta.abs() > 1e-5
            || self.pending_phi.abs() > 1e-5
            || self.pending_pan.length_squared() > 1e-6;
        if !moving {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
            self.pending_pan = Vec3::ZERO;
        }
        moving
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: self.up(),
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: self.fovy_radians,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
