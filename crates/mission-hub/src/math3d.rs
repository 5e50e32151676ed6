//! 3D math primitives for the mission hub scene.
//!
//! Provides Vec3 and an orbit camera for 3D-to-2D projection. The camera is
//! bounded: distance and polar angle are clamped so it can neither cross the
//! ground plane nor zoom through the origin.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::{Add, Mul, Neg, Sub};

/// 3D vector for node positions and camera math.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Rotate around the Y axis (azimuth).
    pub fn rotate_y(self, angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotate around the X axis (elevation).
    pub fn rotate_x(self, angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Projection result from 3D to 2D.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// 2D screen position.
    pub pos: Vec2,
    /// Depth along the view axis (positive = in front of the camera).
    pub depth: f32,
    /// Scale factor for depth-based sizing.
    pub scale: f32,
}

/// Bounded orbit camera looking at the hub origin.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Rotation around the Y axis (radians).
    pub azimuth: f32,
    /// Angle above the ground plane (radians), clamped.
    pub elevation: f32,
    /// Distance from the target, clamped.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Screen dimensions for projection.
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches the authored start pose: y=3, z=8 from the origin.
        Self {
            azimuth: 0.0,
            elevation: 0.36,
            distance: 8.5,
            target: Vec3::ZERO,
            screen_width: 1280.0,
            screen_height: 720.0,
        }
    }
}

impl OrbitCamera {
    const ORBIT_SENSITIVITY: f32 = 0.008;
    const ZOOM_SPEED: f32 = 0.1;
    pub const MIN_DISTANCE: f32 = 4.0;
    pub const MAX_DISTANCE: f32 = 14.0;
    /// Polar clamp [0.2, pi/2] expressed as elevation above the plane.
    pub const MIN_ELEVATION: f32 = 0.0;
    pub const MAX_ELEVATION: f32 = FRAC_PI_2 - 0.2;
    /// Idle auto-rotation: speed 0.4 on the three.js scale (2.0 = one orbit
    /// per 30 seconds), converted to rad/s.
    pub const AUTO_ROTATE_SPEED: f32 = 0.4 * TAU / 60.0;
    /// Vertical field of view in degrees.
    const FOV_DEG: f32 = 55.0;

    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    /// Orbit by pointer delta (pixels).
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth += dx * Self::ORBIT_SENSITIVITY;
        self.elevation = (self.elevation + dy * Self::ORBIT_SENSITIVITY)
            .clamp(Self::MIN_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Zoom (positive = zoom in). Multiplicative, clamped.
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance * (1.0 - delta * Self::ZOOM_SPEED)).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Advance idle auto-rotation by elapsed time.
    pub fn auto_rotate(&mut self, dt: f32) {
        self.azimuth += Self::AUTO_ROTATE_SPEED * dt;
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Transform world position to camera-relative view space.
    fn world_to_view(&self, pos: Vec3) -> Vec3 {
        let rel = pos - self.target;
        let after_y = rel.rotate_y(-self.azimuth);
        let after_x = after_y.rotate_x(-self.elevation);
        // Camera sits at (0, 0, distance) looking at the origin.
        Vec3::new(after_x.x, after_x.y, after_x.z - self.distance)
    }

    /// Project a 3D world position to 2D screen coordinates.
    pub fn project(&self, pos: Vec3) -> Projection {
        let view = self.world_to_view(pos);

        // Camera looks down -Z; positive z in view space is behind it.
        let depth = -view.z;
        let safe_depth = depth.max(0.1);

        let focal = (self.screen_height * 0.5) / (Self::FOV_DEG.to_radians() * 0.5).tan();
        let scale = focal / safe_depth;

        let screen_x = self.screen_width * 0.5 + view.x * scale;
        let screen_y = self.screen_height * 0.5 - view.y * scale;

        Projection {
            pos: Vec2::new(screen_x, screen_y),
            depth,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = OrbitCamera::new(800.0, 600.0);
        let p = cam.project(Vec3::ZERO);
        assert!((p.pos.x - 400.0).abs() < 1e-3);
        assert!((p.pos.y - 300.0).abs() < 1e-3);
        assert!(p.depth > 0.0);
    }

    #[test]
    fn zoom_clamps_both_ends() {
        let mut cam = OrbitCamera::default();
        for _ in 0..500 {
            cam.zoom(1.0);
        }
        assert_eq!(cam.distance, OrbitCamera::MIN_DISTANCE);
        for _ in 0..500 {
            cam.zoom(-1.0);
        }
        assert_eq!(cam.distance, OrbitCamera::MAX_DISTANCE);
    }

    #[test]
    fn elevation_never_crosses_ground_plane() {
        let mut cam = OrbitCamera::default();
        for _ in 0..1000 {
            cam.orbit(0.0, -50.0);
        }
        assert!(cam.elevation >= OrbitCamera::MIN_ELEVATION);
        for _ in 0..1000 {
            cam.orbit(0.0, 50.0);
        }
        assert!(cam.elevation <= OrbitCamera::MAX_ELEVATION);
    }

    #[test]
    fn auto_rotate_is_monotonic_in_dt() {
        let mut cam = OrbitCamera::default();
        let start = cam.azimuth;
        cam.auto_rotate(1.0);
        let one = cam.azimuth - start;
        cam.auto_rotate(2.0);
        let three = cam.azimuth - start;
        assert!(one > 0.0);
        assert!((three - 3.0 * one).abs() < 1e-5);
    }

    #[test]
    fn closer_points_have_smaller_depth() {
        let cam = OrbitCamera::new(800.0, 600.0);
        let near = cam.project(Vec3::new(0.0, 0.0, 2.0));
        let far = cam.project(Vec3::new(0.0, 0.0, -2.0));
        assert!(near.depth < far.depth);
    }
}
