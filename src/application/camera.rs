use std::f32::consts::TAU;

use macroquad::prelude::{Camera3D, Vec2, Vec3, vec3};

use crate::domain::Resolution;

/// Camera hovering above the grid center and looking straight down.
/// It slowly rolls around the vertical axis.
pub struct OrbitCamera {
    pub height: f32,
    pub roll: f32,
    pub fovy: f32,  // radians
}

impl OrbitCamera {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            roll: 0.0,
            fovy: 60f32.to_radians(),
        }
    }

    /// Height chosen so the whole grid fits the view
    pub fn for_resolution(resolution: Resolution) -> Self {
        Self::new(resolution.x() as f32 / 2.0)
    }

    /// Roll around the vertical axis
    pub fn spin(&mut self, delta: f32) {
        self.roll = (self.roll + delta) % TAU;
    }

    pub fn position(&self) -> Vec3 {
        vec3(0.0, self.height, 0.0)
    }

    fn forward(&self) -> Vec3 {
        vec3(0.0, -1.0, 0.0)
    }

    /// Screen-up direction in world space
    pub fn up(&self) -> Vec3 {
        vec3(-self.roll.sin(), 0.0, -self.roll.cos())
    }

    /// Screen-right direction in world space
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up())
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            target: Vec3::ZERO,
            up: self.up(),
            fovy: self.fovy,
            ..Default::default()
        }
    }

    /// Direction of the ray through a point in normalized device coordinates
    pub fn pointer_ray(&self, ndc: Vec2, aspect: f32) -> Vec3 {
        let half = (self.fovy / 2.0).tan();
        (self.forward() + self.right() * ndc.x * half * aspect + self.up() * ndc.y * half).normalize()
    }

    /// World `(x, z)` where the pointer ray meets the grid plane
    pub fn ground_point(&self, ndc: Vec2, aspect: f32) -> Option<(f32, f32)> {
        intersect_ground(self.position(), self.pointer_ray(ndc, aspect))
    }
}

/// Intersect a ray with the `y = 0` plane
pub fn intersect_ground(origin: Vec3, direction: Vec3) -> Option<(f32, f32)> {
    if direction.y.abs() < f32::EPSILON {
        return None;
    }

    let t = -origin.y / direction.y;
    if t < 0.0 {
        return None;
    }

    let hit = origin + direction * t;
    Some((hit.x, hit.z))
}
