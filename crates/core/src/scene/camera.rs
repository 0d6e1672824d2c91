use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::model::Rgb;

/// Fixed height of the 3D viewport in pixels; width follows the container.
pub const VIEWPORT_HEIGHT: u32 = 300;

/// Clear color behind the apparatus.
pub const BACKGROUND: Rgb = Rgb::new(0x0f172a);

/// A projected point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Distance along the view direction, larger is farther.
    pub depth: f32,
}

/// Perspective camera looking at a fixed target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            fov_y_degrees: 50.0,
            near: 0.1,
            far: 1000.0,
            eye: Vec3::new(0.0, 2.0, 6.0),
            target: Vec3::ZERO,
        }
    }
}

impl CameraPose {
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }

    /// Projects a world-space point into a `width`×`height` viewport.
    ///
    /// Returns `None` for points behind the near plane or for an empty viewport.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn project(&self, world: Vec3, width: u32, height: u32) -> Option<ScreenPoint> {
        if width == 0 || height == 0 {
            return None;
        }
        let (w, h) = (width as f32, height as f32);
        let view_pos = self.view().transform_point3(world);
        let depth = -view_pos.z;
        if depth < self.near {
            return None;
        }
        let ndc = self.projection(w / h).project_point3(view_pos);
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * w,
            y: (1.0 - ndc.y) * 0.5 * h,
            depth,
        })
    }

    /// Screen pixels covered by one world unit at `depth`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pixels_per_unit(&self, depth: f32, height: u32) -> f32 {
        let half = (self.fov_y_degrees.to_radians() * 0.5).tan();
        height as f32 / (2.0 * half * depth.max(self.near))
    }
}
