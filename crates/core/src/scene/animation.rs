use glam::{Quat, Vec3};
use serde::Serialize;

use super::node::Transform;

/// Yaw added to the whole assembly per second while animation is on.
pub const AUTO_ROTATE_RATE: f32 = 0.18;

/// Yaw per pixel of horizontal pointer drag.
pub const DRAG_YAW_PER_PIXEL: f32 = 0.01;

const PULSE_AMPLITUDE: f32 = 0.15;
const FLICKER_BASE: f32 = 0.2;
const FLICKER_AMPLITUDE: f32 = 0.15;

/// Per-frame behavior of a node, evaluated from the shared phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    #[default]
    Static,
    /// Uniform breathing scale on top of the base scale.
    Pulsing,
    /// Spin about the local z axis.
    Rotating,
    /// Opacity oscillation for radiation beams.
    BeamFlicker,
}

/// Transform and opacity of a node at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub transform: Transform,
    pub opacity: f32,
}

impl Animation {
    /// Evaluates the node's pose at `phase` radians.
    #[must_use]
    pub fn pose(self, phase: f32, base: &Transform, base_opacity: f32) -> Pose {
        let mut transform = *base;
        let mut opacity = base_opacity;
        match self {
            Animation::Static => {}
            Animation::Pulsing => {
                transform.scale = base.scale * pulse_factor(phase);
            }
            Animation::Rotating => {
                transform.rotation = base.rotation * Quat::from_rotation_z(phase);
            }
            Animation::BeamFlicker => {
                opacity = flicker_opacity(phase);
            }
        }
        Pose { transform, opacity }
    }
}

#[must_use]
pub fn pulse_factor(phase: f32) -> f32 {
    1.0 + (phase * 2.0).sin() * PULSE_AMPLITUDE
}

#[must_use]
pub fn flicker_opacity(phase: f32) -> f32 {
    FLICKER_BASE + (phase * 3.0).sin() * FLICKER_AMPLITUDE
}

/// Yaw quaternion for the assembly root.
#[must_use]
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_axis_angle(Vec3::Y, yaw)
}
