//! Fixed apparatus layouts, one module per modality.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::material::{Material, ToneSet};
use super::node::{Geometry, Shape};

pub(crate) mod ct;
pub(crate) mod mri;
pub(crate) mod pet;
pub(crate) mod ultrasound;
pub(crate) mod xray;

/// Rotates a torus or cylinder so its axis runs along z, through the bore.
pub(crate) const ALONG_Z: Vec3 = Vec3::new(FRAC_PI_2, 0.0, 0.0);

/// Lays a y-axis cylinder down along x, as for the patient body.
pub(crate) const LYING_DOWN: Vec3 = Vec3::new(0.0, 0.0, FRAC_PI_2);

pub(crate) const PATIENT_COLOR: u32 = 0x64748b;

/// Shared inputs for every layout.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Parts {
    pub highlight: Option<usize>,
    pub animating: bool,
}

impl Parts {
    pub fn material(&self, component: usize, tones: &ToneSet) -> Material {
        Material::standard(tones.pick(self.highlight == Some(component)))
    }

    /// A shape belonging to catalog component `component`.
    pub fn component(&self, component: usize, tones: &ToneSet, geometry: Geometry) -> Shape {
        Shape::new(geometry, self.material(component, tones)).for_component(component)
    }
}
