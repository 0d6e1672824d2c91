use std::f32::consts::PI;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{PATIENT_COLOR, Parts};
use crate::scene::animation::Animation;
use crate::scene::material::{Material, MaterialTone, ToneSet};
use crate::scene::node::{Geometry, SceneNode, Shape};

const TUBE: usize = 0;
const COLLIMATOR: usize = 1;
const DETECTOR: usize = 2;
const TABLE: usize = 3;

const RAY_COUNT: usize = 12;

const TUBE_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0xb91c1c, 0x991b1b, 0.2),
    MaterialTone::new(0xf87171, 0xef4444, 0.5),
);
const COLLIMATOR_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0xd97706, 0xb45309, 0.25),
    MaterialTone::new(0xfbbf24, 0xf59e0b, 0.5),
);
const DETECTOR_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x22c55e, 0x16a34a, 0.2),
    MaterialTone::new(0x4ade80, 0x22c55e, 0.4),
);
const TABLE_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x4b5563, 0x000000, 0.0),
    MaterialTone::new(0x9ca3af, 0x000000, 0.0),
);

pub(crate) fn build(parts: &Parts) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = Vec::new();

    nodes.push(
        parts
            .component(TUBE, &TUBE_TONES, Geometry::cuboid(0.9, 0.65, 0.65))
            .at(Vec3::new(0.0, 2.5, 0.0))
            .into(),
    );

    nodes.push(
        parts
            .component(COLLIMATOR, &COLLIMATOR_TONES, Geometry::cylinder(0.35, 0.15, 0.5))
            .at(Vec3::new(0.0, 1.95, 0.0))
            .into(),
    );

    nodes.push(
        Shape::new(
            Geometry::open_cone(1.4, 3.5),
            Material::basic(0xef4444).with_opacity(0.2).double_sided(),
        )
        .rotated(Vec3::new(PI, 0.0, 0.0))
        .animated(Animation::BeamFlicker)
        .into(),
    );

    for i in 0..RAY_COUNT {
        let offset_x = (i as f32 - 5.5) * 0.2;
        nodes.push(
            Shape::new(
                Geometry::line(
                    Vec3::new(0.0, 1.7, 0.0),
                    Vec3::new(offset_x, -1.85, ray_jitter(i)),
                ),
                Material::line(0xfca5a5).with_opacity(0.5),
            )
            .into(),
        );
    }

    nodes.push(
        parts
            .component(TABLE, &TABLE_TONES, Geometry::cuboid(2.6, 0.1, 1.2))
            .at(Vec3::new(0.0, -0.5, 0.0))
            .into(),
    );

    nodes.push(
        Shape::new(Geometry::cuboid(1.4, 0.25, 0.7), Material::plain(PATIENT_COLOR))
            .at(Vec3::new(0.0, -0.3, 0.0))
            .into(),
    );

    nodes.push(
        parts
            .component(DETECTOR, &DETECTOR_TONES, Geometry::cuboid(2.2, 0.1, 1.8))
            .at(Vec3::new(0.0, -1.9, 0.0))
            .into(),
    );

    // Support arm
    nodes.push(
        Shape::new(Geometry::cylinder(0.08, 0.08, 3.2), Material::plain(0x6b7280))
            .at(Vec3::new(0.9, 0.9, 0.0))
            .into(),
    );

    nodes
}

/// Depth scatter of a ray's end point in `[-0.25, 0.25)`, fixed per ray.
fn ray_jitter(ray: usize) -> f32 {
    let mut rng = StdRng::seed_from_u64(ray as u64);
    (rng.random::<f32>() - 0.5) * 0.5
}
