use std::f32::consts::PI;

use glam::Vec3;

use super::{ALONG_Z, LYING_DOWN, PATIENT_COLOR, Parts};
use crate::scene::animation::Animation;
use crate::scene::material::{Material, MaterialTone, ToneSet};
use crate::scene::node::{Geometry, Group, SceneNode, Shape};

const TUBE: usize = 0;
const DETECTOR: usize = 1;
const GANTRY: usize = 2;
const TABLE: usize = 3;

const RAY_COUNT: usize = 8;

const TUBE_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0xdc2626, 0xef4444, 0.4),
    MaterialTone::new(0xf87171, 0xef4444, 0.6),
);
const DETECTOR_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x22c55e, 0x16a34a, 0.3),
    MaterialTone::new(0x4ade80, 0x22c55e, 0.5),
);
pub(crate) const GANTRY_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x374151, 0x1f2937, 0.1),
    MaterialTone::new(0x6b7280, 0x4b5563, 0.3),
);
const TABLE_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x4b5563, 0x000000, 0.0),
    MaterialTone::new(0x9ca3af, 0x000000, 0.0),
);

pub(crate) fn build(parts: &Parts) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = Vec::new();

    nodes.push(
        parts
            .component(GANTRY, &GANTRY_TONES, Geometry::torus(2.0, 0.4))
            .rotated(ALONG_Z)
            .into(),
    );

    nodes.push(
        Shape::new(
            Geometry::torus(2.3, 0.15),
            Material::standard(MaterialTone::new(0x3b82f6, 0x1d4ed8, 0.3)),
        )
        .rotated(ALONG_Z)
        .into(),
    );

    nodes.push(rotating_assembly(parts).into());

    nodes.push(
        parts
            .component(TABLE, &TABLE_TONES, Geometry::cuboid(4.0, 0.1, 0.6))
            .at(Vec3::new(0.0, -0.65, 0.0))
            .into(),
    );

    nodes.push(
        Shape::new(Geometry::cylinder(0.22, 0.22, 1.4), Material::plain(PATIENT_COLOR))
            .rotated(LYING_DOWN)
            .at(Vec3::new(0.0, -0.45, 0.0))
            .into(),
    );

    nodes
}

/// Tube, detector and beam spinning together around the bore.
fn rotating_assembly(parts: &Parts) -> Group {
    let mut children: Vec<SceneNode> = vec![
        parts
            .component(TUBE, &TUBE_TONES, Geometry::cuboid(0.5, 0.35, 0.35))
            .at(Vec3::new(0.0, 1.75, 0.0))
            .into(),
        parts
            .component(DETECTOR, &DETECTOR_TONES, Geometry::cuboid(0.7, 0.15, 0.4))
            .at(Vec3::new(0.0, -1.75, 0.0))
            .into(),
        Shape::new(
            Geometry::open_cone(0.7, 3.2),
            Material::basic(0xef4444).with_opacity(0.25).double_sided(),
        )
        .rotated(Vec3::new(PI, 0.0, 0.0))
        .animated(Animation::BeamFlicker)
        .into(),
    ];

    for i in 0..RAY_COUNT {
        let angle = i as f32 / RAY_COUNT as f32 * 0.6 - 0.3;
        children.push(
            Shape::new(
                Geometry::line(
                    Vec3::new(0.0, 1.6, 0.0),
                    Vec3::new(angle.sin() * 0.6, -1.6, 0.0),
                ),
                Material::line(0xfca5a5).with_opacity(0.7),
            )
            .into(),
        );
    }

    Group::new("ct-rotor", children).animated(Animation::Rotating)
}
