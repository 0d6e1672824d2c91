use std::f32::consts::PI;

use glam::Vec3;

use super::{PATIENT_COLOR, Parts};
use crate::scene::animation::Animation;
use crate::scene::material::{Material, MaterialTone, ToneSet};
use crate::scene::node::{Geometry, SceneNode, Shape};

const TRANSDUCER: usize = 0;
const PIEZO: usize = 1;
const GEL: usize = 2;
const MONITOR: usize = 3;

const PROBE_TILT: Vec3 = Vec3::new(PI / 5.0, 0.0, 0.0);
const SCREEN_TILT: Vec3 = Vec3::new(-0.2, 0.0, 0.0);
const WAVE_TILT: Vec3 = Vec3::new(PI / 2.2, 0.0, 0.0);

const TRANSDUCER_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x7c3aed, 0x6d28d9, 0.25),
    MaterialTone::new(0xa78bfa, 0x8b5cf6, 0.5),
);
const PIEZO_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x06b6d4, 0x06b6d4, 0.4),
    MaterialTone::new(0x22d3ee, 0x06b6d4, 0.7),
);
const GEL_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x22c55e, 0x16a34a, 0.1),
    MaterialTone::new(0x4ade80, 0x22c55e, 0.3),
);
const MONITOR_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x1e293b, 0x8b5cf6, 0.15),
    MaterialTone::new(0x475569, 0x8b5cf6, 0.3),
);

pub(crate) fn build(parts: &Parts) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = Vec::new();

    // Cart body
    nodes.push(
        Shape::new(Geometry::cuboid(1.3, 2.0, 0.8), Material::plain(0x334155))
            .at(Vec3::new(-1.7, -0.2, 0.0))
            .into(),
    );

    nodes.push(
        parts
            .component(MONITOR, &MONITOR_TONES, Geometry::cuboid(1.1, 0.85, 0.1))
            .rotated(SCREEN_TILT)
            .at(Vec3::new(-1.7, 1.05, 0.4))
            .into(),
    );
    nodes.push(
        Shape::new(Geometry::cuboid(0.95, 0.65, 0.02), Material::basic(0x0f172a))
            .rotated(SCREEN_TILT)
            .at(Vec3::new(-1.7, 1.07, 0.47))
            .into(),
    );

    nodes.push(
        parts
            .component(TRANSDUCER, &TRANSDUCER_TONES, Geometry::cylinder(0.16, 0.2, 0.9))
            .rotated(PROBE_TILT)
            .at(Vec3::new(1.1, 0.3, 0.0))
            .into(),
    );

    nodes.push(
        parts
            .component(PIEZO, &PIEZO_TONES, Geometry::cylinder(0.2, 0.2, 0.12))
            .rotated(PROBE_TILT)
            .at(Vec3::new(1.28, -0.12, 0.16))
            .animated(Animation::Pulsing)
            .into(),
    );

    // Crystal elements across the probe face
    for i in -2..=2 {
        nodes.push(
            Shape::new(Geometry::cuboid(0.02, 0.13, 0.3), Material::basic(0x67e8f9))
                .rotated(PROBE_TILT)
                .at(Vec3::new(1.28 + i as f32 * 0.055, -0.12, 0.16))
                .into(),
        );
    }

    nodes.push(
        Shape::new(
            Geometry::tube(
                vec![
                    Vec3::new(-1.05, -0.4, 0.0),
                    Vec3::new(0.0, 0.1, 0.25),
                    Vec3::new(0.95, 0.55, 0.08),
                ],
                0.04,
            ),
            Material::plain(0x475569),
        )
        .into(),
    );

    nodes.push(
        Shape::new(Geometry::sphere(0.25), parts.material(GEL, &GEL_TONES).with_opacity(0.7))
            .for_component(GEL)
            .at(Vec3::new(1.3, -0.45, 0.12))
            .scaled(Vec3::new(1.0, 0.35, 1.0))
            .into(),
    );

    nodes.push(
        Shape::new(Geometry::sphere(0.85), Material::plain(PATIENT_COLOR))
            .at(Vec3::new(1.35, -0.95, 0.0))
            .scaled(Vec3::new(1.0, 0.45, 0.75))
            .into(),
    );

    if parts.animating {
        for i in 1..=4 {
            let i = i as f32;
            nodes.push(
                Shape::new(
                    Geometry::torus(0.15 * i, 0.02),
                    Material::basic(0xa78bfa).with_opacity(0.65 - i * 0.12),
                )
                .rotated(WAVE_TILT)
                .at(Vec3::new(1.35, -0.55 - i * 0.15, 0.12))
                .into(),
            );
        }
        for i in 1..=2 {
            let i = i as f32;
            nodes.push(
                Shape::new(
                    Geometry::torus(0.1 * i, 0.015),
                    Material::basic(0x22d3ee).with_opacity(0.5 - i * 0.15),
                )
                .rotated(WAVE_TILT)
                .at(Vec3::new(1.35, -0.85 + i * 0.12, 0.12))
                .into(),
            );
        }
    }

    nodes
}
