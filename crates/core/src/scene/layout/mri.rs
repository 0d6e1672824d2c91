use glam::Vec3;

use super::{ALONG_Z, LYING_DOWN, PATIENT_COLOR, Parts};
use crate::scene::animation::Animation;
use crate::scene::material::{Material, MaterialTone, ToneSet};
use crate::scene::node::{Geometry, SceneNode, Shape};

const MAGNET: usize = 0;
const GRADIENT_COILS: usize = 1;
const RF_COIL: usize = 2;
const TABLE: usize = 3;

const MAGNET_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x2563eb, 0x1e40af, 0.15),
    MaterialTone::new(0x60a5fa, 0x3b82f6, 0.4),
);
const GRADIENT_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x8b5cf6, 0x7c3aed, 0.3),
    MaterialTone::new(0xc084fc, 0xa855f7, 0.6),
);
const RF_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0xf59e0b, 0xf59e0b, 0.5),
    MaterialTone::new(0xfcd34d, 0xf59e0b, 0.8),
);
const TABLE_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x4b5563, 0x000000, 0.0),
    MaterialTone::new(0x9ca3af, 0x6b7280, 0.3),
);

pub(crate) fn build(parts: &Parts) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = Vec::new();

    // Main magnet: three thick rings forming the bore
    for z in [0.0, 0.8, -0.8] {
        nodes.push(
            parts
                .component(MAGNET, &MAGNET_TONES, Geometry::torus(1.8, 0.5))
                .rotated(ALONG_Z)
                .at(Vec3::new(0.0, 0.0, z))
                .into(),
        );
    }

    for i in -2..=2 {
        nodes.push(
            parts
                .component(GRADIENT_COILS, &GRADIENT_TONES, Geometry::torus(1.1, 0.1))
                .rotated(ALONG_Z)
                .at(Vec3::new(0.0, 0.0, i as f32 * 0.35))
                .into(),
        );
    }

    nodes.push(
        parts
            .component(RF_COIL, &RF_TONES, Geometry::torus(0.8, 0.08))
            .rotated(ALONG_Z)
            .animated(Animation::Pulsing)
            .into(),
    );

    nodes.push(
        parts
            .component(TABLE, &TABLE_TONES, Geometry::cuboid(4.0, 0.12, 0.6))
            .at(Vec3::new(0.0, -0.55, 0.0))
            .into(),
    );

    nodes.push(
        Shape::new(Geometry::cylinder(0.2, 0.2, 1.6), Material::plain(PATIENT_COLOR))
            .rotated(LYING_DOWN)
            .at(Vec3::new(0.0, -0.35, 0.0))
            .into(),
    );

    // Field lines through the bore
    for i in -3..=3 {
        let y = i as f32 * 0.12;
        nodes.push(
            Shape::new(
                Geometry::line(Vec3::new(-2.5, y, 0.0), Vec3::new(2.5, y, 0.0)),
                Material::line(0x60a5fa).with_opacity(0.5),
            )
            .into(),
        );
    }

    if parts.animating {
        for i in 1..=3 {
            let i = i as f32;
            nodes.push(
                Shape::new(
                    Geometry::torus(0.25 * i, 0.02),
                    Material::basic(0xfbbf24).with_opacity(0.6 - i * 0.15),
                )
                .rotated(ALONG_Z)
                .animated(Animation::Pulsing)
                .into(),
            );
        }
    }

    nodes
}
