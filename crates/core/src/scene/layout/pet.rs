use std::f32::consts::TAU;

use glam::Vec3;

use super::{ALONG_Z, LYING_DOWN, PATIENT_COLOR, Parts};
use crate::scene::animation::Animation;
use crate::scene::material::{Material, MaterialTone, ToneSet};
use crate::scene::node::{Geometry, SceneNode, Shape, Transform};

const DETECTOR_RING: usize = 0;
const CRYSTALS: usize = 1;
const PHOTOMULTIPLIERS: usize = 2;
const TRACER: usize = 3;

const CRYSTAL_COUNT: usize = 24;
const PHOTOMULTIPLIER_COUNT: usize = 12;

pub(crate) const GAMMA_OPACITY_ANIMATING: f32 = 0.85;
pub(crate) const GAMMA_OPACITY_PAUSED: f32 = 0.5;

const RING_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0xd97706, 0xb45309, 0.2),
    MaterialTone::new(0xfbbf24, 0xf59e0b, 0.4),
);
const CRYSTAL_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x22c55e, 0x16a34a, 0.25),
    MaterialTone::new(0x4ade80, 0x22c55e, 0.5),
);
const PHOTOMULTIPLIER_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0x3b82f6, 0x2563eb, 0.25),
    MaterialTone::new(0x60a5fa, 0x3b82f6, 0.5),
);
const TRACER_TONES: ToneSet = ToneSet::new(
    MaterialTone::new(0xf87171, 0xef4444, 0.7),
    MaterialTone::new(0xfca5a5, 0xef4444, 1.0),
);

const PRIMARY_TRACER: Vec3 = Vec3::new(0.15, 0.0, 0.0);
const SECONDARY_TRACER: Vec3 = Vec3::new(-0.25, -0.1, 0.08);

pub(crate) fn build(parts: &Parts) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = Vec::new();

    nodes.push(
        Shape::new(
            Geometry::torus(2.35, 0.2),
            Material::standard(MaterialTone::new(0xf59e0b, 0xd97706, 0.25)),
        )
        .rotated(ALONG_Z)
        .into(),
    );

    nodes.push(
        parts
            .component(DETECTOR_RING, &RING_TONES, Geometry::torus(2.0, 0.35))
            .rotated(ALONG_Z)
            .into(),
    );

    for position in around_ring(CRYSTAL_COUNT, 1.8) {
        nodes.push(
            parts
                .component(CRYSTALS, &CRYSTAL_TONES, Geometry::cuboid(0.18, 0.35, 0.18))
                .with_transform(Transform::default().at(position).looking_at(Vec3::ZERO))
                .into(),
        );
    }

    for position in around_ring(PHOTOMULTIPLIER_COUNT, 2.2) {
        nodes.push(
            parts
                .component(
                    PHOTOMULTIPLIERS,
                    &PHOTOMULTIPLIER_TONES,
                    Geometry::cylinder(0.1, 0.1, 0.25),
                )
                .rotated(ALONG_Z)
                .at(position)
                .into(),
        );
    }

    // Bore lining
    nodes.push(
        Shape::new(Geometry::open_cylinder(1.3, 1.0), Material::plain(0x1e293b).double_sided())
            .rotated(ALONG_Z)
            .into(),
    );

    nodes.push(
        Shape::new(Geometry::cylinder(0.28, 0.28, 1.8), Material::plain(PATIENT_COLOR))
            .rotated(LYING_DOWN)
            .at(Vec3::new(0.0, -0.25, 0.0))
            .into(),
    );

    nodes.push(
        parts
            .component(TRACER, &TRACER_TONES, Geometry::sphere(0.12))
            .at(PRIMARY_TRACER)
            .animated(Animation::Pulsing)
            .into(),
    );
    nodes.push(
        parts
            .component(TRACER, &TRACER_TONES, Geometry::sphere(0.12))
            .at(SECONDARY_TRACER)
            .scaled(Vec3::splat(0.7))
            .animated(Animation::Pulsing)
            .into(),
    );

    // Coincident gamma pairs, always drawn
    let gamma = if parts.animating {
        GAMMA_OPACITY_ANIMATING
    } else {
        GAMMA_OPACITY_PAUSED
    };
    for x in [1.85, -1.85] {
        nodes.push(gamma_line(PRIMARY_TRACER, Vec3::new(x, 0.0, 0.0), 0xfbbf24, gamma));
    }
    for y in [1.85, -1.85] {
        let end = Vec3::new(SECONDARY_TRACER.x, y, SECONDARY_TRACER.z);
        nodes.push(gamma_line(SECONDARY_TRACER, end, 0xf97316, gamma * 0.75));
    }

    if parts.animating {
        let hits = [
            Vec3::new(1.8, 0.0, 0.0),
            Vec3::new(-1.8, 0.0, 0.0),
            Vec3::new(-0.25, 1.8, 0.08),
            Vec3::new(-0.25, -1.8, 0.08),
        ];
        for hit in hits {
            nodes.push(
                Shape::new(Geometry::sphere(0.08), Material::basic(0xfef08a))
                    .at(hit)
                    .animated(Animation::Pulsing)
                    .into(),
            );
        }
    }

    nodes.push(
        Shape::new(Geometry::cuboid(4.0, 0.1, 0.6), Material::plain(0x4b5563))
            .at(Vec3::new(0.0, -0.85, 0.0))
            .into(),
    );

    nodes
}

fn gamma_line(from: Vec3, to: Vec3, color: u32, opacity: f32) -> SceneNode {
    Shape::new(Geometry::line(from, to), Material::line(color).with_opacity(opacity)).into()
}

/// Evenly spaced positions on a circle of `radius` in the xy plane.
#[allow(clippy::cast_precision_loss)]
fn around_ring(count: usize, radius: f32) -> impl Iterator<Item = Vec3> {
    (0..count).map(move |i| {
        let angle = i as f32 / count as f32 * TAU;
        Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
    })
}
