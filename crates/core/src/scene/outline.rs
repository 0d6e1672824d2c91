//! Flat outlines of each primitive, used by renderers that draw projected
//! polygons instead of shaded meshes.

use std::f32::consts::TAU;

use glam::Vec3;

use super::node::Geometry;

const RADIAL_SEGMENTS: usize = 16;
const RING_SEGMENTS: usize = 32;
const TUBE_SAMPLES_PER_SPAN: usize = 10;

/// A run of local-space points. `thickness` is in world units; zero means a
/// hairline stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec3>,
    pub closed: bool,
    pub filled: bool,
    pub thickness: f32,
}

impl Polyline {
    fn face(points: Vec<Vec3>) -> Self {
        Self {
            points,
            closed: true,
            filled: true,
            thickness: 0.0,
        }
    }

    fn stroke(points: Vec<Vec3>, closed: bool, thickness: f32) -> Self {
        Self {
            points,
            closed,
            filled: false,
            thickness,
        }
    }
}

#[must_use]
pub fn outline(geometry: &Geometry) -> Vec<Polyline> {
    match geometry {
        Geometry::Box {
            width,
            height,
            depth,
        } => box_faces(Vec3::new(*width, *height, *depth) * 0.5),
        Geometry::Cylinder {
            radius_top,
            radius_bottom,
            height,
            open_ended,
        } => frustum(*radius_top, *radius_bottom, *height, *open_ended),
        Geometry::Cone {
            radius,
            height,
            open_ended,
        } => frustum(0.0, *radius, *height, *open_ended),
        Geometry::Torus { radius, tube } => {
            vec![Polyline::stroke(circle(*radius, RING_SEGMENTS, Plane::Xy), true, tube * 2.0)]
        }
        Geometry::Sphere { radius } => [Plane::Xy, Plane::Xz, Plane::Yz]
            .into_iter()
            .map(|plane| Polyline::face(circle(*radius, RING_SEGMENTS, plane)))
            .collect(),
        Geometry::Tube { points, radius } => {
            vec![Polyline::stroke(catmull_rom(points), false, radius * 2.0)]
        }
        Geometry::Line { from, to } => vec![Polyline::stroke(vec![*from, *to], false, 0.0)],
    }
}

fn box_faces(h: Vec3) -> Vec<Polyline> {
    let corner = |x: f32, y: f32, z: f32| Vec3::new(x * h.x, y * h.y, z * h.z);
    let faces: [[(f32, f32, f32); 4]; 6] = [
        [(1., -1., -1.), (1., 1., -1.), (1., 1., 1.), (1., -1., 1.)],
        [(-1., -1., -1.), (-1., -1., 1.), (-1., 1., 1.), (-1., 1., -1.)],
        [(-1., 1., -1.), (-1., 1., 1.), (1., 1., 1.), (1., 1., -1.)],
        [(-1., -1., -1.), (1., -1., -1.), (1., -1., 1.), (-1., -1., 1.)],
        [(-1., -1., 1.), (1., -1., 1.), (1., 1., 1.), (-1., 1., 1.)],
        [(-1., -1., -1.), (-1., 1., -1.), (1., 1., -1.), (1., -1., -1.)],
    ];
    faces
        .iter()
        .map(|face| Polyline::face(face.iter().map(|&(x, y, z)| corner(x, y, z)).collect()))
        .collect()
}

fn frustum(radius_top: f32, radius_bottom: f32, height: f32, open_ended: bool) -> Vec<Polyline> {
    let half = height * 0.5;
    let ring = |radius: f32, y: f32| -> Vec<Vec3> {
        circle(radius, RADIAL_SEGMENTS, Plane::Xz)
            .into_iter()
            .map(|p| p + Vec3::Y * y)
            .collect()
    };
    let top = ring(radius_top, half);
    let bottom = ring(radius_bottom, -half);

    let mut faces: Vec<Polyline> = (0..RADIAL_SEGMENTS)
        .map(|i| {
            let j = (i + 1) % RADIAL_SEGMENTS;
            Polyline::face(vec![bottom[i], bottom[j], top[j], top[i]])
        })
        .collect();

    if !open_ended {
        if radius_top > 0.0 {
            faces.push(Polyline::face(top));
        }
        if radius_bottom > 0.0 {
            faces.push(Polyline::face(bottom));
        }
    }
    faces
}

#[derive(Clone, Copy)]
enum Plane {
    Xy,
    Xz,
    Yz,
}

#[allow(clippy::cast_precision_loss)]
fn circle(radius: f32, segments: usize, plane: Plane) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * TAU;
            let (s, c) = a.sin_cos();
            match plane {
                Plane::Xy => Vec3::new(c * radius, s * radius, 0.0),
                Plane::Xz => Vec3::new(c * radius, 0.0, s * radius),
                Plane::Yz => Vec3::new(0.0, c * radius, s * radius),
            }
        })
        .collect()
}

/// Samples a uniform Catmull-Rom spline through `points`, clamping the end
/// tangents by repeating the end points.
#[allow(clippy::cast_precision_loss)]
fn catmull_rom(points: &[Vec3]) -> Vec<Vec3> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let at = |i: isize| points[i.clamp(0, points.len() as isize - 1) as usize];
    let mut out = Vec::new();
    for span in 0..points.len() - 1 {
        let i = span as isize;
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        for k in 0..TUBE_SAMPLES_PER_SPAN {
            let t = k as f32 / TUBE_SAMPLES_PER_SPAN as f32;
            let t2 = t * t;
            let t3 = t2 * t;
            out.push(
                0.5 * ((2.0 * p1)
                    + (p2 - p0) * t
                    + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                    + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3),
            );
        }
    }
    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_six_quads() {
        let faces = outline(&Geometry::cuboid(2.0, 1.0, 1.0));
        assert_eq!(faces.len(), 6);
        assert!(faces.iter().all(|f| f.points.len() == 4 && f.filled));
        assert!(faces.iter().flat_map(|f| &f.points).all(|p| p.x.abs() == 1.0));
    }

    #[test]
    fn open_cone_has_no_caps() {
        let faces = outline(&Geometry::open_cone(0.7, 3.2));
        assert_eq!(faces.len(), RADIAL_SEGMENTS);
    }

    #[test]
    fn closed_cylinder_has_two_caps() {
        let faces = outline(&Geometry::cylinder(0.2, 0.2, 1.6));
        assert_eq!(faces.len(), RADIAL_SEGMENTS + 2);
    }

    #[test]
    fn torus_is_thick_ring() {
        let rings = outline(&Geometry::torus(1.8, 0.5));
        assert_eq!(rings.len(), 1);
        assert!((rings[0].thickness - 1.0).abs() < f32::EPSILON);
        assert!(rings[0].points.iter().all(|p| (p.length() - 1.8).abs() < 1e-4));
    }

    #[test]
    fn tube_passes_through_control_points() {
        let points = vec![
            Vec3::new(-1.05, -0.4, 0.0),
            Vec3::new(0.0, 0.1, 0.25),
            Vec3::new(0.95, 0.55, 0.08),
        ];
        let line = &outline(&Geometry::tube(points.clone(), 0.04))[0];
        assert_eq!(line.points.first(), Some(&points[0]));
        assert_eq!(line.points.last(), Some(&points[2]));
        assert!((line.points[TUBE_SAMPLES_PER_SPAN] - points[1]).length() < 1e-5);
    }
}
