use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use super::animation::{Animation, Pose, yaw_rotation};
use super::material::Material;
use crate::session::SceneKey;

//
// ─── GEOMETRY ──────────────────────────────────────────────────────────────────
//

/// Primitive shapes, in local space. Cylinders and cones run along y and are
/// centred on the origin; tori lie in the xy plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        open_ended: bool,
    },
    Cone {
        radius: f32,
        height: f32,
        open_ended: bool,
    },
    Torus {
        radius: f32,
        tube: f32,
    },
    Sphere {
        radius: f32,
    },
    Tube {
        points: Vec<Vec3>,
        radius: f32,
    },
    Line {
        from: Vec3,
        to: Vec3,
    },
}

impl Geometry {
    #[must_use]
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            width,
            height,
            depth,
        }
    }

    #[must_use]
    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32) -> Self {
        Self::Cylinder {
            radius_top,
            radius_bottom,
            height,
            open_ended: false,
        }
    }

    #[must_use]
    pub fn open_cylinder(radius: f32, height: f32) -> Self {
        Self::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            open_ended: true,
        }
    }

    #[must_use]
    pub fn open_cone(radius: f32, height: f32) -> Self {
        Self::Cone {
            radius,
            height,
            open_ended: true,
        }
    }

    #[must_use]
    pub fn torus(radius: f32, tube: f32) -> Self {
        Self::Torus { radius, tube }
    }

    #[must_use]
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    #[must_use]
    pub fn tube(points: Vec<Vec3>, radius: f32) -> Self {
        Self::Tube { points, radius }
    }

    #[must_use]
    pub fn line(from: Vec3, to: Vec3) -> Self {
        Self::Line { from, to }
    }
}

//
// ─── TRANSFORM ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the rotation from x/y/z Euler angles in radians.
    #[must_use]
    pub fn rotated(mut self, euler: Vec3) -> Self {
        self.rotation = Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);
        self
    }

    #[must_use]
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Turns the local +z axis toward `target`.
    #[must_use]
    pub fn looking_at(mut self, target: Vec3) -> Self {
        let dir = (target - self.position).normalize_or_zero();
        if dir != Vec3::ZERO {
            self.rotation = Quat::from_rotation_arc(Vec3::Z, dir);
        }
        self
    }

    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

//
// ─── NODES ─────────────────────────────────────────────────────────────────────
//

/// A drawable primitive. `component` links it to a catalog component index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    geometry: Geometry,
    material: Material,
    transform: Transform,
    component: Option<usize>,
    animation: Animation,
    #[serde(skip)]
    pose: Pose,
}

impl Shape {
    #[must_use]
    pub fn new(geometry: Geometry, material: Material) -> Self {
        let transform = Transform::default();
        Self {
            geometry,
            pose: Pose {
                transform,
                opacity: material.opacity,
            },
            material,
            transform,
            component: None,
            animation: Animation::Static,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self.pose.transform = transform;
        self
    }

    #[must_use]
    pub fn at(self, position: Vec3) -> Self {
        let transform = self.transform.at(position);
        self.with_transform(transform)
    }

    #[must_use]
    pub fn rotated(self, euler: Vec3) -> Self {
        let transform = self.transform.rotated(euler);
        self.with_transform(transform)
    }

    #[must_use]
    pub fn scaled(self, scale: Vec3) -> Self {
        let transform = self.transform.scaled(scale);
        self.with_transform(transform)
    }

    #[must_use]
    pub fn for_component(mut self, component: usize) -> Self {
        self.component = Some(component);
        self
    }

    #[must_use]
    pub fn animated(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    // Accessors
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Base transform, before animation.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[must_use]
    pub fn component(&self) -> Option<usize> {
        self.component
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Pose after the most recent `animate` call.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    fn animate(&mut self, phase: f32) {
        self.pose = self
            .animation
            .pose(phase, &self.transform, self.material.opacity);
    }
}

/// A transform applied to a set of children, optionally animated as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    label: &'static str,
    transform: Transform,
    animation: Animation,
    children: Vec<SceneNode>,
    #[serde(skip)]
    pose: Pose,
}

impl Group {
    #[must_use]
    pub fn new(label: &'static str, children: Vec<SceneNode>) -> Self {
        let transform = Transform::default();
        Self {
            label,
            transform,
            animation: Animation::Static,
            children,
            pose: Pose {
                transform,
                opacity: 1.0,
            },
        }
    }

    #[must_use]
    pub fn animated(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    fn animate(&mut self, phase: f32) {
        self.pose = self.animation.pose(phase, &self.transform, 1.0);
        for child in &mut self.children {
            child.animate(phase);
        }
    }

    fn visit<'a>(&'a self, parent: Mat4, f: &mut impl FnMut(&'a Shape, Mat4)) {
        let world = parent * self.pose.transform.matrix();
        for child in &self.children {
            match child {
                SceneNode::Shape(shape) => f(shape, world * shape.pose.transform.matrix()),
                SceneNode::Group(group) => group.visit(world, f),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum SceneNode {
    Shape(Shape),
    Group(Group),
}

impl SceneNode {
    fn animate(&mut self, phase: f32) {
        match self {
            SceneNode::Shape(shape) => shape.animate(phase),
            SceneNode::Group(group) => group.animate(phase),
        }
    }
}

impl From<Shape> for SceneNode {
    fn from(shape: Shape) -> Self {
        SceneNode::Shape(shape)
    }
}

impl From<Group> for SceneNode {
    fn from(group: Group) -> Self {
        SceneNode::Group(group)
    }
}

//
// ─── TREE ──────────────────────────────────────────────────────────────────────
//

/// The apparatus for one `SceneKey`, rooted at a yaw-able assembly group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneTree {
    key: SceneKey,
    root: Group,
    #[serde(skip)]
    yaw: f32,
}

impl SceneTree {
    #[must_use]
    pub fn new(key: SceneKey, children: Vec<SceneNode>) -> Self {
        Self {
            key,
            root: Group::new("assembly", children),
            yaw: 0.0,
        }
    }

    #[must_use]
    pub fn key(&self) -> SceneKey {
        self.key
    }

    #[must_use]
    pub fn root(&self) -> &Group {
        &self.root
    }

    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Advances every node to `phase` radians.
    pub fn animate(&mut self, phase: f32) {
        self.root.animate(phase);
        self.apply_yaw();
    }

    pub fn set_assembly_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.apply_yaw();
    }

    fn apply_yaw(&mut self) {
        self.root.pose.transform.rotation = yaw_rotation(self.yaw) * self.root.transform.rotation;
    }

    /// Calls `f` with every shape and its world matrix, depth first.
    pub fn visit<'a>(&'a self, mut f: impl FnMut(&'a Shape, Mat4)) {
        self.root.visit(Mat4::IDENTITY, &mut f);
    }

    #[must_use]
    pub fn shapes(&self) -> Vec<&Shape> {
        let mut out = Vec::new();
        self.visit(|shape, _| out.push(shape));
        out
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes().len()
    }

    #[must_use]
    pub fn shapes_for_component(&self, component: usize) -> Vec<&Shape> {
        self.shapes()
            .into_iter()
            .filter(|shape| shape.component == Some(component))
            .collect()
    }
}
