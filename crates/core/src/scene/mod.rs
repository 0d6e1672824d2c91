//! Declarative 3D apparatus: a tree of primitives per modality, animated by
//! a shared phase and viewed through a fixed perspective camera.

pub mod animation;
mod builder;
pub mod camera;
mod layout;
pub mod material;
pub mod node;
pub mod outline;

pub use animation::{AUTO_ROTATE_RATE, Animation, DRAG_YAW_PER_PIXEL, Pose};
pub use builder::build_scene;
pub use camera::{BACKGROUND, CameraPose, ScreenPoint, VIEWPORT_HEIGHT};
pub use material::{Material, MaterialTone, Shading, ToneSet};
pub use node::{Geometry, Group, SceneNode, SceneTree, Shape, Transform};
pub use outline::{Polyline, outline};
