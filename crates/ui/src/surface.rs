//! `RenderSurface` that flattens each frame into depth-sorted SVG polygons.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use imaging_core::model::Rgb;
use imaging_core::scene::{BACKGROUND, CameraPose, SceneTree, Shading, Shape, outline};
use services::{RenderSurface, ResourceHandle, ViewportHandle};

/// One projected outline in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPrimitive {
    pub points: Vec<(f32, f32)>,
    pub closed: bool,
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
    pub stroke_width: f32,
    pub opacity: f32,
    pub depth: f32,
}

#[derive(Debug, Default)]
struct ViewportState {
    size: (u32, u32),
    primitives: Vec<SvgPrimitive>,
}

#[derive(Debug, Default)]
pub struct SvgSurface {
    next_id: u64,
    viewports: HashMap<ViewportHandle, ViewportState>,
    resources: HashSet<ResourceHandle>,
}

impl SvgSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    #[must_use]
    pub fn live_resources(&self) -> usize {
        self.resources.len()
    }

    /// Primitives of the last submitted frame, back to front.
    #[must_use]
    pub fn primitives(&self, viewport: ViewportHandle) -> &[SvgPrimitive] {
        self.viewports
            .get(&viewport)
            .map_or(&[], |state| state.primitives.as_slice())
    }

    /// The last submitted frame as a standalone `<svg>` element.
    #[must_use]
    pub fn markup(&self, viewport: ViewportHandle) -> Option<String> {
        let state = self.viewports.get(&viewport)?;
        let (width, height) = state.size;
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><rect width="{width}" height="{height}" fill="{BACKGROUND}"/>"#
        );
        for primitive in &state.primitives {
            write_primitive(&mut out, primitive);
        }
        out.push_str("</svg>");
        Some(out)
    }
}

fn write_primitive(out: &mut String, primitive: &SvgPrimitive) {
    let tag = if primitive.closed { "polygon" } else { "polyline" };
    let points = primitive
        .points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let fill = primitive
        .fill
        .map_or_else(|| "none".to_owned(), |c| c.to_string());
    let _ = write!(
        out,
        r#"<{tag} points="{points}" fill="{fill}" opacity="{:.2}""#,
        primitive.opacity
    );
    if let Some(stroke) = primitive.stroke {
        let _ = write!(
            out,
            r#" stroke="{stroke}" stroke-width="{:.1}" stroke-linecap="round" stroke-linejoin="round""#,
            primitive.stroke_width
        );
    }
    out.push_str("/>");
}

fn flatten(scene: &SceneTree, camera: &CameraPose, size: (u32, u32)) -> Vec<SvgPrimitive> {
    let (width, height) = size;
    let mut primitives = Vec::new();
    scene.visit(|shape, world| {
        let material = shape.material();
        let color = material.display_color();
        let opacity = shape.pose().opacity.clamp(0.0, 1.0);
        for polyline in outline(shape.geometry()) {
            let projected: Option<Vec<_>> = polyline
                .points
                .iter()
                .map(|p| camera.project(world.transform_point3(*p), width, height))
                .collect();
            let Some(projected) = projected else {
                continue;
            };
            if projected.is_empty() {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let depth = projected.iter().map(|p| p.depth).sum::<f32>() / projected.len() as f32;
            let points = projected.iter().map(|p| (p.x, p.y)).collect();

            let hairline = polyline.thickness <= 0.0 || material.shading == Shading::Line;
            let (fill, stroke, stroke_width) = if polyline.filled {
                (Some(color), None, 0.0)
            } else if hairline {
                (None, Some(color), 1.0)
            } else {
                let px = polyline.thickness * camera.pixels_per_unit(depth, height);
                (None, Some(color), px.max(1.0))
            };

            primitives.push(SvgPrimitive {
                points,
                closed: polyline.closed,
                fill,
                stroke,
                stroke_width,
                opacity,
                depth,
            });
        }
    });
    primitives.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    primitives
}

impl RenderSurface for SvgSurface {
    fn create_viewport(&mut self, width: u32, height: u32) -> ViewportHandle {
        let handle = ViewportHandle::new(self.next());
        self.viewports.insert(
            handle,
            ViewportState {
                size: (width, height),
                primitives: Vec::new(),
            },
        );
        handle
    }

    fn resize_viewport(&mut self, viewport: ViewportHandle, width: u32, height: u32) {
        if let Some(state) = self.viewports.get_mut(&viewport) {
            state.size = (width, height);
        }
    }

    fn upload(&mut self, _shape: &Shape) -> ResourceHandle {
        let handle = ResourceHandle::new(self.next());
        self.resources.insert(handle);
        handle
    }

    fn release(&mut self, resource: ResourceHandle) {
        self.resources.remove(&resource);
    }

    fn submit_frame(&mut self, viewport: ViewportHandle, scene: &SceneTree, camera: &CameraPose) {
        let Some(size) = self.viewports.get(&viewport).map(|state| state.size) else {
            return;
        };
        let primitives = flatten(scene, camera, size);
        if let Some(state) = self.viewports.get_mut(&viewport) {
            state.primitives = primitives;
        }
    }

    fn destroy_viewport(&mut self, viewport: ViewportHandle) {
        self.viewports.remove(&viewport);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use imaging_core::model::ModalityId;
    use imaging_core::session::SceneKey;
    use imaging_core::time::AnimationClock;
    use services::Viewer;

    use super::*;

    fn viewer(modality: ModalityId) -> Viewer<SvgSurface> {
        let mut viewer = Viewer::new(SvgSurface::new());
        viewer.mount(600, 300);
        viewer.sync(SceneKey {
            modality,
            highlight: None,
            animating: false,
        });
        viewer.frame(&AnimationClock::fixed(Duration::ZERO));
        viewer
    }

    #[test]
    fn frame_is_sorted_back_to_front() {
        let viewer = viewer(ModalityId::Mri);
        let surface = viewer.surface();
        let primitives = surface.primitives(viewer.viewport().unwrap());
        assert!(!primitives.is_empty());
        assert!(primitives.windows(2).all(|w| w[0].depth >= w[1].depth));
    }

    #[test]
    fn markup_starts_with_background() {
        let viewer = viewer(ModalityId::Ct);
        let surface = viewer.surface();
        let svg = surface.markup(viewer.viewport().unwrap()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#0f172a""##));
        assert!(svg.contains("<polygon"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn highlight_changes_the_frame() {
        let plain = viewer(ModalityId::Ct);
        let mut lit = Viewer::new(SvgSurface::new());
        lit.mount(600, 300);
        lit.sync(SceneKey {
            modality: ModalityId::Ct,
            highlight: Some(2),
            animating: false,
        });
        lit.frame(&AnimationClock::fixed(Duration::ZERO));

        let a = plain.surface().primitives(plain.viewport().unwrap()).to_vec();
        let b = lit.surface().primitives(lit.viewport().unwrap()).to_vec();
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn unknown_viewport_has_no_markup() {
        let surface = SvgSurface::new();
        assert!(surface.markup(ViewportHandle::new(42)).is_none());
        assert!(surface.primitives(ViewportHandle::new(42)).is_empty());
    }
}
