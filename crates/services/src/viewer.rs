use std::time::Duration;

use tracing::debug;

use imaging_core::scene::{
    AUTO_ROTATE_RATE, CameraPose, DRAG_YAW_PER_PIXEL, SceneTree, VIEWPORT_HEIGHT, build_scene,
};
use imaging_core::session::SceneKey;
use imaging_core::time::AnimationClock;

use crate::drag::DragTracker;
use crate::surface::{RenderSurface, ResourceHandle, ViewportHandle};

/// Owns one viewport on a `RenderSurface` and everything uploaded to it.
///
/// Lifecycle: `mount` creates the viewport, `sync` (re)builds the scene when its
/// key changes, `frame` animates and submits, and `teardown` (or drop) releases
/// all resources. A torn-down viewer ignores every further call.
pub struct Viewer<S: RenderSurface> {
    surface: S,
    camera: CameraPose,
    viewport: Option<ViewportHandle>,
    size: (u32, u32),
    key: Option<SceneKey>,
    scene: Option<SceneTree>,
    uploaded: Vec<ResourceHandle>,
    drag: DragTracker,
    yaw: f32,
    last_elapsed: Option<Duration>,
    torn_down: bool,
}

impl<S: RenderSurface> Viewer<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            camera: CameraPose::default(),
            viewport: None,
            size: (0, VIEWPORT_HEIGHT),
            key: None,
            scene: None,
            uploaded: Vec::new(),
            drag: DragTracker::new(),
            yaw: 0.0,
            last_elapsed: None,
            torn_down: false,
        }
    }

    // Accessors
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    #[must_use]
    pub fn viewport(&self) -> Option<ViewportHandle> {
        self.viewport
    }

    #[must_use]
    pub fn scene(&self) -> Option<&SceneTree> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Handles currently held on the surface.
    #[must_use]
    pub fn live_resources(&self) -> usize {
        self.uploaded.len()
    }

    /// Creates the viewport. Builds the pending scene, if `sync` ran first.
    pub fn mount(&mut self, width: u32, height: u32) {
        if self.torn_down || self.viewport.is_some() {
            return;
        }
        let viewport = self.surface.create_viewport(width, height);
        debug!(viewport = viewport.get(), width, height, "viewer mounted");
        self.viewport = Some(viewport);
        self.size = (width, height);
        if self.key.is_some() {
            self.rebuild();
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let Some(viewport) = self.viewport else {
            return;
        };
        if self.size == (width, height) {
            return;
        }
        self.size = (width, height);
        self.surface.resize_viewport(viewport, width, height);
    }

    /// Makes the displayed scene match `key`. Returns whether a rebuild happened.
    pub fn sync(&mut self, key: SceneKey) -> bool {
        if self.key == Some(key) && self.scene.is_some() {
            return false;
        }
        self.key = Some(key);
        self.rebuild()
    }

    /// Releases every uploaded primitive, then builds and uploads the scene for
    /// the current key. No-op without a mounted viewport.
    fn rebuild(&mut self) -> bool {
        let (Some(_), Some(key)) = (self.viewport, self.key) else {
            return false;
        };

        self.release_uploaded();
        let mut scene = build_scene(key);
        scene.set_assembly_yaw(self.yaw);
        for shape in scene.shapes() {
            self.uploaded.push(self.surface.upload(shape));
        }
        debug!(
            modality = %key.modality,
            resources = self.uploaded.len(),
            "viewer rebuilt scene"
        );
        self.scene = Some(scene);
        true
    }

    fn release_uploaded(&mut self) {
        for handle in self.uploaded.drain(..) {
            self.surface.release(handle);
        }
    }

    /// Advances animation to the clock's current time and submits a frame.
    /// Returns false when there is nothing to draw.
    #[allow(clippy::cast_precision_loss)]
    pub fn frame(&mut self, clock: &AnimationClock) -> bool {
        let elapsed = clock.elapsed();
        let (Some(viewport), Some(scene)) = (self.viewport, self.scene.as_mut()) else {
            return false;
        };

        let dt = self
            .last_elapsed
            .map_or(Duration::ZERO, |last| elapsed.saturating_sub(last));
        self.last_elapsed = Some(elapsed);
        if scene.key().animating {
            self.yaw += dt.as_secs_f32() * AUTO_ROTATE_RATE;
        }

        scene.animate(clock.phase());
        scene.set_assembly_yaw(self.yaw);
        self.surface.submit_frame(viewport, scene, &self.camera);
        true
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.drag.press(x);
    }

    pub fn pointer_move(&mut self, x: f32) {
        let Some(dx) = self.drag.move_to(x) else {
            return;
        };
        self.yaw += dx * DRAG_YAW_PER_PIXEL;
        if let Some(scene) = self.scene.as_mut() {
            scene.set_assembly_yaw(self.yaw);
        }
    }

    /// Ends a drag; also used for pointer leave and touch end.
    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    /// Releases all uploaded primitives and destroys the viewport. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.release_uploaded();
        self.scene = None;
        self.drag.release();
        if let Some(viewport) = self.viewport.take() {
            self.surface.destroy_viewport(viewport);
            debug!(viewport = viewport.get(), "viewer torn down");
        }
    }
}

impl<S: RenderSurface> Drop for Viewer<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::InMemorySurface;
    use imaging_core::model::ModalityId;

    fn key(modality: ModalityId, animating: bool) -> SceneKey {
        SceneKey {
            modality,
            highlight: None,
            animating,
        }
    }

    #[test]
    fn sync_before_mount_defers_build() {
        let mut viewer = Viewer::new(InMemorySurface::new());
        assert!(!viewer.sync(key(ModalityId::Mri, true)));
        assert_eq!(viewer.live_resources(), 0);

        viewer.mount(600, 300);
        assert!(viewer.scene().is_some());
        assert!(viewer.live_resources() > 0);
    }

    #[test]
    fn frame_without_viewport_is_noop() {
        let mut viewer = Viewer::new(InMemorySurface::new());
        assert!(!viewer.frame(&AnimationClock::fixed(Duration::from_millis(16))));
        assert_eq!(viewer.surface().frames_submitted(), 0);
    }

    #[test]
    fn paused_scene_does_not_auto_rotate() {
        let mut viewer = Viewer::new(InMemorySurface::new());
        viewer.mount(600, 300);
        viewer.sync(key(ModalityId::Ct, false));
        let mut clock = AnimationClock::fixed(Duration::ZERO);
        viewer.frame(&clock);
        clock.advance(Duration::from_secs(1));
        viewer.frame(&clock);
        assert!(viewer.yaw().abs() < f32::EPSILON);
    }

    #[test]
    fn animating_scene_auto_rotates() {
        let mut viewer = Viewer::new(InMemorySurface::new());
        viewer.mount(600, 300);
        viewer.sync(key(ModalityId::Ct, true));
        let mut clock = AnimationClock::fixed(Duration::ZERO);
        viewer.frame(&clock);
        clock.advance(Duration::from_secs(2));
        viewer.frame(&clock);
        assert!((viewer.yaw() - 2.0 * AUTO_ROTATE_RATE).abs() < 1e-5);
    }

    #[test]
    fn resize_updates_surface() {
        let mut viewer = Viewer::new(InMemorySurface::new());
        viewer.mount(600, 300);
        viewer.resize(420, 300);
        assert_eq!(viewer.size(), (420, 300));
        assert_eq!(viewer.surface().live_viewports(), 1);
        let viewport = viewer.viewport().unwrap();
        assert_eq!(viewer.surface().viewport_size(viewport), Some((420, 300)));
    }
}
