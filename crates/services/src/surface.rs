use std::collections::{HashMap, HashSet};

use imaging_core::scene::{CameraPose, SceneTree, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewportHandle(u64);

impl ViewportHandle {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Host graphics collaborator owning viewports and uploaded primitives.
///
/// Every handle returned by `upload` must eventually be passed to `release`,
/// and every viewport to `destroy_viewport`.
pub trait RenderSurface {
    fn create_viewport(&mut self, width: u32, height: u32) -> ViewportHandle;
    fn resize_viewport(&mut self, viewport: ViewportHandle, width: u32, height: u32);
    fn upload(&mut self, shape: &Shape) -> ResourceHandle;
    fn release(&mut self, resource: ResourceHandle);
    fn submit_frame(&mut self, viewport: ViewportHandle, scene: &SceneTree, camera: &CameraPose);
    fn destroy_viewport(&mut self, viewport: ViewportHandle);
}

/// Bookkeeping-only surface for tests and headless runs.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    next_id: u64,
    viewports: HashMap<ViewportHandle, (u32, u32)>,
    resources: HashSet<ResourceHandle>,
    uploads: u64,
    frames: u64,
    last_frame_shapes: usize,
}

impl InMemorySurface {
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

    #[must_use]
    pub fn live_viewports(&self) -> usize {
        self.viewports.len()
    }

    #[must_use]
    pub fn viewport_size(&self, viewport: ViewportHandle) -> Option<(u32, u32)> {
        self.viewports.get(&viewport).copied()
    }

    /// Total uploads since creation, including released ones.
    #[must_use]
    pub fn total_uploads(&self) -> u64 {
        self.uploads
    }

    #[must_use]
    pub fn frames_submitted(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn last_frame_shapes(&self) -> usize {
        self.last_frame_shapes
    }
}

impl RenderSurface for InMemorySurface {
    fn create_viewport(&mut self, width: u32, height: u32) -> ViewportHandle {
        let handle = ViewportHandle::new(self.next());
        self.viewports.insert(handle, (width, height));
        handle
    }

    fn resize_viewport(&mut self, viewport: ViewportHandle, width: u32, height: u32) {
        if let Some(size) = self.viewports.get_mut(&viewport) {
            *size = (width, height);
        }
    }

    fn upload(&mut self, _shape: &Shape) -> ResourceHandle {
        let handle = ResourceHandle::new(self.next());
        self.resources.insert(handle);
        self.uploads += 1;
        handle
    }

    fn release(&mut self, resource: ResourceHandle) {
        self.resources.remove(&resource);
    }

    fn submit_frame(&mut self, viewport: ViewportHandle, scene: &SceneTree, _camera: &CameraPose) {
        if self.viewports.contains_key(&viewport) {
            self.frames += 1;
            self.last_frame_shapes = scene.shape_count();
        }
    }

    fn destroy_viewport(&mut self, viewport: ViewportHandle) {
        self.viewports.remove(&viewport);
    }
}
