use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use imaging_core::model::ModalityId;
use imaging_core::scene::{AUTO_ROTATE_RATE, CameraPose, SceneTree, Shape};
use imaging_core::session::SceneKey;
use imaging_core::time::{AnimationClock, FRAME_INTERVAL};
use services::{InMemorySurface, RenderSurface, ResourceHandle, Viewer, ViewportHandle};

/// Lets the test keep looking at the surface after the viewer is dropped.
#[derive(Clone, Default)]
struct SharedSurface(Rc<RefCell<InMemorySurface>>);

impl RenderSurface for SharedSurface {
    fn create_viewport(&mut self, width: u32, height: u32) -> ViewportHandle {
        self.0.borrow_mut().create_viewport(width, height)
    }

    fn resize_viewport(&mut self, viewport: ViewportHandle, width: u32, height: u32) {
        self.0.borrow_mut().resize_viewport(viewport, width, height);
    }

    fn upload(&mut self, shape: &Shape) -> ResourceHandle {
        self.0.borrow_mut().upload(shape)
    }

    fn release(&mut self, resource: ResourceHandle) {
        self.0.borrow_mut().release(resource);
    }

    fn submit_frame(&mut self, viewport: ViewportHandle, scene: &SceneTree, camera: &CameraPose) {
        self.0.borrow_mut().submit_frame(viewport, scene, camera);
    }

    fn destroy_viewport(&mut self, viewport: ViewportHandle) {
        self.0.borrow_mut().destroy_viewport(viewport);
    }
}

fn key(modality: ModalityId, highlight: Option<usize>) -> SceneKey {
    SceneKey {
        modality,
        highlight,
        animating: true,
    }
}

fn mounted() -> Viewer<InMemorySurface> {
    let mut viewer = Viewer::new(InMemorySurface::new());
    viewer.mount(640, 300);
    viewer
}

#[test]
fn rebuilding_does_not_leak_resources() {
    let mut viewer = mounted();
    assert!(viewer.sync(key(ModalityId::Mri, None)));
    let first = viewer.surface().live_resources();
    assert!(first > 0);

    assert!(viewer.sync(key(ModalityId::Ct, None)));
    assert!(viewer.sync(key(ModalityId::Mri, None)));
    assert_eq!(viewer.surface().live_resources(), first);
    assert_eq!(viewer.live_resources(), first);
}

#[test]
fn same_key_does_not_rebuild() {
    let mut viewer = mounted();
    viewer.sync(key(ModalityId::Pet, None));
    let uploads = viewer.surface().total_uploads();
    assert!(!viewer.sync(key(ModalityId::Pet, None)));
    assert_eq!(viewer.surface().total_uploads(), uploads);
}

#[test]
fn highlight_change_rebuilds_with_new_key() {
    let mut viewer = mounted();
    viewer.sync(key(ModalityId::Ct, None));
    assert!(viewer.sync(key(ModalityId::Ct, Some(2))));
    let scene = viewer.scene().unwrap();
    assert_eq!(scene.key().highlight, Some(2));
    assert!(!scene.shapes_for_component(2).is_empty());
}

#[test]
fn drag_rotates_only_while_pressed() {
    let mut viewer = mounted();
    viewer.sync(key(ModalityId::Mri, None));

    viewer.pointer_move(300.0);
    assert_eq!(viewer.yaw(), 0.0);

    viewer.pointer_down(100.0);
    viewer.pointer_move(150.0);
    assert!((viewer.yaw() - 0.5).abs() < 1e-6);
    assert!((viewer.scene().unwrap().yaw() - 0.5).abs() < 1e-6);

    viewer.pointer_up();
    viewer.pointer_move(400.0);
    assert!((viewer.yaw() - 0.5).abs() < 1e-6);
}

#[test]
fn frames_submit_every_shape() {
    let mut viewer = mounted();
    viewer.sync(key(ModalityId::Ultrasound, None));
    let mut clock = AnimationClock::fixed(Duration::ZERO);
    assert!(viewer.frame(&clock));
    clock.advance(FRAME_INTERVAL);
    assert!(viewer.frame(&clock));
    let surface = viewer.surface();
    assert_eq!(surface.frames_submitted(), 2);
    assert_eq!(surface.last_frame_shapes(), viewer.scene().unwrap().shape_count());
}

#[test]
fn fixed_clock_drives_auto_rotation_frame_by_frame() {
    let mut viewer = mounted();
    viewer.sync(key(ModalityId::Mri, None));
    let mut clock = AnimationClock::fixed(Duration::ZERO);
    viewer.frame(&clock);
    for _ in 0..60 {
        clock.advance(FRAME_INTERVAL);
        assert!(viewer.frame(&clock));
    }
    let expected = FRAME_INTERVAL.as_secs_f32() * 60.0 * AUTO_ROTATE_RATE;
    assert!((viewer.yaw() - expected).abs() < 1e-4);
    assert!((viewer.scene().unwrap().yaw() - expected).abs() < 1e-4);
}

#[test]
fn teardown_releases_everything() {
    let mut viewer = mounted();
    viewer.sync(key(ModalityId::Xray, None));
    viewer.teardown();

    assert!(viewer.is_torn_down());
    assert_eq!(viewer.surface().live_resources(), 0);
    assert_eq!(viewer.surface().live_viewports(), 0);
    assert!(viewer.scene().is_none());

    // a late sync or frame after teardown must not touch the surface
    assert!(!viewer.sync(key(ModalityId::Pet, None)));
    assert!(!viewer.frame(&AnimationClock::fixed(Duration::from_secs(1))));
    assert_eq!(viewer.surface().live_resources(), 0);

    viewer.teardown();
    assert_eq!(viewer.surface().live_viewports(), 0);
}

#[test]
fn dropping_the_viewer_releases_its_surface_state() {
    let surface = SharedSurface::default();
    {
        let mut viewer = Viewer::new(surface.clone());
        viewer.mount(800, 300);
        viewer.sync(key(ModalityId::Pet, Some(0)));
        assert!(surface.0.borrow().live_resources() > 0);
        assert_eq!(surface.0.borrow().live_viewports(), 1);
    }
    assert_eq!(surface.0.borrow().live_resources(), 0);
    assert_eq!(surface.0.borrow().live_viewports(), 0);
}
