use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{ExplorerController, ExplorerSettings};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{LearnView, QuizView};

#[derive(Clone)]
struct TestApp {
    settings: ExplorerSettings,
}

impl UiApp for TestApp {
    fn settings(&self) -> ExplorerSettings {
        self.settings.clone()
    }

    fn scan_seed(&self) -> Option<u64> {
        Some(42)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The real router, starting at the learn page.
    Shell,
    Learn,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    controller: ExplorerController,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.controller.clone()));
    use_context_provider(|| props.view);
    match props.view {
        ViewKind::Shell => rsx! { Router::<Route> {} },
        ViewKind::Learn | ViewKind::Quiz => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Learn | ViewKind::Shell => rsx! { LearnView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, |_| {})
}

/// Builds a harness whose controller has been driven by `prepare` first.
pub fn setup_view_harness_with(
    view: ViewKind,
    prepare: impl FnOnce(&mut ExplorerController),
) -> ViewHarness {
    let settings = ExplorerSettings::default();
    let mut controller = ExplorerController::new(&settings);
    prepare(&mut controller);

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { settings }),
            view,
            controller,
        },
    );
    ViewHarness { dom }
}
