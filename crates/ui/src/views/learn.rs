use dioxus::prelude::*;

use imaging_core::time::{AnimationClock, FRAME_INTERVAL};
use services::Viewer;
use tracing::debug;

use crate::context::{AppContext, use_explorer};
use crate::surface::SvgSurface;
use crate::vm::{ComponentRowVm, LearnVm, StepRowVm, map_learn, map_scan_caption, scan_svg_markup};

#[component]
pub fn LearnView() -> Element {
    let explorer = use_explorer();
    let vm = {
        let explorer = explorer.read();
        map_learn(explorer.selected(), explorer.state())
    };
    let scan_visible = vm.scan_visible;
    let rows = vm.components.clone();

    rsx! {
        div { class: "page learn-page",
            ViewerPanel { vm: vm.clone() }
            div { class: "info-column",
                if scan_visible {
                    ScanPanel {}
                }
                ComponentsPanel { rows }
                StepsPanel { vm: vm.clone() }
            }
        }
    }
}

//
// ─── VIEWER ────────────────────────────────────────────────────────────────────
//

#[allow(clippy::cast_possible_truncation)]
fn pointer_x(x: f64) -> f32 {
    x as f32
}

#[component]
fn ViewerPanel(vm: LearnVm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut explorer = use_explorer();
    let height = ctx.viewport_height();

    let mut viewer = use_signal(|| Viewer::new(SvgSurface::new()));
    let mut frame = use_signal(String::new);

    // Rebuild whenever the scene inputs change; the viewer skips equal keys.
    use_effect(move || {
        let key = explorer.read().scene_key();
        viewer.write().sync(key);
    });

    use_future(move || async move {
        let clock = AnimationClock::start();
        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        loop {
            ticker.tick().await;
            let mut viewer = viewer.write();
            if !viewer.frame(&clock) {
                continue;
            }
            if let Some(markup) = viewer.viewport().and_then(|vp| viewer.surface().markup(vp)) {
                frame.set(markup);
            }
        }
    });

    use_drop(move || {
        if let Ok(mut viewer) = viewer.try_write() {
            viewer.teardown();
        }
    });

    let on_resize = move |evt: Event<ResizeData>| {
        let Ok(size) = evt.get_content_box_size() else {
            return;
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = size.width.max(0.0) as u32;
        let mut viewer = viewer.write();
        if viewer.is_mounted() {
            viewer.resize(width, height);
        } else {
            debug!(width, height, "mounting viewport");
            viewer.mount(width, height);
        }
    };

    let (play_label, play_class) = if vm.animating {
        ("⏸", "tool-button active")
    } else {
        ("▶", "tool-button")
    };

    rsx! {
        section { class: "card viewer-card",
            div { class: "card-header",
                div {
                    h2 { style: "color: {vm.accent}", "{vm.icon} {vm.name}" }
                    p { class: "muted", "{vm.full_name}" }
                }
                div { class: "toolbar",
                    button {
                        class: "tool-button",
                        onclick: move |_| explorer.write().toggle_scan_output(),
                        "🖼 Output"
                    }
                    button {
                        class: play_class,
                        onclick: move |_| explorer.write().toggle_animation(),
                        "{play_label}"
                    }
                }
            }
            div {
                class: "viewport",
                style: "height: {height}px",
                onresize: on_resize,
                onmousedown: move |evt: MouseEvent| {
                    viewer.write().pointer_down(pointer_x(evt.client_coordinates().x));
                },
                onmousemove: move |evt: MouseEvent| {
                    viewer.write().pointer_move(pointer_x(evt.client_coordinates().x));
                },
                onmouseup: move |_| viewer.write().pointer_up(),
                onmouseleave: move |_| viewer.write().pointer_up(),
                ontouchstart: move |evt: TouchEvent| {
                    if let Some(touch) = evt.touches().first() {
                        viewer.write().pointer_down(pointer_x(touch.client_coordinates().x));
                    }
                },
                ontouchmove: move |evt: TouchEvent| {
                    if let Some(touch) = evt.touches().first() {
                        viewer.write().pointer_move(pointer_x(touch.client_coordinates().x));
                    }
                },
                ontouchend: move |_| viewer.write().pointer_up(),
                dangerous_inner_html: "{frame}",
            }
            p { class: "muted", "{vm.description}" }
        }
    }
}

//
// ─── SCAN OUTPUT ───────────────────────────────────────────────────────────────
//

#[component]
fn ScanPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let mut explorer = use_explorer();
    let (caption, svg) = {
        let explorer = explorer.read();
        let image = explorer.scan_output(&mut ctx.scan_rng());
        (map_scan_caption(explorer.selected()), scan_svg_markup(&image))
    };

    rsx! {
        section { class: "card scan-card",
            div { class: "card-header",
                h3 { "{caption.title}" }
                button {
                    class: "link-button",
                    onclick: move |_| explorer.write().close_scan_output(),
                    "✕ Close"
                }
            }
            div { class: "scan-image", dangerous_inner_html: "{svg}" }
            p { class: "muted", "{caption.description}" }
            div { class: "best-for", "{caption.best_for}" }
        }
    }
}

//
// ─── COMPONENTS & STEPS ────────────────────────────────────────────────────────
//

#[component]
fn ComponentsPanel(rows: Vec<ComponentRowVm>) -> Element {
    rsx! {
        section { class: "card",
            h3 { "Key Components" }
            for row in rows {
                ComponentRow { key: "{row.index}", row }
            }
        }
    }
}

#[component]
fn ComponentRow(row: ComponentRowVm) -> Element {
    let mut explorer = use_explorer();
    let index = row.index;
    let (class, border) = if row.highlighted {
        ("component-row active", format!("border-left-color: {}", row.swatch))
    } else {
        ("component-row", String::new())
    };

    rsx! {
        button {
            class,
            style: "{border}",
            onclick: move |_| explorer.write().toggle_highlight(index),
            div { class: "component-label",
                span { class: "swatch", style: "background-color: {row.swatch}" }
                span { class: "component-name", "{row.name}" }
            }
            if row.highlighted {
                p { class: "muted", "{row.description}" }
            }
        }
    }
}

#[component]
fn StepsPanel(vm: LearnVm) -> Element {
    let mut explorer = use_explorer();

    rsx! {
        section { class: "card",
            h3 { "How It Works" }
            for step in vm.steps.clone() {
                StepRow {
                    key: "{step.index}",
                    step,
                    accent: vm.accent.clone(),
                    description: vm.step_description.clone(),
                }
            }
            div { class: "step-nav",
                button {
                    class: "nav-button",
                    disabled: !vm.can_go_back,
                    onclick: move |_| explorer.write().back_step(),
                    "Back"
                }
                button {
                    class: "nav-button",
                    disabled: !vm.can_go_next,
                    onclick: move |_| explorer.write().next_step(),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn StepRow(step: StepRowVm, accent: String, description: String) -> Element {
    let mut explorer = use_explorer();
    let index = step.index;
    let (class, badge) = if step.active {
        ("step-row active", format!("background-color: {accent}"))
    } else {
        ("step-row", String::new())
    };

    rsx! {
        button {
            class,
            onclick: move |_| explorer.write().select_step(index),
            span { class: "step-number", style: "{badge}", "{step.number}" }
            div {
                div { class: "step-title", "{step.title}" }
                if step.active {
                    p { class: "muted", "{description}" }
                }
            }
        }
    }
}
