use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};

use imaging_core::session::ActiveTab;

use crate::context::use_explorer;
use crate::views::{LearnView, QuizView};
use crate::vm::{ModalityButtonVm, map_modality_buttons};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LearnView)] Learn {},
        #[route("/quiz", QuizView)] Quiz {},
}

impl Route {
    fn tab(&self) -> ActiveTab {
        match self {
            Route::Learn {} => ActiveTab::Learn,
            Route::Quiz {} => ActiveTab::Quiz,
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "header",
                h1 { "Medical Imaging Explorer" }
                p { class: "subtitle", "Interactive 3D guide to diagnostic imaging • Drag to rotate" }
            }
            ModalitySelector {}
            TabBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                "Educational Tool • Mohammad Khalaf • Biomedical Engineering"
            }
        }
    }
}

#[component]
fn ModalitySelector() -> Element {
    let mut explorer = use_explorer();
    let buttons = {
        let explorer = explorer.read();
        map_modality_buttons(explorer.catalog(), explorer.state().selected())
    };

    rsx! {
        nav { class: "modality-selector",
            for button in buttons {
                ModalityButton { key: "{button.id}", button }
            }
        }
    }
}

#[component]
fn ModalityButton(button: ModalityButtonVm) -> Element {
    let mut explorer = use_explorer();
    let id = button.id;
    let (class, style) = if button.active {
        (
            "modality-button active",
            format!("background: {0}; border-color: {0}", button.accent),
        )
    } else {
        ("modality-button", String::new())
    };

    rsx! {
        button {
            class,
            style: "{style}",
            onclick: move |_| explorer.write().select_modality(id),
            "{button.label}"
        }
    }
}

#[component]
fn TabBar() -> Element {
    let mut explorer = use_explorer();
    let navigator = use_navigator();
    let active = use_route::<Route>().tab();

    let tabs = [
        (ActiveTab::Learn, "📚 Learn", Route::Learn {}),
        (ActiveTab::Quiz, "❓ Quiz", Route::Quiz {}),
    ];

    rsx! {
        div { class: "tabs",
            for (tab, label, route) in tabs {
                button {
                    key: "{label}",
                    class: if tab == active { "tab active" } else { "tab" },
                    onclick: move |_| {
                        explorer.write().switch_tab(tab);
                        navigator.push(route.clone());
                    },
                    "{label}"
                }
            }
        }
    }
}
