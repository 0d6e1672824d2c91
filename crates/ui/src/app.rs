use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, use_explorer_provider};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_explorer_provider(ctx.settings());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Medical Imaging Explorer" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
