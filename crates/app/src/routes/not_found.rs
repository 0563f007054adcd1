use dioxus::prelude::*;
use shared_ui::components::PageHeader;

use crate::routes::Route;

/// 404 page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Page Not Found",
                description: "Nothing lives at {path}.",
                back_href: Route::Home {}.to_string(),
                back_label: "Back to overview",
            }
        }
    }
}
