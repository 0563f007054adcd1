use dioxus::prelude::*;
use shared_ui::components::PageHeader;

use crate::routes::Route;

/// Landing page listing the header scenarios.
#[component]
pub fn Home() -> Element {
    rsx! {
        PageHeader {
            title: "Page headers",
            description: "Back control, title, description and actions, each optional except the title.",
        }
        ul { class: "item-list",
            li {
                Link { to: Route::Settings {}, "Title only" }
            }
            li {
                Link { to: Route::ItemEdit { id: 1 }, "Title with back control" }
            }
            li {
                Link { to: Route::ListDetail { id: 1 }, "Every zone" }
            }
        }
    }
}
