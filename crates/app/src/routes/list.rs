use dioxus::prelude::*;
use shared_ui::components::{Button, PageHeader};

use crate::routes::{item_name, Route, ITEMS};

#[component]
pub fn ListIndex() -> Element {
    rsx! {
        PageHeader { title: "List", description: "Pick an item to see its details." }
        ul { class: "item-list",
            for (id, name) in ITEMS.iter().copied() {
                li { key: "{id}",
                    Link { to: Route::ListDetail { id }, "{name}" }
                }
            }
        }
    }
}

/// Detail page exercising every header zone.
#[component]
pub fn ListDetail(id: u32) -> Element {
    let name = item_name(id).unwrap_or("Unknown item");
    let mut saved = use_signal(|| false);

    rsx! {
        PageHeader {
            title: "Item",
            description: "Details",
            back_href: Route::ListIndex {}.to_string(),
            back_label: "Back to list",
            actions: rsx! {
                Button {
                    onclick: move |_| {
                        tracing::info!(id, "item saved");
                        saved.set(true);
                    },
                    "Save"
                }
            },
        }
        p { "{name} (#{id})" }
        if saved() {
            p { class: "page-description", "Saved." }
        }
    }
}
