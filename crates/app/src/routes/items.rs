use dioxus::prelude::*;
use shared_ui::components::PageHeader;

use crate::routes::{item_name, Route, ITEMS};

#[component]
pub fn ItemList() -> Element {
    rsx! {
        PageHeader { title: "Items", back_href: Route::Home {}.to_string() }
        ul { class: "item-list",
            for (id, name) in ITEMS.iter().copied() {
                li { key: "{id}",
                    Link { to: Route::ItemEdit { id }, "Edit {name}" }
                }
            }
        }
    }
}

/// Edit page: title plus a back control to the item list.
#[component]
pub fn ItemEdit(id: u32) -> Element {
    let name = item_name(id).unwrap_or("Unknown item");

    rsx! {
        PageHeader { title: "Edit Item", back_href: Route::ItemList {}.to_string() }
        p { "Editing {name} (#{id})." }
    }
}
