pub mod home;
pub mod items;
pub mod list;
pub mod not_found;
pub mod settings;

use dioxus::prelude::*;

use home::Home;
use items::{ItemEdit, ItemList};
use list::{ListDetail, ListIndex};
use not_found::NotFound;
use settings::Settings;

/// Sample records shared by the item pages.
pub const ITEMS: &[(u32, &str)] = &[(1, "Widget"), (2, "Gadget"), (3, "Sprocket")];

pub fn item_name(id: u32) -> Option<&'static str> {
    ITEMS
        .iter()
        .find(|(item_id, _)| *item_id == id)
        .map(|(_, name)| *name)
}

/// Gallery routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GalleryLayout)]
        #[route("/")]
        Home {},
        #[route("/settings")]
        Settings {},
        #[route("/items")]
        ItemList {},
        #[route("/items/:id/edit")]
        ItemEdit { id: u32 },
        #[route("/list")]
        ListIndex {},
        #[route("/list/:id")]
        ListDetail { id: u32 },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Side navigation plus the active page.
#[component]
fn GalleryLayout() -> Element {
    rsx! {
        div { class: "gallery",
            nav { class: "gallery-nav",
                Link { to: Route::Home {}, active_class: "active", "Overview" }
                Link { to: Route::Settings {}, active_class: "active", "Settings" }
                Link { to: Route::ItemList {}, active_class: "active", "Items" }
                Link { to: Route::ListIndex {}, active_class: "active", "List" }
            }
            main { class: "container",
                Outlet::<Route> {}
            }
        }
    }
}
