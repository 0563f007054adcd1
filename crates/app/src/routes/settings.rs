use dioxus::prelude::*;
use shared_ui::components::PageHeader;

#[component]
pub fn Settings() -> Element {
    rsx! {
        PageHeader { title: "Settings" }
    }
}
