use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronLeft;
use dioxus_free_icons::Icon;
use shared_types::HeaderLabels;

use crate::components::button::{ButtonLink, ButtonSize, ButtonVariant};

/// Provides [`HeaderLabels`] to every `PageHeader` below it.
///
/// The labels are captured on first render.
#[component]
pub fn HeaderLabelsProvider(labels: HeaderLabels, children: Element) -> Element {
    use_context_provider(|| labels.clone());

    rsx! {
        {children}
    }
}

/// Nearest provided [`HeaderLabels`], or the built-in defaults.
pub fn use_header_labels() -> HeaderLabels {
    try_use_context::<HeaderLabels>().unwrap_or_default()
}

/// Page header with an optional back control, a title, an optional
/// description and an optional trailing actions slot.
///
/// Zones without input (or with empty text) are not rendered at all.
/// `back_label` only matters when `back_href` is set; it becomes the control's screen-reader name and
/// defaults to the active [`HeaderLabels::back`].
#[component]
pub fn PageHeader(
    title: String,
    description: Option<String>,
    back_href: Option<String>,
    back_label: Option<String>,
    actions: Option<Element>,
    /// Extra classes appended to the header root.
    #[props(default)]
    class: String,
) -> Element {
    let labels = use_header_labels();

    if back_href.is_none() && back_label.is_some() {
        tracing::debug!(title = %title, "page header back_label ignored without back_href");
    }

    let back = back_href.filter(|h| !h.is_empty()).map(|href| {
        let label = labels.resolve_back(back_label.as_deref()).to_string();
        (href, label)
    });
    let description = description.filter(|d| !d.is_empty());
    let root_class = if class.is_empty() {
        "page-header".to_string()
    } else {
        format!("page-header {class}")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "{root_class}",
            div { class: "page-header-row",
                if let Some((href, label)) = back {
                    PageBackLink { href, label }
                }
                div { class: "page-header-text",
                    PageTitle { "{title}" }
                    if let Some(text) = description {
                        PageDescription { "{text}" }
                    }
                }
                if let Some(actions) = actions {
                    PageActions { {actions} }
                }
            }
        }
    }
}

/// Page title element rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Secondary text under the page title.
#[component]
pub fn PageDescription(children: Element) -> Element {
    rsx! {
        p { class: "page-description", {children} }
    }
}

/// Container for action buttons in the page header.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}

/// Icon-only ghost link back to `href`. `label` is exposed to assistive
/// technology only.
#[component]
pub fn PageBackLink(href: String, label: String) -> Element {
    rsx! {
        ButtonLink {
            href,
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            class: "page-back",
            Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
            span { class: "sr-only", "{label}" }
        }
    }
}
