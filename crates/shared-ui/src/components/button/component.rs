use dioxus::prelude::*;
use dioxus::router::RouterContext;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Box size for buttons. `Icon` is a square sized for a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    Icon,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Small => "sm",
            ButtonSize::Icon => "icon",
        }
    }
}

fn button_attributes(variant: ButtonVariant, size: ButtonSize) -> Vec<Attribute> {
    vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("data-size", size.class(), None, false),
    ]
}

/// A themed button component.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = button_attributes(props.variant, props.size);
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

/// A navigation link styled as a [`Button`].
///
/// Inside a `Router` a plain click is handled client-side; without one the
/// anchor's `href` performs a full navigation. Clicks with a modifier key
/// held are always left to the browser.
///
/// Router `Link` is not used here: it needs a mounted `Router`, and nesting a
/// `Button` inside it yields an `a > button` tree.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonLinkProps {
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    let router = try_consume_context::<RouterContext>();
    let base = button_attributes(props.variant, props.size);
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let target = props.href.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        a {
            href: "{props.href}",
            onclick: move |evt: MouseEvent| {
                let Some(router) = router.as_ref() else {
                    return;
                };
                if !evt.modifiers().is_empty() {
                    return;
                }
                evt.prevent_default();
                if router.push(target.clone()).is_some() {
                    tracing::warn!(href = %target, "router refused navigation");
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn button_carries_variant_and_size() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Ghost, size: ButtonSize::Icon, "Go" }
        });
        assert!(html.contains("<button"));
        assert!(html.contains(r#"data-style="ghost""#));
        assert!(html.contains(r#"data-size="icon""#));
        assert!(html.contains(">Go</button>"));
    }

    #[test]
    fn button_defaults_to_primary_default_size() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { "Save" }
        });
        assert!(html.contains(r#"data-style="primary""#));
        assert!(html.contains(r#"data-size="default""#));
    }

    #[test]
    fn button_link_renders_anchor_with_href() {
        let html = dioxus_ssr::render_element(rsx! {
            ButtonLink { href: "/items", variant: ButtonVariant::Outline, "Items" }
        });
        assert!(html.contains("<a"));
        assert!(html.contains(r#"href="/items""#));
        assert!(html.contains(r#"class="button""#));
        assert!(html.contains(r#"data-style="outline""#));
        assert_eq!(html.matches("Items").count(), 1);
    }
}
