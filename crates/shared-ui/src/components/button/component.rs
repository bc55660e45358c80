use dioxus::prelude::*;

/// Visual weight of an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IconButtonVariant {
    /// Transparent background, used inside rows and cards.
    #[default]
    Ghost,
    /// Filled background, used in the page header.
    Solid,
}

impl IconButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            IconButtonVariant::Ghost => "ghost",
            IconButtonVariant::Solid => "solid",
        }
    }
}

/// A square button holding a single glyph.
///
/// `label` becomes the accessible name since the button has no visible text.
#[derive(Props, Clone, PartialEq)]
pub struct IconButtonProps {
    pub label: String,
    #[props(default)]
    pub variant: IconButtonVariant,
    pub onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "icon-button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let onclick = props.onclick;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            "aria-label": "{props.label}",
            title: "{props.label}",
            onclick: move |evt| onclick.call(evt),
            ..merged,
            {props.children}
        }
    }
}
