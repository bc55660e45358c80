use dioxus::prelude::*;

/// Responsive grid that lays out `Card`s in auto-filling columns.
#[component]
pub fn CardGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "card-grid", {children} }
    }
}

/// A raised surface for one record.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        article {
            ..merged,
            {children}
        }
    }
}

/// Top row of a card: leading media, a title/subtitle stack, and an action slot.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] subtitle: String,
    leading: Option<Element>,
    action: Option<Element>,
) -> Element {
    rsx! {
        div { class: "card-header",
            div { class: "card-profile",
                {leading}
                div { class: "card-heading",
                    div { class: "card-title", "{title}" }
                    if !subtitle.is_empty() {
                        div { class: "card-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "card-action", {action} }
        }
    }
}

/// Stacked detail lines beneath the card header.
#[component]
pub fn CardDetails(children: Element) -> Element {
    rsx! {
        div { class: "card-details", {children} }
    }
}
