use dioxus::prelude::*;

/// A titled block of icon + value lines, used in detail views.
#[component]
pub fn InfoSection(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "info-section",
            h3 { class: "info-section-title", "{title}" }
            div { class: "info-list", {children} }
        }
    }
}

/// One line inside an `InfoSection`. Put the glyph first, then the value.
#[component]
pub fn InfoItem(children: Element) -> Element {
    rsx! {
        div { class: "info-item", {children} }
    }
}

/// Two-column layout for side-by-side `InfoSection`s.
#[component]
pub fn InfoGrid(children: Element) -> Element {
    rsx! {
        div { class: "info-grid", {children} }
    }
}
