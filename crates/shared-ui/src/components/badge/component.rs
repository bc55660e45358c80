use dioxus::prelude::*;

/// Pill-shaped status label.
///
/// `tone` is a lowercase, hyphenated key (e.g. `on-leave`) that selects the
/// colour scheme through the `status-{tone}` class.
#[component]
pub fn StatusBadge(tone: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "status-badge status-{tone}",
            "data-tone": "{tone}",
            {children}
        }
    }
}
