use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Panel anchored to the left edge that slides in when `open`.
///
/// Always mounted so the CSS transition can run in both directions; the
/// backdrop only exists while open.
#[component]
pub fn SlidePanel(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let state = if open { "open" } else { "closed" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if open {
            div {
                class: "slide-panel-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
        aside {
            class: "slide-panel",
            "data-state": state,
            "aria-hidden": if open { "false" } else { "true" },
            div { class: "slide-panel-header",
                span { class: "slide-panel-title", "{title}" }
                button {
                    class: "slide-panel-close",
                    r#type: "button",
                    "aria-label": "Close menu",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: LdX, width: 20, height: 20 }
                }
            }
            div { class: "slide-panel-body", {children} }
        }
    }
}
