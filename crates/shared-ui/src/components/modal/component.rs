use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Centered dialog over a dimmed backdrop.
///
/// The caller decides whether to mount it; `on_close` fires from the close
/// button or a click on the backdrop.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-container",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: LdX, width: 20, height: 20 }
                    }
                }
                div { class: "modal-content", {children} }
            }
        }
    }
}
