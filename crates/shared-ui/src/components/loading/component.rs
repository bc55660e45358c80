use dioxus::prelude::*;

/// Centered, pulsing placeholder shown while data is in flight.
#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-container", role: "status", "aria-live": "polite",
            div { class: "loading-text", "{label}" }
        }
    }
}
