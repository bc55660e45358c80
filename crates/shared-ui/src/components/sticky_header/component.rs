use dioxus::prelude::*;

/// Page header pinned to the top of the viewport.
///
/// `leading` sits left of the title (typically a menu button); `trailing`
/// is pushed to the right edge.
#[component]
pub fn StickyHeader(
    title: String,
    leading: Option<Element>,
    trailing: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "sticky-header",
            div { class: "sticky-header-content",
                div { class: "sticky-header-left",
                    {leading}
                    h1 { class: "sticky-header-title", "{title}" }
                }
                div { class: "sticky-header-right", {trailing} }
            }
        }
    }
}
