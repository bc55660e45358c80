use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUser;
use dioxus_free_icons::Icon;

/// Round placeholder avatar showing a generic person glyph.
#[component]
pub fn AvatarGlyph(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "avatar", "aria-hidden": "true",
            Icon { icon: LdUser, width: size, height: size }
        }
    }
}
