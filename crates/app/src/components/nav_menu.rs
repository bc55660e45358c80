use dioxus::prelude::*;
use shared_types::MenuModel;
use shared_ui::SlidePanel;

/// Slide-out navigation. Purely presentational: entries carry no actions.
#[component]
pub fn NavigationMenu(open: bool, menu: MenuModel, on_close: EventHandler<()>) -> Element {
    rsx! {
        SlidePanel { open, title: "Menu", on_close,
            nav { class: "menu-navigation",
                for entry in menu.entries.iter() {
                    div { class: "menu-item-wrapper",
                        if entry.items().is_empty() {
                            div { class: "menu-item", {entry.label()} }
                        } else {
                            details { class: "menu-group", open: true,
                                summary { class: "menu-item-label", {entry.label()} }
                                div { class: "submenu-container",
                                    for item in entry.items().iter() {
                                        div { class: "submenu-item", "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
