use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutGrid, LdList, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::ViewMode;
use shared_ui::{IconButton, IconButtonVariant, StickyHeader};

#[component]
pub fn DashboardHeader(
    view_mode: ViewMode,
    on_toggle_menu: EventHandler<()>,
    on_toggle_view: EventHandler<()>,
) -> Element {
    // The toggle advertises the mode it switches to.
    let toggle_label = match view_mode.toggled() {
        ViewMode::Grid => "Switch to grid view",
        ViewMode::List => "Switch to list view",
    };

    rsx! {
        StickyHeader {
            title: "Employee Dashboard",
            leading: rsx! {
                IconButton {
                    label: "Open menu",
                    onclick: move |_| on_toggle_menu.call(()),
                    Icon { icon: LdMenu, width: 24, height: 24 }
                }
            },
            trailing: rsx! {
                IconButton {
                    label: toggle_label.to_string(),
                    variant: IconButtonVariant::Solid,
                    onclick: move |_| on_toggle_view.call(()),
                    match view_mode {
                        ViewMode::List => rsx! { Icon { icon: LdLayoutGrid, width: 20, height: 20 } },
                        ViewMode::Grid => rsx! { Icon { icon: LdList, width: 20, height: 20 } },
                    }
                }
            },
        }
    }
}
