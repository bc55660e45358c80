use dioxus::prelude::*;
use shared_types::{Employee, MenuModel};
use shared_ui::LoadingIndicator;

use super::{DashboardHeader, EmployeeDetailModal, EmployeeView, NavigationMenu};
use crate::state::DashboardState;

/// The dashboard page: header, slide menu, active presenter and detail modal,
/// all driven by one state signal.
#[component]
pub fn DashboardLayout(state: Signal<DashboardState>, menu: MenuModel) -> Element {
    let snapshot = state.read().clone();
    let selected = if snapshot.modal_visible() {
        snapshot.selection().current().cloned()
    } else {
        None
    };

    rsx! {
        div { class: "dashboard", "data-view": snapshot.view_mode().as_str(),
            DashboardHeader {
                view_mode: snapshot.view_mode(),
                on_toggle_menu: move |_| toggle_menu(state),
                on_toggle_view: move |_| toggle_view(state),
            }
            NavigationMenu {
                open: snapshot.menu().is_open(),
                menu,
                on_close: move |_| close_menu(state),
            }
            main { class: "dashboard-container",
                if snapshot.is_loading() {
                    LoadingIndicator {}
                } else {
                    EmployeeView {
                        mode: snapshot.view_mode(),
                        employees: snapshot.employees().to_vec(),
                        on_select: move |employee| open_details(state, employee),
                    }
                }
            }
            if let Some(employee) = selected {
                EmployeeDetailModal {
                    employee,
                    on_close: move |_| close_details(state),
                }
            }
        }
    }
}

fn toggle_menu(mut state: Signal<DashboardState>) {
    state.write().toggle_menu();
}

fn close_menu(mut state: Signal<DashboardState>) {
    state.write().close_menu();
}

fn toggle_view(mut state: Signal<DashboardState>) {
    state.write().toggle_view();
}

fn open_details(mut state: Signal<DashboardState>, employee: Employee) {
    state.write().select(employee);
}

fn close_details(mut state: Signal<DashboardState>) {
    state.write().clear_selection();
}
