use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding, LdEllipsisVertical, LdMail, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::{Employee, ViewMode};
use shared_ui::{
    AvatarGlyph, Card, CardDetails, CardGrid, CardHeader, DataTable, DataTableCell, DataTableRow,
    IconButton, StatusBadge,
};

const TABLE_COLUMNS: [&str; 5] = ["Name", "Role", "Status", "Department", ""];

/// Picks the presenter for `mode`. Nothing else in the dashboard branches on it.
#[component]
pub fn EmployeeView(
    mode: ViewMode,
    employees: Vec<Employee>,
    on_select: EventHandler<Employee>,
) -> Element {
    match mode {
        ViewMode::List => rsx! { EmployeeTable { employees, on_select } },
        ViewMode::Grid => rsx! { EmployeeGrid { employees, on_select } },
    }
}

/// One table row per employee, in input order.
#[component]
pub fn EmployeeTable(employees: Vec<Employee>, on_select: EventHandler<Employee>) -> Element {
    let columns: Vec<String> = TABLE_COLUMNS.iter().map(|c| c.to_string()).collect();

    rsx! {
        div { class: "employee-table",
            DataTable { columns,
                for employee in employees {
                    EmployeeRow {
                        key: "{employee.id}",
                        employee: employee.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(employee: Employee, on_select: EventHandler<Employee>) -> Element {
    let label = format!("View details for {}", employee.name);
    let selected = employee.clone();

    rsx! {
        DataTableRow { row_id: employee.id.to_string(),
            DataTableCell {
                div { class: "employee-info",
                    AvatarGlyph {}
                    div { class: "employee-details",
                        div { class: "employee-name", "{employee.name}" }
                        div { class: "employee-email", "{employee.email}" }
                    }
                }
            }
            DataTableCell {
                div { class: "employee-role", "{employee.role}" }
            }
            DataTableCell {
                StatusBadge { tone: employee.status.slug(), "{employee.status}" }
            }
            DataTableCell {
                div { class: "employee-department", "{employee.department}" }
            }
            DataTableCell {
                IconButton {
                    label,
                    onclick: move |_| on_select.call(selected.clone()),
                    Icon { icon: LdEllipsisVertical, width: 20, height: 20 }
                }
            }
        }
    }
}

/// One card per employee, in input order.
#[component]
pub fn EmployeeGrid(employees: Vec<Employee>, on_select: EventHandler<Employee>) -> Element {
    rsx! {
        div { class: "employee-grid",
            CardGrid {
                for employee in employees {
                    EmployeeCard {
                        key: "{employee.id}",
                        employee: employee.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn EmployeeCard(employee: Employee, on_select: EventHandler<Employee>) -> Element {
    let label = format!("View details for {}", employee.name);
    let city = employee.city().to_string();
    let selected = employee.clone();

    rsx! {
        div { class: "employee-card", "data-employee-id": "{employee.id}",
            Card {
                CardHeader {
                    title: employee.name.clone(),
                    subtitle: employee.role.to_string(),
                    leading: rsx! { AvatarGlyph {} },
                    action: rsx! {
                        IconButton {
                            label,
                            onclick: move |_| on_select.call(selected.clone()),
                            Icon { icon: LdEllipsisVertical, width: 20, height: 20 }
                        }
                    },
                }
                CardDetails {
                    div { class: "detail-item",
                        Icon { icon: LdMail, width: 16, height: 16 }
                        span { class: "employee-email", "{employee.email}" }
                    }
                    div { class: "detail-item",
                        Icon { icon: LdBuilding, width: 16, height: 16 }
                        span { class: "employee-department", "{employee.department}" }
                    }
                    div { class: "detail-item",
                        Icon { icon: LdMapPin, width: 16, height: 16 }
                        span { class: "employee-city", "{city}" }
                    }
                }
            }
        }
    }
}
