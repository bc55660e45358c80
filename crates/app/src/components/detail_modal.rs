use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding, LdGlobe, LdMail, LdMapPin, LdPhone};
use dioxus_free_icons::Icon;
use shared_types::Employee;
use shared_ui::{AvatarGlyph, InfoGrid, InfoItem, InfoSection, Modal, StatusBadge};

/// Full record for the selected employee.
#[component]
pub fn EmployeeDetailModal(employee: Employee, on_close: EventHandler<()>) -> Element {
    let city = employee.city().to_string();

    rsx! {
        Modal { title: "Employee Details", on_close,
            div { class: "employee-profile",
                AvatarGlyph { size: 32 }
                div { class: "profile-info",
                    div { class: "profile-name", "{employee.name}" }
                    div { class: "profile-role", "{employee.role}" }
                }
            }
            InfoGrid {
                InfoSection { title: "Contact Information",
                    InfoItem {
                        Icon { icon: LdMail, width: 18, height: 18 }
                        span { "{employee.email}" }
                    }
                    InfoItem {
                        Icon { icon: LdPhone, width: 18, height: 18 }
                        span { "{employee.phone}" }
                    }
                    InfoItem {
                        Icon { icon: LdGlobe, width: 18, height: 18 }
                        span { "{employee.website}" }
                    }
                }
                InfoSection { title: "Employment Details",
                    InfoItem {
                        Icon { icon: LdBuilding, width: 18, height: 18 }
                        span { "{employee.department}" }
                    }
                    InfoItem {
                        Icon { icon: LdMapPin, width: 18, height: 18 }
                        span { "{city}" }
                    }
                    InfoItem {
                        StatusBadge { tone: employee.status.slug(), "{employee.status}" }
                    }
                }
            }
        }
    }
}
