mod detail_modal;
mod employee_views;
mod header;
mod layout;
mod nav_menu;
mod shell;

pub use detail_modal::EmployeeDetailModal;
pub use employee_views::EmployeeView;
pub use header::DashboardHeader;
pub use layout::DashboardLayout;
pub use nav_menu::NavigationMenu;
pub use shell::DashboardShell;
