use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal address as delivered by the users API.
///
/// Only `city` is required; the remaining fields are carried when present
/// so a record survives a serialize/deserialize cycle unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

/// A user record exactly as returned by the remote directory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
}

/// Department an employee is assigned to during enrichment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    Design,
}

impl Department {
    /// Label pool used by enrichment, in display order.
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Design,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Design => "Design",
        }
    }
}

/// Job role an employee is assigned to during enrichment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    #[serde(rename = "Senior Developer")]
    SeniorDeveloper,
    Designer,
    Analyst,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Manager,
        Role::SeniorDeveloper,
        Role::Designer,
        Role::Analyst,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::SeniorDeveloper => "Senior Developer",
            Role::Designer => "Designer",
            Role::Analyst => "Analyst",
        }
    }
}

/// Availability status shown as a badge next to each employee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Remote,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::OnLeave, Status::Remote];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::OnLeave => "On Leave",
            Status::Remote => "Remote",
        }
    }

    /// Badge key for styling, e.g. "On Leave" → "on-leave".
    pub fn slug(&self) -> String {
        slugify(self.label())
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Department, Role, Status);

/// Lowercase a label and join its words with hyphens.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// A directory entry: the fetched user plus the synthetic categorical fields.
///
/// Every `Employee` carries all three categorical attributes; there is no
/// partially enriched state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub department: Department,
    pub role: Role,
    pub status: Status,
}

impl Employee {
    pub fn from_user(user: RawUser, department: Department, role: Role, status: Status) -> Self {
        let RawUser {
            id,
            name,
            email,
            phone,
            website,
            address,
        } = user;
        Self {
            id,
            name,
            email,
            phone,
            website,
            address,
            department,
            role,
            status,
        }
    }

    pub fn city(&self) -> &str {
        &self.address.city
    }
}

/// Which presenter the dashboard shows. Only ever flipped, never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Tabular presentation, one row per employee.
    #[default]
    List,
    /// Card grid, one card per employee.
    Grid,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }
}
