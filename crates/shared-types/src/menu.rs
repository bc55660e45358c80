/// One entry in the slide-out navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// A single link with no children.
    Leaf(&'static str),
    /// A labelled group of sub-entries, rendered collapsible.
    Group {
        label: &'static str,
        items: &'static [&'static str],
    },
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Leaf(label) => label,
            MenuEntry::Group { label, .. } => label,
        }
    }

    /// Sub-labels of a group; empty for a leaf.
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            MenuEntry::Leaf(_) => &[],
            MenuEntry::Group { items, .. } => items,
        }
    }
}

const STANDARD_ENTRIES: &[MenuEntry] = &[
    MenuEntry::Group {
        label: "Dashboard",
        items: &["Overview", "Analytics", "Reports"],
    },
    MenuEntry::Group {
        label: "Employees",
        items: &["Directory", "Performance", "Training"],
    },
    MenuEntry::Group {
        label: "Projects",
        items: &["Active", "Archived", "Templates"],
    },
    MenuEntry::Leaf("Settings"),
    MenuEntry::Leaf("Help"),
];

/// The static, session-wide menu structure. Never derived from fetched data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuModel {
    pub entries: &'static [MenuEntry],
}

impl MenuModel {
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES,
        }
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::standard()
    }
}
