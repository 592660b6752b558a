//! UI domain
//!
//! Shell chrome shared by every section: sidebar, theme and navigation.

pub mod messages;
pub mod theme;
pub mod update;
pub mod views;

use lucide_icons::Icon;

/// Top-level navigation entries in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    Dashboard,
    #[default]
    Users,
    Settings,
}

impl Section {
    pub const ALL: [Section; 3] =
        [Section::Dashboard, Section::Users, Section::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Section::Dashboard => Icon::House,
            Section::Users => Icon::Users,
            Section::Settings => Icon::Settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub dark_mode: bool,
    pub section: Section,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            dark_mode: false,
            section: Section::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct UiDomain {
    pub state: UiState,
}
