use super::Section;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    // Shell toggles
    ToggleSidebar,
    ToggleDarkMode,

    // Navigation
    SelectSection(Section),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleSidebar => "UI::ToggleSidebar",
            Self::ToggleDarkMode => "UI::ToggleDarkMode",
            Self::SelectSection(_) => "UI::SelectSection",
        }
    }
}
