//! Lucide glyphs at the sizes the dashboard uses.

use iced::widget::{Row, row, text};
use iced::{Alignment, Font};
pub use lucide_icons::Icon;

/// Glyph sizes, one per place an icon appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    /// Edit and delete buttons inside table rows
    Row,
    /// Header, sidebar and filter bar
    #[default]
    Toolbar,
    /// Dashboard stat cards
    Stat,
}

impl IconSize {
    pub fn px(self) -> f32 {
        match self {
            IconSize::Row => 16.0,
            IconSize::Toolbar => 18.0,
            IconSize::Stat => 22.0,
        }
    }
}

/// The font registered from `lucide_icons::lucide_font_bytes` at startup.
pub fn lucide_font() -> Font {
    Font::with_name("lucide")
}

pub fn icon(glyph: Icon, size: IconSize) -> text::Text<'static> {
    text(glyph.unicode()).font(lucide_font()).size(size.px())
}

/// Toolbar glyph followed by a label, for header buttons and nav items.
pub fn labeled<'a, Message: 'a>(glyph: Icon, label: &'a str) -> Row<'a, Message> {
    row![icon(glyph, IconSize::Toolbar), text(label)]
        .spacing(6)
        .align_y(Alignment::Center)
}
