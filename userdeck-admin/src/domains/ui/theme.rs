use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container},
};

/// Light and dark palettes for the dashboard, sharing one indigo accent.
#[derive(Debug, Clone, Copy)]
pub struct DashboardTheme;

impl DashboardTheme {
    pub const ACCENT: Color = Color::from_rgb(0.31, 0.27, 0.90); // #4F46E5
    pub const SUCCESS: Color = Color::from_rgb(0.09, 0.64, 0.29); // #16A34A
    pub const DANGER: Color = Color::from_rgb(0.86, 0.15, 0.15); // #DC2626

    pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.97, 0.97, 0.98);
    pub const LIGHT_TEXT: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const DARK_BACKGROUND: Color = Color::from_rgb(0.07, 0.09, 0.15); // #111827
    pub const DARK_TEXT: Color = Color::from_rgb(0.95, 0.96, 0.97);

    pub fn theme(dark_mode: bool) -> Theme {
        if dark_mode {
            let mut palette = theme::Palette::DARK;
            palette.background = Self::DARK_BACKGROUND;
            palette.text = Self::DARK_TEXT;
            palette.primary = Self::ACCENT;
            palette.success = Self::SUCCESS;
            palette.danger = Self::DANGER;

            Theme::custom("Userdeck Dark", palette)
        } else {
            let mut palette = theme::Palette::LIGHT;
            palette.background = Self::LIGHT_BACKGROUND;
            palette.text = Self::LIGHT_TEXT;
            palette.primary = Self::ACCENT;
            palette.success = Self::SUCCESS;
            palette.danger = Self::DANGER;

            Theme::custom("Userdeck Light", palette)
        }
    }
}

// Container styles resolved against the active theme
#[derive(Debug, Clone, Copy)]
pub enum Container {
    Page,
    Sidebar,
    Header,
    Card,
    TableHeader,
    TableRow,
    TagAdmin,
    TagUser,
    TagActive,
    TagInactive,
    Modal,
    ModalOverlay,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(palette.background.base.text),
                    background: Some(Background::Color(
                        palette.background.base.color,
                    )),
                    ..Default::default()
                }
            },
            Container::Sidebar => |theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(palette.background.weak.text),
                    background: Some(Background::Color(
                        palette.background.weak.color,
                    )),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 0.0.into(),
                    },
                    ..Default::default()
                }
            },
            Container::Header => |theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(palette.background.base.text),
                    background: Some(Background::Color(
                        palette.background.base.color,
                    )),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 0.0.into(),
                    },
                    ..Default::default()
                }
            },
            Container::Card => |theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(palette.background.base.text),
                    background: Some(Background::Color(
                        palette.background.weak.color,
                    )),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }
            },
            Container::TableHeader => |theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(palette.background.strong.text),
                    background: Some(Background::Color(
                        palette.background.strong.color,
                    )),
                    ..Default::default()
                }
            },
            Container::TableRow => |theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(palette.background.base.text),
                    border: Border {
                        color: palette.background.weak.color,
                        width: 1.0,
                        radius: 0.0.into(),
                    },
                    ..Default::default()
                }
            },
            Container::TagAdmin => |theme| tag(theme.extended_palette().primary.weak),
            Container::TagUser => {
                |theme| tag(theme.extended_palette().secondary.weak)
            }
            Container::TagActive => |theme| tag(theme.extended_palette().success.weak),
            Container::TagInactive => {
                |theme| tag(theme.extended_palette().danger.weak)
            }
            Container::Modal => |theme| {
                let palette = theme.extended_palette();
                container::Style {
                    text_color: Some(palette.background.base.text),
                    background: Some(Background::Color(
                        palette.background.base.color,
                    )),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 12.0.into(),
                    },
                    shadow: Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                        offset: Vector::new(0.0, 4.0),
                        blur_radius: 20.0,
                    },
                    ..Default::default()
                }
            },
            Container::ModalOverlay => |_| container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    0.0, 0.0, 0.0, 0.5,
                ))),
                ..Default::default()
            },
        }
    }
}

fn tag(pair: theme::palette::Pair) -> container::Style {
    container::Style {
        text_color: Some(pair.text),
        background: Some(Background::Color(pair.color)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

// Button styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Secondary,
    Danger,
    Icon,
    NavItem,
    NavItemActive,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |theme, status| {
                let palette = theme.extended_palette();
                let pair = match status {
                    button::Status::Hovered => palette.primary.strong,
                    button::Status::Pressed => palette.primary.weak,
                    _ => palette.primary.base,
                };
                filled(pair, status)
            },
            Button::Danger => |theme, status| {
                let palette = theme.extended_palette();
                let pair = match status {
                    button::Status::Hovered => palette.danger.strong,
                    button::Status::Pressed => palette.danger.weak,
                    _ => palette.danger.base,
                };
                filled(pair, status)
            },
            Button::Secondary => |theme, status| {
                let palette = theme.extended_palette();
                let (background, border_color) = match status {
                    button::Status::Hovered => {
                        (palette.background.weak.color, palette.primary.base.color)
                    }
                    _ => (
                        palette.background.base.color,
                        palette.background.strong.color,
                    ),
                };

                button::Style {
                    text_color: palette.background.base.text,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }
            },
            Button::Icon => |theme, status| {
                let palette = theme.extended_palette();
                let (background, text_color) = match status {
                    button::Status::Hovered | button::Status::Pressed => (
                        Some(Background::Color(palette.background.weak.color)),
                        palette.primary.base.color,
                    ),
                    _ => (None, palette.background.base.text),
                };

                button::Style {
                    text_color,
                    background,
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }
            },
            Button::NavItem => |theme, status| {
                let palette = theme.extended_palette();
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Some(Background::Color(palette.background.strong.color))
                    }
                    _ => None,
                };

                button::Style {
                    text_color: palette.background.weak.text,
                    background,
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }
            },
            Button::NavItemActive => |theme, _| {
                let palette = theme.extended_palette();
                button::Style {
                    text_color: palette.primary.base.text,
                    background: Some(Background::Color(palette.primary.base.color)),
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }
            },
        }
    }
}

fn filled(pair: theme::palette::Pair, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => pair.color.scale_alpha(0.5),
        _ => pair.color,
    };

    button::Style {
        text_color: pair.text,
        background: Some(Background::Color(background)),
        border: Border {
            color: background,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
