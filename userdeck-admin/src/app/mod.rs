use std::sync::Arc;

use iced::{Settings, Theme};

use crate::domains::ui::theme::DashboardTheme;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Launch the dashboard window with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);
    let boot_config = Arc::clone(&config);

    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Userdeck")
    .subscription(subscriptions::subscription)
    .font(lucide_icons::lucide_font_bytes())
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(1280.0, 800.0),
        min_size: Some(iced::Size::new(900.0, 560.0)),
        ..Default::default()
    })
    .run()
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("userdeck-admin".to_string());
    settings.antialiasing = true;
    settings
}

/// Theme for the current frame, following the dark mode toggle.
pub fn app_theme(state: &State) -> Theme {
    DashboardTheme::theme(state.domains.ui.state.dark_mode)
}
