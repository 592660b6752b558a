use iced::Element;
use iced::widget::{center, mouse_area, opaque, stack};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme;

/// Layer `content` over `base` behind a dimmed backdrop. Clicking the
/// backdrop emits `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, DomainMessage>>,
    content: impl Into<Element<'a, DomainMessage>>,
    on_blur: DomainMessage,
) -> Element<'a, DomainMessage> {
    stack![
        base.into(),
        opaque(
            mouse_area(
                center(opaque(content))
                    .style(theme::Container::ModalOverlay.style())
            )
            .on_press(on_blur)
        )
    ]
    .into()
}
