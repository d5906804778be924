// SPDX-License-Identifier: MPL-2.0
//! Modal rendering of the open confirmation.

use crate::dialogs::ConfirmState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Confirm,
    Cancel,
    /// Click outside the dialog card.
    Backdrop,
}

/// Renders the modal layer, or nothing while no confirmation is open.
///
/// The returned element fills the window and blocks interaction with the
/// content below it. Backdrop clicks always emit [`Message::Backdrop`];
/// whether they close the dialog is decided by the confirmation itself.
pub fn view(state: &ConfirmState) -> Option<Element<'_, Message>> {
    if !state.open {
        return None;
    }

    let accent = state.variant.accent();

    let title = Text::new(state.title.as_str())
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });
    let message = Text::new(state.message.as_str()).size(typography::BODY);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(state.cancel_text.as_str()).size(typography::BODY))
                .on_press(Message::Cancel)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(state.confirm_text.as_str()).size(typography::BODY))
                .on_press(Message::Confirm)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent(state.variant)),
        );

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(message)
            .push(
                Container::new(actions)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            ),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::modal(accent));

    let backdrop = mouse_area(center(opaque(card)).style(styles::container::backdrop))
        .on_press(Message::Backdrop);

    Some(opaque(backdrop))
}
