// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the alert stack.
//!
//! Alerts appear as small cards with variant-colored accents, stacked in the
//! top-right corner in the order they were raised. Dismissible alerts carry a
//! close button; the others carry an explicit "OK" acknowledgement.

use crate::dialogs::{AlertId, AlertView};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by toast cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button of a dismissible alert.
    Dismiss(AlertId),
    /// "OK" button of a non-dismissible alert.
    Acknowledge(AlertId),
}

/// Label of the acknowledgement button.
pub const ACKNOWLEDGE_LABEL: &str = "OK";
const CLOSE_GLYPH: &str = "\u{2715}";

/// Renders the visible alerts.
pub struct AlertStackView;

impl AlertStackView {
    /// Renders a single alert card.
    pub fn view(alert: &AlertView) -> Element<'_, Message> {
        let accent = alert.variant.accent();

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = &alert.title {
            body = body.push(
                Text::new(title.as_str())
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );
        }
        body = body.push(Text::new(alert.message.as_str()).size(typography::BODY));

        let action: Element<'_, Message> = match Self::action(alert) {
            Message::Dismiss(id) => button(Text::new(CLOSE_GLYPH).size(typography::BODY_SM))
                .on_press(Message::Dismiss(id))
                .padding(spacing::XXS)
                .style(styles::button::dismiss)
                .into(),
            Message::Acknowledge(id) => button(Text::new(ACKNOWLEDGE_LABEL).size(typography::BODY_SM))
                .on_press(Message::Acknowledge(id))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::accent(alert.variant))
                .into(),
        };

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(body).width(Length::Fill))
            .push(action);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(accent))
            .into()
    }

    /// Renders the overlay with all visible alerts, oldest on top.
    pub fn view_overlay(alerts: &[AlertView]) -> Element<'_, Message> {
        if alerts.is_empty() {
            // Takes no space so the underlying content stays interactive
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let cards = Column::with_children(alerts.iter().map(Self::view))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(cards)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }

    /// The button a card offers, as the message it would emit.
    #[must_use]
    pub fn action(alert: &AlertView) -> Message {
        if alert.dismissible {
            Message::Dismiss(alert.id)
        } else {
            Message::Acknowledge(alert.id)
        }
    }
}
