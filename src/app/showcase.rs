// SPDX-License-Identifier: MPL-2.0
//! Buttons exercising every alert variant and confirmation queueing.

use crate::dialogs::{self, AlertOptions, ConfirmOptions, Deferred, Variant};
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Auto-dismiss delay of the variant samples.
pub const SAMPLE_DURATION_MS: u64 = 2500;

/// Number of confirmations queued by one burst.
pub const BURST_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Variant(Variant),
    Sticky,
    Burst,
}

pub fn sample(variant: Variant) -> Result<Deferred<()>> {
    dialogs::current()?.alert(
        AlertOptions::new(format!("This is a {variant} alert."))
            .with_title(variant.as_str())
            .with_variant(variant)
            .with_duration_ms(SAMPLE_DURATION_MS),
    )
}

/// An alert that stays until acknowledged.
pub fn sticky() -> Result<Deferred<()>> {
    dialogs::current()?.alert(
        AlertOptions::new("This alert stays until you acknowledge it.")
            .with_title("Heads up")
            .with_variant(Variant::Yellow)
            .with_dismissible(false)
            .with_duration_ms(0),
    )
}

/// Queues [`BURST_SIZE`] confirmations at once; they open one after another.
pub fn burst() -> Result<Vec<Deferred<bool>>> {
    let dialogs = dialogs::current()?;
    (1..=BURST_SIZE)
        .map(|n| {
            dialogs.confirm(
                ConfirmOptions::new(format!("Question {n} of {BURST_SIZE}. Proceed?"))
                    .with_title(format!("Step {n}"))
                    .with_variant(Variant::Purple)
                    .with_confirm_text("Yes")
                    .with_cancel_text("No"),
            )
        })
        .collect()
}

pub fn view<'a>() -> Element<'a, Message> {
    let variants = Variant::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &variant| {
            row.push(
                button(Text::new(variant.as_str()).size(typography::BODY_SM))
                    .on_press(Message::Variant(variant))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::accent(variant)),
            )
        },
    );

    let extras = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new("Sticky alert").size(typography::BODY_SM))
                .on_press(Message::Sticky)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new("Confirm burst").size(typography::BODY_SM))
                .on_press(Message::Burst)
                .style(styles::button::secondary),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Showcase").size(typography::TITLE_SM))
            .push(variants.wrap())
            .push(extras),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
