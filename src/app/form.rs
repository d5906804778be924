// SPDX-License-Identifier: MPL-2.0
//! Lead capture form, the demo's dialog call site.
//!
//! The form never holds an orchestrator handle. Every dialog it raises goes
//! through [`dialogs::current`], so its handlers must run inside
//! [`Orchestrator::enter`](crate::dialogs::Orchestrator::enter).

use crate::dialogs::{self, AlertOptions, ConfirmOptions, Deferred, Variant};
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

pub const MISSING_FIELDS_DURATION_MS: u64 = 3000;
pub const SUBMITTED_DURATION_MS: u64 = 2000;
pub const RESET_DONE_DURATION_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LastNameChanged(String),
    PhoneChanged(String),
    Submit,
    Reset,
}

/// Required lead fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub last_name: String,
    pub phone: String,
}

impl LeadForm {
    /// Labels of required fields left blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.last_name.trim().is_empty() {
            missing.push("Last Name");
        }
        if self.phone.trim().is_empty() {
            missing.push("Phone");
        }
        missing
    }

    pub fn clear(&mut self) {
        self.last_name.clear();
        self.phone.clear();
    }

    /// Validates the form and reports the outcome as an alert.
    ///
    /// Returns whether the lead was accepted.
    pub fn submit(&self) -> Result<bool> {
        let dialogs = dialogs::current()?;
        let missing = self.missing_fields();

        if !missing.is_empty() {
            tracing::debug!(?missing, "lead rejected");
            let _closed = dialogs.alert(
                AlertOptions::new("Please fill in all required fields before submitting the form.")
                    .with_title("Missing Required Fields")
                    .with_variant(Variant::Red)
                    .with_duration_ms(MISSING_FIELDS_DURATION_MS),
            )?;
            return Ok(false);
        }

        tracing::info!(last_name = %self.last_name, "lead submitted");
        let _closed = dialogs.alert(
            AlertOptions::new("Lead submitted successfully.")
                .with_title("Success")
                .with_variant(Variant::Green)
                .with_duration_ms(SUBMITTED_DURATION_MS),
        )?;
        Ok(true)
    }
}

/// Asks before wiping the form. Resolves `true` if the user agreed.
pub fn request_reset() -> Result<Deferred<bool>> {
    dialogs::current()?.confirm(
        ConfirmOptions::new("all entries will be deleted")
            .with_title("Reset the Form ?")
            .with_variant(Variant::Red)
            .with_confirm_text("Reset")
            .with_cancel_text("Cancel"),
    )
}

/// Announces a completed reset.
pub fn announce_reset() -> Result<Deferred<()>> {
    dialogs::current()?.alert(
        AlertOptions::new("All entries have been set to default.")
            .with_title("Form Reseted")
            .with_variant(Variant::Green)
            .with_duration_ms(RESET_DONE_DURATION_MS),
    )
}

pub fn view(form: &LeadForm) -> Element<'_, Message> {
    let last_name = text_input("Last name", &form.last_name)
        .on_input(Message::LastNameChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);
    let phone = text_input("Phone", &form.phone)
        .on_input(Message::PhoneChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new("Reset"))
                .on_press(Message::Reset)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new("Submit"))
                .on_press(Message::Submit)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent(Variant::Green)),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("New Lead").size(typography::TITLE_MD))
        .push(labeled("Last Name *", last_name))
        .push(labeled("Phone *", phone))
        .push(actions);

    Container::new(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn labeled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::{DialogDefaults, Orchestrator};
    use crate::error::Error;

    fn filled() -> LeadForm {
        LeadForm {
            last_name: "Doe".to_string(),
            phone: "0600000000".to_string(),
        }
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        assert_eq!(LeadForm::default().missing_fields(), vec!["Last Name", "Phone"]);
        let form = LeadForm {
            phone: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.missing_fields(), vec!["Phone"]);
    }

    #[test]
    fn submit_outside_orchestrator_fails_loudly() {
        assert_eq!(filled().submit(), Err(Error::OutsideOrchestrator));
    }

    #[tokio::test]
    async fn incomplete_submit_raises_red_alert() {
        let orchestrator =
            Orchestrator::with_current_runtime(DialogDefaults::default()).expect("inside runtime");

        let accepted = orchestrator
            .enter(|| LeadForm::default().submit())
            .expect("not nested")
            .expect("live orchestrator");

        assert!(!accepted);
        let alerts = orchestrator.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title.as_deref(), Some("Missing Required Fields"));
        assert_eq!(alerts[0].variant, Variant::Red);
    }

    #[tokio::test]
    async fn complete_submit_raises_green_alert() {
        let orchestrator =
            Orchestrator::with_current_runtime(DialogDefaults::default()).expect("inside runtime");

        let accepted = orchestrator
            .enter(|| filled().submit())
            .expect("not nested")
            .expect("live orchestrator");

        assert!(accepted);
        assert_eq!(orchestrator.alerts()[0].variant, Variant::Green);
    }

    #[tokio::test]
    async fn reset_asks_with_reset_label() {
        let orchestrator =
            Orchestrator::with_current_runtime(DialogDefaults::default()).expect("inside runtime");

        let answer = orchestrator
            .enter(request_reset)
            .expect("not nested")
            .expect("live orchestrator");

        let state = orchestrator.confirm_state();
        assert!(state.open);
        assert_eq!(state.title, "Reset the Form ?");
        assert_eq!(state.confirm_text, "Reset");

        orchestrator.resolve_confirm(true);
        assert_eq!(answer.await, Ok(true));
    }
}
