// SPDX-License-Identifier: MPL-2.0
//! Application root: a lead form wired to the dialog orchestrator.
//!
//! The `App` struct owns the [`Orchestrator`] and renders its projections as
//! layers over the form. `update` is the only place that talks to the
//! orchestrator's rendering-layer actions; form and showcase handlers run
//! inside [`Orchestrator::enter`] and reach the dialogs through
//! [`dialogs::current`](crate::dialogs::current).

pub mod form;
mod message;
pub mod showcase;

pub use message::{Flags, Message};

use crate::config::defaults::REFRESH_INTERVAL_MS;
use crate::dialogs::{AlertOptions, AlertView, ConfirmState, Orchestrator, Variant};
use crate::error::Result;
use crate::ui::confirm_modal;
use crate::ui::design_tokens::spacing;
use crate::ui::toast::{self, AlertStackView};
use form::LeadForm;
use iced::widget::{center, Column, Stack};
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    orchestrator: Orchestrator,
    form: LeadForm,
    /// Alerts as of `seen_revision`.
    alerts: Vec<AlertView>,
    /// Confirmation dialog as of `seen_revision`.
    confirm: ConfirmState,
    seen_revision: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.form)
            .field("alerts", &self.alerts.len())
            .field("confirm_open", &self.confirm.open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let orchestrator = Orchestrator::new(flags.defaults, flags.runtime);
        let mut app = Self {
            confirm: orchestrator.confirm_state(),
            orchestrator,
            form: LeadForm::default(),
            alerts: Vec::new(),
            seen_revision: 0,
        };

        if let Some(warning) = flags.config_warning {
            let _closed = app.call(|| {
                crate::dialogs::current()?.alert(
                    AlertOptions::new(warning)
                        .with_title("Settings not loaded")
                        .with_variant(Variant::Yellow)
                        .with_duration_ms(5000),
                )
            });
        }
        app.refresh();

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.alerts.len() {
            0 => "Lead Dialogs".to_string(),
            n => format!("Lead Dialogs ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.orchestrator.has_activity() {
            time::every(Duration::from_millis(REFRESH_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Runs a call site inside the orchestrator scope, logging failures.
    fn call<R>(&self, site: impl FnOnce() -> Result<R>) -> Option<R> {
        match self.orchestrator.enter(site).and_then(|result| result) {
            Ok(value) => Some(value),
            Err(err) if err.is_usage_error() => {
                tracing::error!(error = %err, "dialog call site is not wired to the orchestrator");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "dialog call failed");
                None
            }
        }
    }

    /// Re-reads the projections if the orchestrator changed since last time.
    fn refresh(&mut self) {
        let revision = self.orchestrator.revision();
        if revision != self.seen_revision {
            self.alerts = self.orchestrator.alerts();
            self.confirm = self.orchestrator.confirm_state();
            self.seen_revision = revision;
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Form(message) => self.handle_form(message),
            Message::Showcase(message) => self.handle_showcase(message),
            Message::Toast(toast::Message::Dismiss(id)) => {
                self.orchestrator.dismiss_alert(id);
                Task::none()
            }
            Message::Toast(toast::Message::Acknowledge(id)) => {
                self.orchestrator.acknowledge_alert(id);
                Task::none()
            }
            Message::Confirm(confirm_modal::Message::Confirm) => {
                self.orchestrator.resolve_confirm(true);
                Task::none()
            }
            Message::Confirm(confirm_modal::Message::Cancel) => {
                self.orchestrator.resolve_confirm(false);
                Task::none()
            }
            Message::Confirm(confirm_modal::Message::Backdrop) => {
                self.orchestrator.dismiss_confirm_backdrop();
                Task::none()
            }
            Message::ResetAnswered(Ok(true)) => {
                self.form.clear();
                let _closed = self.call(form::announce_reset);
                Task::none()
            }
            Message::ResetAnswered(Ok(false)) => {
                tracing::debug!("form reset cancelled");
                Task::none()
            }
            Message::BurstAnswered {
                step,
                answer: Ok(answer),
            } => {
                tracing::debug!(step, answer, "burst confirmation answered");
                Task::none()
            }
            Message::ResetAnswered(Err(err))
            | Message::BurstAnswered { answer: Err(err), .. }
            | Message::AlertClosed(Err(err)) => {
                tracing::warn!(error = %err, "dialog abandoned");
                Task::none()
            }
            Message::AlertClosed(Ok(())) => Task::none(),
            Message::Tick(_) => Task::none(),
        };

        self.refresh();
        task
    }

    fn handle_form(&mut self, message: form::Message) -> Task<Message> {
        match message {
            form::Message::LastNameChanged(value) => {
                self.form.last_name = value;
                Task::none()
            }
            form::Message::PhoneChanged(value) => {
                self.form.phone = value;
                Task::none()
            }
            form::Message::Submit => {
                let form = &self.form;
                let _accepted = self.call(|| form.submit());
                Task::none()
            }
            form::Message::Reset => match self.call(form::request_reset) {
                Some(answer) => Task::perform(answer, Message::ResetAnswered),
                None => Task::none(),
            },
        }
    }

    fn handle_showcase(&mut self, message: showcase::Message) -> Task<Message> {
        match message {
            showcase::Message::Variant(variant) => self
                .call(|| showcase::sample(variant))
                .map_or_else(Task::none, |closed| Task::perform(closed, Message::AlertClosed)),
            showcase::Message::Sticky => self
                .call(showcase::sticky)
                .map_or_else(Task::none, |closed| Task::perform(closed, Message::AlertClosed)),
            showcase::Message::Burst => match self.call(showcase::burst) {
                Some(answers) => Task::batch(answers.into_iter().enumerate().map(|(index, answer)| {
                    Task::perform(answer, move |answer| Message::BurstAnswered {
                        step: index + 1,
                        answer,
                    })
                })),
                None => Task::none(),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = center(
            Column::new()
                .spacing(spacing::LG)
                .push(form::view(&self.form).map(Message::Form))
                .push(showcase::view().map(Message::Showcase)),
        );

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content);
        if let Some(modal) = confirm_modal::view(&self.confirm) {
            layers = layers.push(modal.map(Message::Confirm));
        }
        layers
            .push(AlertStackView::view_overlay(&self.alerts).map(Message::Toast))
            .into()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.orchestrator.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::{ConfirmPhase, DialogDefaults};
    use crate::error::Error;

    fn app() -> App {
        let flags = Flags {
            defaults: DialogDefaults::default(),
            runtime: tokio::runtime::Handle::current(),
            config_warning: None,
        };
        App::new(flags).0
    }

    #[tokio::test]
    async fn submitting_empty_form_shows_missing_fields_alert() {
        let mut app = app();

        let _ = app.update(Message::Form(form::Message::Submit));

        assert_eq!(app.alerts.len(), 1);
        assert_eq!(app.alerts[0].title.as_deref(), Some("Missing Required Fields"));
        assert_eq!(app.title(), "Lead Dialogs (1)");
    }

    #[tokio::test]
    async fn toast_dismiss_removes_the_alert() {
        let mut app = app();
        let _ = app.update(Message::Form(form::Message::Submit));
        let id = app.alerts[0].id;

        let _ = app.update(Message::Toast(toast::Message::Dismiss(id)));

        assert!(app.alerts.is_empty());
    }

    #[tokio::test]
    async fn reset_opens_modal_and_confirming_clears_the_form() {
        let mut app = app();
        let _ = app.update(Message::Form(form::Message::LastNameChanged("Doe".into())));
        let _ = app.update(Message::Form(form::Message::Reset));
        assert!(app.confirm.open);

        let _ = app.update(Message::Confirm(confirm_modal::Message::Confirm));
        assert!(!app.confirm.open);
        assert_eq!(app.orchestrator.confirm_phase(), ConfirmPhase::Idle);

        // The deferred answer reaches update through Task::perform
        let _ = app.update(Message::ResetAnswered(Ok(true)));
        assert!(app.form.last_name.is_empty());
        assert_eq!(app.alerts[0].title.as_deref(), Some("Form Reseted"));
    }

    #[tokio::test]
    async fn backdrop_click_cancels_the_confirmation() {
        let mut app = app();
        let _ = app.update(Message::Form(form::Message::Reset));

        let _ = app.update(Message::Confirm(confirm_modal::Message::Backdrop));

        assert!(!app.confirm.open);
    }

    #[tokio::test]
    async fn failed_call_site_yields_nothing() {
        let app = app();

        assert_eq!(app.call(|| Ok(7)), Some(7));
        assert_eq!(app.call(|| Err::<u8, _>(Error::Abandoned)), None);
        // Nesting is a wiring defect and is refused
        assert_eq!(app.call(|| app.orchestrator.enter(|| ()).map(|_| 1)), None);
    }

    #[tokio::test]
    async fn config_warning_is_shown_as_alert() {
        let flags = Flags {
            defaults: DialogDefaults::default(),
            runtime: tokio::runtime::Handle::current(),
            config_warning: Some("Could not read settings.toml".to_string()),
        };
        let (app, _task) = App::new(flags);

        assert_eq!(app.alerts.len(), 1);
        assert_eq!(app.alerts[0].variant, Variant::Yellow);
    }
}
