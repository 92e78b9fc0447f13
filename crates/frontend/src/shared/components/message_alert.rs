//! Transient notification banner with auto-hide.
//!
//! The visibility logic is an explicit state machine (`Hidden`, `Showing`,
//! `CountingDown`) that owns no timer itself: each transition returns a
//! [`TimerCommand`] and the [`AlertService`] holds the single scheduled
//! callback handle, cancelling it on every transition out of
//! `CountingDown`. That keeps the machine pure and testable and rules out
//! orphaned timers hiding the wrong message.

use std::time::Duration;

use leptos::prelude::*;

/// Messages disappear after this long unless dismissed first.
pub const AUTO_HIDE_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertLevel {
    pub fn css_name(self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Error => "error",
            AlertLevel::Warning => "warning",
            AlertLevel::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AlertLevel::Success => "\u{2713}",
            AlertLevel::Error => "\u{2717}",
            AlertLevel::Warning => "\u{26A0}",
            AlertLevel::Info => "\u{2139}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertMessage {
    pub level: AlertLevel,
    pub text: String,
    pub title: Option<String>,
}

impl AlertMessage {
    pub fn new(level: AlertLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            title: None,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(AlertLevel::Warning, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(AlertLevel::Info, text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertPhase {
    Hidden,
    /// Visible, no auto-hide pending.
    Showing,
    /// Visible, a scheduled hide callback is outstanding.
    CountingDown,
}

/// What the owner of the timer handle must do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    Keep,
    Cancel,
    /// Cancel any outstanding timer and schedule a new one.
    Restart(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertMachine {
    phase: AlertPhase,
    message: Option<AlertMessage>,
    auto_hide_ms: Option<u32>,
}

impl AlertMachine {
    pub fn new(auto_hide_ms: Option<u32>) -> Self {
        Self {
            phase: AlertPhase::Hidden,
            message: None,
            auto_hide_ms,
        }
    }

    pub fn phase(&self) -> AlertPhase {
        self.phase
    }

    /// Currently visible message, if any.
    pub fn message(&self) -> Option<&AlertMessage> {
        match self.phase {
            AlertPhase::Hidden => None,
            AlertPhase::Showing | AlertPhase::CountingDown => self.message.as_ref(),
        }
    }

    /// Displays `message`, replacing whatever was shown before. Any
    /// running countdown restarts from zero.
    pub fn show(&mut self, message: AlertMessage) -> TimerCommand {
        self.message = Some(message);
        match self.auto_hide_ms {
            Some(ms) => {
                self.phase = AlertPhase::CountingDown;
                TimerCommand::Restart(ms)
            }
            None => {
                let command = if self.phase == AlertPhase::CountingDown {
                    TimerCommand::Cancel
                } else {
                    TimerCommand::Keep
                };
                self.phase = AlertPhase::Showing;
                command
            }
        }
    }

    /// Explicit close, from the user or the page.
    pub fn dismiss(&mut self) -> TimerCommand {
        let command = if self.phase == AlertPhase::CountingDown {
            TimerCommand::Cancel
        } else {
            TimerCommand::Keep
        };
        self.phase = AlertPhase::Hidden;
        self.message = None;
        command
    }

    /// The scheduled hide callback went off. Ignored unless a countdown
    /// is actually running, so a stale callback cannot hide a newer
    /// message whose transition already cancelled it.
    pub fn timer_fired(&mut self) {
        if self.phase == AlertPhase::CountingDown {
            self.phase = AlertPhase::Hidden;
            self.message = None;
        }
    }
}

/// Context-provided handle pages use to surface notifications.
#[derive(Clone, Copy)]
pub struct AlertService {
    machine: RwSignal<AlertMachine>,
    timer: StoredValue<Option<TimeoutHandle>>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(AlertMachine::new(Some(AUTO_HIDE_MS))),
            timer: StoredValue::new(None),
        }
    }

    pub fn show(&self, message: AlertMessage) {
        let command = self.machine.try_update(|m| m.show(message));
        self.run_timer_command(command.unwrap_or(TimerCommand::Keep));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(AlertMessage::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(AlertMessage::error(text));
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.show(AlertMessage::warning(text));
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(AlertMessage::info(text));
    }

    pub fn dismiss(&self) {
        let command = self.machine.try_update(|m| m.dismiss());
        self.run_timer_command(command.unwrap_or(TimerCommand::Keep));
    }

    /// Reactive view of the visible message.
    pub fn current(&self) -> Option<AlertMessage> {
        self.machine.with(|m| m.message().cloned())
    }

    fn run_timer_command(&self, command: TimerCommand) {
        match command {
            TimerCommand::Keep => {}
            TimerCommand::Cancel => self.cancel_timer(),
            TimerCommand::Restart(ms) => {
                self.cancel_timer();
                let service = *self;
                let scheduled = set_timeout_with_handle(
                    move || service.machine.update(|m| m.timer_fired()),
                    Duration::from_millis(u64::from(ms)),
                );
                match scheduled {
                    Ok(handle) => self.timer.set_value(Some(handle)),
                    Err(e) => log::warn!("failed to schedule alert auto-hide: {e:?}"),
                }
            }
        }
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.timer.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

/// Banner rendering the [`AlertService`] state. Mounted once in the shell.
#[component]
pub fn MessageAlert() -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not found in context");

    view! {
        {move || {
            alerts
                .current()
                .map(|message| {
                    let title = message
                        .title
                        .clone()
                        .map(|t| view! { <div class="alert-title">{t}</div> });
                    view! {
                        <div
                            class=format!("message-alert alert alert-{}", message.level.css_name())
                            role="alert"
                        >
                            <div class="alert-icon">
                                <span>{message.level.icon()}</span>
                            </div>
                            <div class="alert-content">
                                {title}
                                <div class="alert-text">{message.text.clone()}</div>
                            </div>
                            <button class="alert-close" on:click=move |_| alerts.dismiss()>
                                "\u{2715}"
                            </button>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_starts_a_countdown() {
        let mut machine = AlertMachine::new(Some(3000));
        let command = machine.show(AlertMessage::success("saved"));
        assert_eq!(command, TimerCommand::Restart(3000));
        assert_eq!(machine.phase(), AlertPhase::CountingDown);
        assert_eq!(machine.message().unwrap().text, "saved");
    }

    #[test]
    fn showing_again_restarts_the_countdown() {
        let mut machine = AlertMachine::new(Some(3000));
        machine.show(AlertMessage::success("first"));
        let command = machine.show(AlertMessage::error("second"));
        assert_eq!(command, TimerCommand::Restart(3000));
        assert_eq!(machine.message().unwrap().text, "second");
    }

    #[test]
    fn dismiss_cancels_a_running_countdown() {
        let mut machine = AlertMachine::new(Some(3000));
        machine.show(AlertMessage::info("hello"));
        let command = machine.dismiss();
        assert_eq!(command, TimerCommand::Cancel);
        assert_eq!(machine.phase(), AlertPhase::Hidden);
        assert!(machine.message().is_none());
    }

    #[test]
    fn dismiss_when_hidden_keeps_no_timer() {
        let mut machine = AlertMachine::new(Some(3000));
        assert_eq!(machine.dismiss(), TimerCommand::Keep);
    }

    #[test]
    fn timer_fire_hides_only_while_counting() {
        let mut machine = AlertMachine::new(Some(3000));
        machine.show(AlertMessage::info("hello"));
        machine.timer_fired();
        assert_eq!(machine.phase(), AlertPhase::Hidden);

        // A stale callback after dismiss must not resurrect anything.
        machine.show(AlertMessage::info("again"));
        machine.dismiss();
        machine.timer_fired();
        assert_eq!(machine.phase(), AlertPhase::Hidden);
        assert!(machine.message().is_none());
    }

    #[test]
    fn without_auto_hide_the_message_stays() {
        let mut machine = AlertMachine::new(None);
        let command = machine.show(AlertMessage::warning("check input"));
        assert_eq!(command, TimerCommand::Keep);
        assert_eq!(machine.phase(), AlertPhase::Showing);
        machine.timer_fired();
        assert_eq!(machine.phase(), AlertPhase::Showing);
    }
}
