//! Confirmation modal state
//!
//! Owns the single confirmation prompt of the application. Requests are
//! presented through [`ConfirmController::present`], which hands back a
//! [`ConfirmTicket`] that resolves exactly once. The controller lives in a
//! `Signal` provided by the app root (see `hooks::use_confirm`), so there is
//! no ambient global modal.
//!
//! Every action coming from the UI carries the [`RequestToken`] of the prompt
//! it was rendered for. Actions for a prompt that has since been replaced or
//! closed are ignored, so a late click can never fire an old callback.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::utils::dom::FocusTarget;

/// Callback fired when the user picks an outcome
pub type OutcomeCallback = Box<dyn FnOnce() + 'static>;

/// Label used for the confirm button when neither the request nor the
/// settings provide one
pub const DEFAULT_CONFIRM_LABEL: &str = "Ok";

/// Label used for the cancel button
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// One confirmation prompt
///
/// Built with a small builder so call sites read like the prompt they show:
///
/// ```ignore
/// let request = ConfirmRequest::new("Reset settings?", "This cannot be undone.")
///     .confirm_label("Yes, reset")
///     .on_confirm(move || settings_store::reset());
/// ```
pub struct ConfirmRequest {
    pub header: String,
    pub body: String,
    pub confirm_label: Option<String>,
    on_confirm: Option<OutcomeCallback>,
    on_cancel: Option<OutcomeCallback>,
}

impl ConfirmRequest {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            confirm_label: None,
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn on_confirm(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("header", &self.header)
            .field("confirm_label", &self.confirm_label)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

/// Identifies one presentation of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "confirm#{}", self.0)
    }
}

/// How a prompt was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Confirm button or Enter
    Confirmed,
    /// Cancel button
    Cancelled,
    /// Close control, backdrop or Escape. Neither callback runs.
    Dismissed,
}

/// What happens when a prompt is presented while another one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentPolicy {
    /// The new prompt replaces the active one; its callbacks are discarded
    #[default]
    ReplaceActive,
    /// The new prompt is refused until the active one closes
    RejectWhileActive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmError {
    /// Another prompt is active and the policy refuses replacement
    Busy(RequestToken),
    /// The prompt was replaced before the user answered it
    Superseded,
}

impl fmt::Display for ConfirmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmError::Busy(token) => {
                write!(f, "A confirmation ({}) is already waiting for an answer", token)
            }
            ConfirmError::Superseded => {
                write!(f, "The confirmation was replaced before it was answered")
            }
        }
    }
}

impl std::error::Error for ConfirmError {}

/// Receiving end of one presentation
///
/// Resolves exactly once. Dropping the ticket is fine; the callbacks on the
/// request still run.
#[derive(Debug)]
pub struct ConfirmTicket {
    token: RequestToken,
    receiver: oneshot::Receiver<ConfirmOutcome>,
}

impl ConfirmTicket {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// Wait for the user's answer
    pub async fn outcome(self) -> Result<ConfirmOutcome, ConfirmError> {
        self.receiver.await.map_err(|_| ConfirmError::Superseded)
    }

    /// Non-blocking check; `Ok(None)` while the prompt is still open
    pub fn try_outcome(&mut self) -> Result<Option<ConfirmOutcome>, ConfirmError> {
        match self.receiver.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(oneshot::error::TryRecvError::Empty) => Ok(None),
            Err(oneshot::error::TryRecvError::Closed) => Err(ConfirmError::Superseded),
        }
    }
}

/// Render data for the active prompt
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub token: RequestToken,
    pub header: String,
    pub body: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

struct ActiveRequest {
    view: ModalView,
    on_confirm: Option<OutcomeCallback>,
    on_cancel: Option<OutcomeCallback>,
    responder: oneshot::Sender<ConfirmOutcome>,
}

/// A closed prompt whose callback has not run yet
///
/// Returned by the controller so the caller can release its borrow of the
/// controller before [`Resolution::run`] fires the callback. That is what
/// lets a callback present the next prompt.
#[must_use = "the outcome callback only fires when the resolution is run"]
pub struct Resolution {
    request: ActiveRequest,
    outcome: ConfirmOutcome,
}

impl Resolution {
    pub fn outcome(&self) -> ConfirmOutcome {
        self.outcome
    }

    pub fn run(self) {
        let ActiveRequest {
            view,
            on_confirm,
            on_cancel,
            responder,
        } = self.request;

        // Receiver may be gone; the callbacks are the primary contract.
        let _ = responder.send(self.outcome);

        let callback = match self.outcome {
            ConfirmOutcome::Confirmed => on_confirm,
            ConfirmOutcome::Cancelled => on_cancel,
            ConfirmOutcome::Dismissed => None,
        };

        log::debug!("{} closed: {:?}", view.token, self.outcome);

        if let Some(callback) = callback {
            callback();
        }
    }
}

/// Labels and policy the controller applies to every prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmSettings {
    pub confirm_label: String,
    pub cancel_label: String,
    pub policy: PresentPolicy,
}

impl Default for ConfirmSettings {
    fn default() -> Self {
        Self {
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            policy: PresentPolicy::default(),
        }
    }
}

/// Hidden / Active state machine behind the modal
pub struct ConfirmController {
    settings: ConfirmSettings,
    active: Option<ActiveRequest>,
    next_token: u64,
}

impl ConfirmController {
    pub fn new(settings: ConfirmSettings) -> Self {
        Self {
            settings,
            active: None,
            next_token: 1,
        }
    }

    /// Applies to prompts presented from now on
    pub fn set_settings(&mut self, settings: ConfirmSettings) {
        self.settings = settings;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_token(&self) -> Option<RequestToken> {
        self.active.as_ref().map(|active| active.view.token)
    }

    pub fn view(&self) -> Option<ModalView> {
        self.active.as_ref().map(|active| active.view.clone())
    }

    /// Show a prompt
    pub fn present(&mut self, request: ConfirmRequest) -> Result<ConfirmTicket, ConfirmError> {
        if let Some(active) = &self.active {
            match self.settings.policy {
                PresentPolicy::RejectWhileActive => {
                    log::warn!(
                        "Refusing confirmation '{}': {} still open",
                        request.header,
                        active.view.token
                    );
                    return Err(ConfirmError::Busy(active.view.token));
                }
                PresentPolicy::ReplaceActive => {
                    log::debug!("{} superseded by a new confirmation", active.view.token);
                }
            }
        }

        let token = RequestToken(self.next_token);
        self.next_token += 1;

        let (responder, receiver) = oneshot::channel();
        let ConfirmRequest {
            header,
            body,
            confirm_label,
            on_confirm,
            on_cancel,
        } = request;

        let view = ModalView {
            token,
            header,
            body,
            confirm_label: confirm_label.unwrap_or_else(|| self.settings.confirm_label.clone()),
            cancel_label: self.settings.cancel_label.clone(),
        };

        log::debug!("{} presented: {}", token, view.header);

        // Replacing drops the previous sender and callbacks uninvoked.
        self.active = Some(ActiveRequest {
            view,
            on_confirm,
            on_cancel,
            responder,
        });

        Ok(ConfirmTicket { token, receiver })
    }

    pub fn confirm(&mut self, token: RequestToken) -> Option<Resolution> {
        self.close(token, ConfirmOutcome::Confirmed)
    }

    pub fn cancel(&mut self, token: RequestToken) -> Option<Resolution> {
        self.close(token, ConfirmOutcome::Cancelled)
    }

    pub fn dismiss(&mut self, token: RequestToken) -> Option<Resolution> {
        self.close(token, ConfirmOutcome::Dismissed)
    }

    /// Keyboard shortcuts: Enter confirms unless a text-entry control has
    /// focus, Escape dismisses
    pub fn key_up(&mut self, token: RequestToken, key: &str, focus: FocusTarget) -> Option<Resolution> {
        match key {
            "Enter" if focus != FocusTarget::TextEntry => self.confirm(token),
            "Escape" => self.dismiss(token),
            _ => None,
        }
    }

    fn close(&mut self, token: RequestToken, outcome: ConfirmOutcome) -> Option<Resolution> {
        if self.active_token() != Some(token) {
            log::debug!("Ignoring {:?} for stale {}", outcome, token);
            return None;
        }

        self.active
            .take()
            .map(|request| Resolution { request, outcome })
    }
}

impl Default for ConfirmController {
    fn default() -> Self {
        Self::new(ConfirmSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Counts how many times each callback fired
    #[derive(Clone, Default)]
    struct Calls {
        confirmed: Rc<Cell<u32>>,
        cancelled: Rc<Cell<u32>>,
    }

    impl Calls {
        fn request(&self, header: &str) -> ConfirmRequest {
            let confirmed = self.confirmed.clone();
            let cancelled = self.cancelled.clone();
            ConfirmRequest::new(header, "body")
                .on_confirm(move || confirmed.set(confirmed.get() + 1))
                .on_cancel(move || cancelled.set(cancelled.get() + 1))
        }

        fn counts(&self) -> (u32, u32) {
            (self.confirmed.get(), self.cancelled.get())
        }
    }

    #[test]
    fn test_starts_hidden() {
        let controller = ConfirmController::default();
        assert!(!controller.is_active());
        assert_eq!(controller.view(), None);
    }

    #[test]
    fn test_confirm_fires_once() {
        let calls = Calls::default();
        let mut controller = ConfirmController::default();
        let mut ticket = controller.present(calls.request("Detach?")).unwrap();
        let token = ticket.token();

        let resolution = controller.confirm(token).unwrap();
        assert!(!controller.is_active());
        resolution.run();

        assert_eq!(calls.counts(), (1, 0));
        assert_eq!(ticket.try_outcome(), Ok(Some(ConfirmOutcome::Confirmed)));

        // A second click on the same prompt does nothing
        assert!(controller.confirm(token).is_none());
        assert!(controller.cancel(token).is_none());
        assert_eq!(calls.counts(), (1, 0));
    }

    #[test]
    fn test_cancel_fires_once() {
        let calls = Calls::default();
        let mut controller = ConfirmController::default();
        let mut ticket = controller.present(calls.request("Detach?")).unwrap();

        controller.cancel(ticket.token()).unwrap().run();

        assert_eq!(calls.counts(), (0, 1));
        assert_eq!(ticket.try_outcome(), Ok(Some(ConfirmOutcome::Cancelled)));
        assert!(controller.confirm(ticket.token()).is_none());
    }

    #[test]
    fn test_ticket_pending_until_answered() {
        let mut controller = ConfirmController::default();
        let mut ticket = controller.present(ConfirmRequest::new("H", "B")).unwrap();
        assert_eq!(ticket.try_outcome(), Ok(None));
    }

    #[test]
    fn test_enter_confirms_without_text_focus() {
        for focus in [FocusTarget::Nothing, FocusTarget::Other] {
            let calls = Calls::default();
            let mut controller = ConfirmController::default();
            let ticket = controller.present(calls.request("H")).unwrap();

            let resolution = controller.key_up(ticket.token(), "Enter", focus).unwrap();
            assert_eq!(resolution.outcome(), ConfirmOutcome::Confirmed);
            resolution.run();

            assert_eq!(calls.counts(), (1, 0));
            assert!(!controller.is_active());
        }
    }

    #[test]
    fn test_enter_ignored_while_typing() {
        let calls = Calls::default();
        let mut controller = ConfirmController::default();
        let ticket = controller.present(calls.request("H")).unwrap();

        assert!(controller
            .key_up(ticket.token(), "Enter", FocusTarget::TextEntry)
            .is_none());
        assert!(controller.is_active());
        assert_eq!(calls.counts(), (0, 0));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut controller = ConfirmController::default();
        let ticket = controller.present(ConfirmRequest::new("H", "B")).unwrap();
        assert!(controller.key_up(ticket.token(), "a", FocusTarget::Nothing).is_none());
        assert!(controller.key_up(ticket.token(), " ", FocusTarget::Other).is_none());
        assert!(controller.is_active());
    }

    #[test]
    fn test_escape_dismisses_even_while_typing() {
        let calls = Calls::default();
        let mut controller = ConfirmController::default();
        let mut ticket = controller.present(calls.request("H")).unwrap();

        controller
            .key_up(ticket.token(), "Escape", FocusTarget::TextEntry)
            .unwrap()
            .run();

        assert_eq!(calls.counts(), (0, 0));
        assert_eq!(ticket.try_outcome(), Ok(Some(ConfirmOutcome::Dismissed)));
    }

    #[test]
    fn test_default_label() {
        let mut controller = ConfirmController::default();
        controller.present(ConfirmRequest::new("H", "B")).unwrap();
        let view = controller.view().unwrap();
        assert_eq!(view.confirm_label, "Ok");
        assert_eq!(view.cancel_label, "Cancel");
        assert_eq!(view.header, "H");
        assert_eq!(view.body, "B");
    }

    #[test]
    fn test_custom_label() {
        let mut controller = ConfirmController::default();
        controller
            .present(ConfirmRequest::new("H", "B").confirm_label("Yes, detach"))
            .unwrap();
        assert_eq!(controller.view().unwrap().confirm_label, "Yes, detach");
    }

    #[test]
    fn test_settings_label_used_as_default() {
        let mut controller = ConfirmController::new(ConfirmSettings {
            confirm_label: "Continue".to_string(),
            ..ConfirmSettings::default()
        });
        controller.present(ConfirmRequest::new("H", "B")).unwrap();
        assert_eq!(controller.view().unwrap().confirm_label, "Continue");
    }

    #[test]
    fn test_replacement_discards_previous() {
        let first = Calls::default();
        let second = Calls::default();
        let mut controller = ConfirmController::default();

        let mut ticket_a = controller.present(first.request("A")).unwrap();
        let ticket_b = controller.present(second.request("B")).unwrap();
        assert_ne!(ticket_a.token(), ticket_b.token());
        assert_eq!(controller.view().unwrap().header, "B");

        // Late click rendered for A is ignored
        assert!(controller.confirm(ticket_a.token()).is_none());
        assert!(controller.is_active());

        controller.confirm(ticket_b.token()).unwrap().run();

        assert_eq!(first.counts(), (0, 0));
        assert_eq!(second.counts(), (1, 0));
        assert_eq!(ticket_a.try_outcome(), Err(ConfirmError::Superseded));
    }

    #[test]
    fn test_reject_policy_keeps_active() {
        let first = Calls::default();
        let second = Calls::default();
        let mut controller = ConfirmController::new(ConfirmSettings {
            policy: PresentPolicy::RejectWhileActive,
            ..ConfirmSettings::default()
        });

        let ticket_a = controller.present(first.request("A")).unwrap();
        let err = controller.present(second.request("B")).unwrap_err();
        assert_eq!(err, ConfirmError::Busy(ticket_a.token()));
        assert_eq!(controller.view().unwrap().header, "A");

        controller.cancel(ticket_a.token()).unwrap().run();
        assert_eq!(first.counts(), (0, 1));
        assert_eq!(second.counts(), (0, 0));

        // Free again once closed
        assert!(controller.present(second.request("B")).is_ok());
    }

    #[test]
    fn test_dismiss_runs_no_callback() {
        let calls = Calls::default();
        let mut controller = ConfirmController::default();
        let mut ticket = controller.present(calls.request("H")).unwrap();

        controller.dismiss(ticket.token()).unwrap().run();

        assert!(!controller.is_active());
        assert_eq!(calls.counts(), (0, 0));
        assert_eq!(ticket.try_outcome(), Ok(Some(ConfirmOutcome::Dismissed)));
    }

    #[test]
    fn test_missing_callbacks_are_noops() {
        let mut controller = ConfirmController::default();
        let ticket = controller.present(ConfirmRequest::new("H", "B")).unwrap();
        controller.confirm(ticket.token()).unwrap().run();

        let ticket = controller.present(ConfirmRequest::new("H", "B")).unwrap();
        controller.cancel(ticket.token()).unwrap().run();
        assert!(!controller.is_active());
    }

    #[test]
    fn test_callback_can_present_next_prompt() {
        let controller = Rc::new(RefCell::new(ConfirmController::default()));
        let follow_up = Calls::default();

        let inner = controller.clone();
        let follow_up_request = follow_up.request("Second");
        let ticket = controller
            .borrow_mut()
            .present(ConfirmRequest::new("First", "B").on_confirm(move || {
                // Overlay already cleared when the callback runs
                assert!(!inner.borrow().is_active());
                inner.borrow_mut().present(follow_up_request).unwrap();
            }))
            .unwrap();

        let resolution = controller.borrow_mut().confirm(ticket.token()).unwrap();
        resolution.run();

        let view = controller.borrow().view().unwrap();
        assert_eq!(view.header, "Second");
        assert_ne!(view.token, ticket.token());
        assert_eq!(follow_up.counts(), (0, 0));
    }

    #[test]
    fn test_tokens_increase() {
        let mut controller = ConfirmController::default();
        let a = controller.present(ConfirmRequest::new("A", "")).unwrap().token();
        let b = controller.present(ConfirmRequest::new("B", "")).unwrap().token();
        assert!(b > a);
        assert_eq!(a.to_string(), "confirm#1");
    }

    #[test]
    fn test_error_display() {
        let err = ConfirmError::Busy(RequestToken(3));
        assert!(err.to_string().contains("confirm#3"));
        assert!(ConfirmError::Superseded.to_string().contains("replaced"));
    }
}
