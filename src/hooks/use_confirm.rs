use dioxus::prelude::*;

use crate::stores::confirm_store::{
    ConfirmController, ConfirmError, ConfirmRequest, ConfirmTicket, RequestToken,
};

/// Handle for asking the user to confirm something
///
/// Copyable, so it can be moved into any number of event handlers.
///
/// # Example
/// ```ignore
/// let confirm = use_confirm();
///
/// rsx! {
///     button {
///         onclick: move |_| {
///             confirm.present(
///                 ConfirmRequest::new("Clear notifications?", "")
///                     .on_confirm(move || notifications.write().clear()),
///             ).ok();
///         },
///         "Clear"
///     }
/// }
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct ConfirmHandle {
    controller: Signal<ConfirmController>,
}

impl ConfirmHandle {
    pub fn new(controller: Signal<ConfirmController>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> Signal<ConfirmController> {
        self.controller
    }

    /// Show a prompt; see [`ConfirmController::present`]
    pub fn present(&self, request: ConfirmRequest) -> Result<ConfirmTicket, ConfirmError> {
        let mut controller = self.controller;
        let result = controller.write().present(request);
        if let Err(e) = &result {
            log::warn!("Confirmation not shown: {}", e);
        }
        result
    }

    pub fn confirm(&self, token: RequestToken) {
        let mut controller = self.controller;
        // Guard is released before the callback runs
        let resolution = controller.write().confirm(token);
        if let Some(resolution) = resolution {
            resolution.run();
        }
    }

    pub fn cancel(&self, token: RequestToken) {
        let mut controller = self.controller;
        let resolution = controller.write().cancel(token);
        if let Some(resolution) = resolution {
            resolution.run();
        }
    }

    pub fn dismiss(&self, token: RequestToken) {
        let mut controller = self.controller;
        let resolution = controller.write().dismiss(token);
        if let Some(resolution) = resolution {
            resolution.run();
        }
    }
}

/// Create the app-wide controller; call once from the root component
pub fn use_confirm_provider(init: impl FnOnce() -> ConfirmController) -> ConfirmHandle {
    use_context_provider(move || ConfirmHandle::new(Signal::new(init())))
}

/// Get the confirmation handle provided by the root component
pub fn use_confirm() -> ConfirmHandle {
    use_context::<ConfirmHandle>()
}
