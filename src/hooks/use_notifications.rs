use dioxus::prelude::*;

use crate::stores::notifications::NotificationStore;

/// Create the app-wide notification store; call once from the root component
pub fn use_notifications_provider(
    init: impl FnOnce() -> NotificationStore,
) -> Signal<NotificationStore> {
    use_context_provider(move || Signal::new(init()))
}

/// Notification store provided by the root component
///
/// The returned signal implements `NotificationSink`:
/// ```ignore
/// let mut notifications = use_notifications();
/// notifications.notify("Saved", "", NotifyOptions::default());
/// ```
pub fn use_notifications() -> Signal<NotificationStore> {
    use_context::<Signal<NotificationStore>>()
}
