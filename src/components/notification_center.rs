use chrono::Utc;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::hooks::use_notifications::use_notifications;
use crate::stores::notifications::Notification;
use crate::utils::markup::sanitize_html;
use crate::utils::time::relative_time_from_now;

/// How often expired notifications are swept
const EXPIRY_TICK_MS: u32 = 1_000;

/// Stack of notifications in the bottom-right corner
#[component]
pub fn NotificationCenter() -> Element {
    let mut notifications = use_notifications();

    // Sweep non-sticky notifications once their timeout passes
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(EXPIRY_TICK_MS).await;
            if notifications.peek().is_empty() {
                continue;
            }
            let removed = notifications.write().expire(Utc::now());
            if removed > 0 {
                log::debug!("Expired {} notification(s)", removed);
            }
        }
    });

    let items = notifications.read().items().to_vec();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-40 flex flex-col gap-2 w-80 max-w-[90vw]",
            role: "status",
            aria_live: "polite",

            for item in items {
                NotificationToast {
                    key: "{item.id}",
                    notification: item.clone(),
                    on_dismiss: move |id: Uuid| {
                        notifications.write().dismiss(id);
                    },
                }
            }
        }
    }
}

#[component]
fn NotificationToast(notification: Notification, on_dismiss: EventHandler<Uuid>) -> Element {
    let id = notification.id;
    let header_html = sanitize_html(&notification.header);
    let body_html = sanitize_html(&notification.body);
    let age = relative_time_from_now(notification.timestamp);
    let border = if notification.sticky { "border-primary" } else { "border-border" };

    rsx! {
        div {
            class: "bg-card border {border} rounded-lg shadow-lg p-3",

            div {
                class: "flex items-start justify-between gap-2",
                div {
                    class: "font-semibold text-sm",
                    dangerous_inner_html: "{header_html}",
                }
                button {
                    class: "p-1 text-xs hover:bg-accent rounded",
                    "aria-label": "Dismiss notification",
                    onclick: move |_| on_dismiss.call(id),
                    "\u{2715}"
                }
            }

            if !body_html.is_empty() {
                div {
                    class: "text-sm text-muted-foreground mt-1",
                    dangerous_inner_html: "{body_html}",
                }
            }

            div {
                class: "text-xs text-muted-foreground mt-2",
                "{age}"
            }
        }
    }
}
