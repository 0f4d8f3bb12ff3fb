use dioxus::prelude::*;

use crate::hooks::{use_confirm, use_notifications};
use crate::stores::confirm_store::{ConfirmOutcome, ConfirmRequest, PresentPolicy};
use crate::stores::notifications::{
    clamp_max_visible, clamp_timeout_secs, NotificationSink, NotifyOptions,
};
use crate::stores::settings_store::{self, UiSettings};

#[component]
pub fn Settings() -> Element {
    let confirm = use_confirm();
    let mut notifications = use_notifications();

    // Form state starts from the stored settings; peek() avoids tracking
    let mut form = use_signal(|| settings_store::SETTINGS.peek().clone());

    let current = form.read().clone();
    let replace_checked = current.confirm.policy == PresentPolicy::ReplaceActive;

    let save = move |_: MouseEvent| {
        let settings = form.peek().clone();
        match settings_store::save_settings(settings) {
            Ok(()) => {
                notifications.notify("Settings saved", "", NotifyOptions::default());
            }
            Err(e) => {
                log::error!("{:#}", e);
                notifications.notify(
                    "Settings could not be saved",
                    "Your browser refused to store them. They apply until the page is reloaded.",
                    NotifyOptions::sticky(),
                );
            }
        }
    };

    let reset = move |_: MouseEvent| {
        let request = ConfirmRequest::new(
            "Reset UI settings?",
            "<p>Button labels, notification timing and the confirmation policy go back to their defaults.</p>",
        )
        .confirm_label("Yes, reset")
        .on_confirm(move || {
            settings_store::reset_settings();
            form.set(UiSettings::default());
            notifications.notify("Settings reset", "Defaults restored.", NotifyOptions::default());
        })
        .on_cancel(|| log::info!("Settings reset cancelled"));

        match confirm.present(request) {
            Ok(ticket) => {
                spawn(async move {
                    if let Ok(ConfirmOutcome::Dismissed) = ticket.outcome().await {
                        log::info!("Settings reset closed without an answer");
                    }
                });
            }
            Err(e) => {
                notifications.notify("Settings were not reset", &e.to_string(), NotifyOptions::default());
            }
        }
    };

    rsx! {
        div {
            class: "space-y-6",

            h1 {
                class: "text-2xl font-bold",
                "Settings"
            }

            // Confirmation dialogs
            section {
                class: "border border-border rounded-xl p-5 space-y-4",
                h2 {
                    class: "text-lg font-semibold",
                    "Confirmation dialogs"
                }

                TextSetting {
                    label: "Default confirm button",
                    value: current.confirm.confirm_label.clone(),
                    on_change: move |value: String| {
                        form.write().confirm.confirm_label = value;
                    }
                }

                TextSetting {
                    label: "Cancel button",
                    value: current.confirm.cancel_label.clone(),
                    on_change: move |value: String| {
                        form.write().confirm.cancel_label = value;
                    }
                }

                div {
                    class: "space-y-2 text-sm",
                    div {
                        class: "font-medium",
                        "When a new confirmation opens while one is showing"
                    }
                    label {
                        class: "flex items-center gap-2",
                        input {
                            r#type: "radio",
                            name: "confirm_policy",
                            value: "replace_active",
                            checked: replace_checked,
                            onchange: move |_| form.write().confirm.policy = PresentPolicy::ReplaceActive,
                        }
                        "Replace the open one"
                    }
                    label {
                        class: "flex items-center gap-2",
                        input {
                            r#type: "radio",
                            name: "confirm_policy",
                            value: "reject_while_active",
                            checked: !replace_checked,
                            onchange: move |_| form.write().confirm.policy = PresentPolicy::RejectWhileActive,
                        }
                        "Keep the open one and ignore the new one"
                    }
                }
            }

            // Notifications
            section {
                class: "border border-border rounded-xl p-5 space-y-4",
                h2 {
                    class: "text-lg font-semibold",
                    "Notifications"
                }

                NumberSetting {
                    label: "Seconds before a notification disappears",
                    value: current.notifications.timeout_secs,
                    on_change: move |value: u64| {
                        form.write().notifications.timeout_secs = clamp_timeout_secs(value);
                    }
                }

                NumberSetting {
                    label: "Notifications shown at once",
                    value: current.notifications.max_visible as u64,
                    on_change: move |value: u64| {
                        form.write().notifications.max_visible = clamp_max_visible(value);
                    }
                }
            }

            div {
                class: "flex gap-3 justify-end",
                button {
                    class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                    onclick: reset,
                    "Reset to defaults"
                }
                button {
                    class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                    onclick: save,
                    "Save"
                }
            }
        }
    }
}

#[component]
fn TextSetting(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        label {
            class: "flex items-center justify-between gap-4 text-sm",
            span { class: "font-medium", "{label}" }
            input {
                r#type: "text",
                class: "w-56 px-2 py-1 border border-border rounded bg-background",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}

#[component]
fn NumberSetting(label: &'static str, value: u64, on_change: EventHandler<u64>) -> Element {
    rsx! {
        label {
            class: "flex items-center justify-between gap-4 text-sm",
            span { class: "font-medium", "{label}" }
            input {
                r#type: "number",
                class: "w-24 px-2 py-1 border border-border rounded bg-background",
                min: "1",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().trim().parse::<u64>() {
                        on_change.call(parsed);
                    }
                }
            }
        }
    }
}
