use dioxus::prelude::*;

use crate::hooks::{use_confirm, use_notifications};
use crate::stores::confirm_store::ConfirmRequest;
use crate::stores::notifications::{NotificationSink, NotifyOptions};
use crate::utils::forecast::{weather_report, Forecast};
use crate::utils::markup::strip_tags;
use crate::utils::time::{parse_api_timestamp, relative_time_from_now};

#[component]
pub fn Home() -> Element {
    let confirm = use_confirm();
    let mut notifications = use_notifications();
    let mut occupancy = use_signal(|| 0i32);
    let mut sticky = use_signal(|| false);
    let mut reported_at = use_signal(String::new);
    let mut query = use_signal(String::new);

    let percent = *occupancy.read();
    let forecast = Forecast::from_occupancy(percent);
    let forecast_class = forecast.map(|f| f.as_str()).unwrap_or("unknown");
    let report = weather_report(percent).unwrap_or_else(|| "No forecast available.".to_string());
    let notification_count = notifications.read().len();

    // Occupancy reports carry the API's "YYYY-MM-DD HH:MM:SS.ffffff+00:00" stamps
    let freshness = {
        let raw = reported_at.read();
        if raw.trim().is_empty() {
            None
        } else {
            Some(match parse_api_timestamp(raw.trim()) {
                Some(at) => format!("Reported {}.", relative_time_from_now(at)),
                None => "Unrecognised report time.".to_string(),
            })
        }
    };

    let matches: Vec<String> = notifications
        .read()
        .search(&query.read())
        .into_iter()
        .map(|n| strip_tags(&n.header))
        .collect();

    rsx! {
        div {
            class: "space-y-6",

            // Weather report
            section {
                class: "border border-border rounded-xl p-5 weather-{forecast_class}",
                h2 {
                    class: "text-lg font-semibold mb-3",
                    "Cloud weather"
                }
                label {
                    class: "flex items-center gap-3 mb-3 text-sm",
                    "Occupancy (%)"
                    input {
                        r#type: "number",
                        class: "w-24 px-2 py-1 border border-border rounded bg-background",
                        min: "0",
                        max: "100",
                        value: "{percent}",
                        oninput: move |evt| {
                            match evt.value().trim().parse::<i32>() {
                                Ok(value) => occupancy.set(value),
                                Err(_) => occupancy.set(-1),
                            }
                        }
                    }
                }
                label {
                    class: "flex items-center gap-3 mb-3 text-sm",
                    "Reported at"
                    input {
                        r#type: "text",
                        class: "w-72 px-2 py-1 border border-border rounded bg-background",
                        placeholder: "2013-05-01 12:30:00.000000+00:00",
                        value: "{reported_at}",
                        oninput: move |evt| reported_at.set(evt.value()),
                    }
                }
                p {
                    id: "weather_report",
                    "{report}"
                }
                if let Some(freshness) = freshness {
                    p {
                        class: "text-sm text-muted-foreground",
                        "{freshness}"
                    }
                }
            }

            // Notifications
            section {
                class: "border border-border rounded-xl p-5",
                h2 {
                    class: "text-lg font-semibold mb-3",
                    "Notifications ({notification_count})"
                }
                div {
                    class: "flex flex-wrap items-center gap-3",

                    label {
                        class: "flex items-center gap-2 text-sm",
                        input {
                            r#type: "checkbox",
                            checked: *sticky.read(),
                            onchange: move |evt| sticky.set(evt.checked()),
                        }
                        "Keep until closed"
                    }

                    button {
                        class: "px-4 py-2 rounded-lg border border-border hover:bg-accent transition",
                        onclick: move |_| {
                            let options = NotifyOptions { no_timeout: *sticky.peek() };
                            notifications.notify(
                                "Weather report",
                                &weather_report(*occupancy.peek()).unwrap_or_default(),
                                options,
                            );
                        },
                        "Post weather report"
                    }

                    button {
                        class: "px-4 py-2 rounded-lg bg-destructive text-destructive-foreground hover:bg-destructive/90 transition disabled:opacity-50",
                        disabled: notification_count == 0,
                        onclick: move |_| {
                            let count = notifications.peek().len();
                            let request = ConfirmRequest::new(
                                "Clear all notifications?",
                                format!("<p>This removes <strong>{}</strong> notification(s), including ones kept until closed.</p>", count),
                            )
                            .confirm_label("Yes, clear them")
                            .on_confirm(move || {
                                notifications.write().clear();
                                log::info!("Cleared {} notification(s)", count);
                            })
                            .on_cancel(|| log::info!("Kept notifications"));

                            confirm.present(request).ok();
                        },
                        "Clear notifications"
                    }
                }

                input {
                    r#type: "search",
                    class: "mt-4 w-full px-2 py-1 border border-border rounded bg-background",
                    placeholder: "Find a notification",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                ul {
                    class: "mt-2 space-y-1 text-sm",
                    for (i, header) in matches.into_iter().enumerate() {
                        li {
                            key: "{i}",
                            "{header}"
                        }
                    }
                }
            }
        }
    }
}
