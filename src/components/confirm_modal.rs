use dioxus::prelude::*;

use crate::hooks::use_confirm::use_confirm;
use crate::hooks::use_confirm_keyboard::use_confirm_keyboard;
use crate::utils::markup::sanitize_html;

/// App-wide confirmation modal
///
/// Mount once near the root. Renders nothing until a prompt is presented
/// through `use_confirm()`.
#[component]
pub fn ConfirmModal() -> Element {
    let confirm = use_confirm();
    use_confirm_keyboard(confirm);

    let Some(view) = confirm.controller().read().view() else {
        return rsx! {};
    };

    let token = view.token;
    let header_html = sanitize_html(&view.header);
    let body_html = sanitize_html(&view.body);

    rsx! {
        // Modal overlay - clicking outside dismisses without an answer
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| confirm.dismiss(token),

            // Modal content
            div {
                class: "bg-card border border-border rounded-xl max-w-md w-full shadow-xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "confirm-modal-header",
                aria_describedby: "confirm-modal-body",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    class: "px-6 pt-5 pb-3 border-b border-border flex items-start justify-between gap-4",
                    h2 {
                        class: "text-lg font-bold",
                        id: "confirm-modal-header",
                        dangerous_inner_html: "{header_html}",
                    }
                    button {
                        class: "p-1 hover:bg-accent rounded",
                        onclick: move |_| confirm.dismiss(token),
                        "aria-label": "Close dialog",
                        "\u{2715}"
                    }
                }

                // Body
                div {
                    class: "px-6 py-4 text-muted-foreground",
                    id: "confirm-modal-body",
                    dangerous_inner_html: "{body_html}",
                }

                // Buttons
                div {
                    class: "px-6 pb-5 flex gap-3 justify-end",

                    button {
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        onclick: move |e| {
                            e.prevent_default();
                            confirm.cancel(token);
                        },
                        "{view.cancel_label}"
                    }

                    button {
                        class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                        onclick: move |e| {
                            e.prevent_default();
                            confirm.confirm(token);
                        },
                        "{view.confirm_label}"
                    }
                }
            }
        }
    }
}
