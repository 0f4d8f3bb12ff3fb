use dioxus::prelude::*;

use crate::hooks::use_confirm::ConfirmHandle;
use crate::stores::confirm_store::RequestToken;
use crate::utils::dom::current_focus;

/// A `keyup` listener registered on `window`
///
/// Unregisters itself when dropped. No Closure::forget(); the closure is
/// owned here for explicit cleanup.
pub struct WindowKeyListener {
    #[cfg(target_family = "wasm")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl WindowKeyListener {
    #[cfg(target_family = "wasm")]
    pub fn install(handler: impl FnMut(web_sys::KeyboardEvent) + 'static) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        if let Err(e) = window.add_event_listener_with_callback("keyup", callback.as_ref().unchecked_ref()) {
            log::warn!("Failed to register keyup listener: {:?}", e);
            return None;
        }

        Some(Self { callback })
    }

    /// No window outside the browser
    #[cfg(not(target_family = "wasm"))]
    pub fn install(_handler: impl FnMut(web_sys::KeyboardEvent) + 'static) -> Option<Self> {
        None
    }
}

#[cfg(target_family = "wasm")]
impl Drop for WindowKeyListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            window
                .remove_event_listener_with_callback("keyup", self.callback.as_ref().unchecked_ref())
                .ok();
        }
    }
}

/// Keep exactly one window keyboard listener alive while a prompt is open
///
/// Enter confirms (unless the user is typing), Escape dismisses. The
/// listener is bound to the token of the prompt it was installed for, so it
/// cannot act on a later prompt.
pub fn use_confirm_keyboard(confirm: ConfirmHandle) {
    let mut listener = use_signal(|| None::<(RequestToken, WindowKeyListener)>);

    use_effect(move || {
        let active = confirm.controller().read().active_token();
        let installed = listener.peek().as_ref().map(|(token, _)| *token);

        if installed == active {
            return;
        }

        // Unregisters the previous listener
        listener.set(None);

        let Some(token) = active else {
            return;
        };

        let handler = move |event: web_sys::KeyboardEvent| {
            let mut controller = confirm.controller();
            let resolution = controller
                .write()
                .key_up(token, &event.key(), current_focus());

            if let Some(resolution) = resolution {
                event.prevent_default();
                resolution.run();
            }
        };

        if let Some(installed) = WindowKeyListener::install(handler) {
            log::debug!("Keyboard shortcuts active for {}", token);
            listener.set(Some((token, installed)));
        }
    });

    use_drop(move || {
        listener.set(None);
    });
}
