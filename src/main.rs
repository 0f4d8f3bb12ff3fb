#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::settings_store;

// Modules
mod components;
mod hooks;
mod routes;
mod stores;
mod utils;

use components::{ConfirmModal, NotificationCenter};
use hooks::{use_confirm_provider, use_notifications_provider};
use stores::confirm_store::ConfirmController;
use stores::notifications::NotificationStore;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    log::info!("Starting Atmosphere web client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Settings first: the stores below are built from them
    use_hook(settings_store::init_settings);

    let confirm = use_confirm_provider(|| {
        ConfirmController::new(settings_store::SETTINGS.peek().confirm.clone())
    });
    let mut notifications = use_notifications_provider(|| {
        NotificationStore::new(settings_store::SETTINGS.peek().notifications.clone())
    });

    // Push saved settings into the live stores
    use_effect(move || {
        let settings = settings_store::SETTINGS.read().clone();
        let mut controller = confirm.controller();
        controller.write().set_settings(settings.confirm);
        notifications.write().set_settings(settings.notifications);
    });

    rsx! {
        Router::<routes::Route> {}
        ConfirmModal {}
        NotificationCenter {}
    }
}
