/// UI settings persisted in LocalStorage
use anyhow::Context;
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::stores::confirm_store::ConfirmSettings;
use crate::stores::notifications::{clamp_max_visible, clamp_timeout_secs, NotificationSettings};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub confirm: ConfirmSettings,
    pub notifications: NotificationSettings,
    pub version: u32, // Settings schema version
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            confirm: ConfirmSettings::default(),
            notifications: NotificationSettings::default(),
            version: SETTINGS_VERSION,
        }
    }
}

impl UiSettings {
    /// Blank labels and zero notification values fall back to the defaults;
    /// oversized notification values are capped
    pub fn normalized(mut self) -> Self {
        let defaults = UiSettings::default();
        if self.confirm.confirm_label.trim().is_empty() {
            self.confirm.confirm_label = defaults.confirm.confirm_label;
        }
        if self.confirm.cancel_label.trim().is_empty() {
            self.confirm.cancel_label = defaults.confirm.cancel_label;
        }
        if self.notifications.max_visible == 0 {
            self.notifications.max_visible = defaults.notifications.max_visible;
        }
        if self.notifications.timeout_secs == 0 {
            self.notifications.timeout_secs = defaults.notifications.timeout_secs;
        }
        self.notifications.timeout_secs = clamp_timeout_secs(self.notifications.timeout_secs);
        self.notifications.max_visible = clamp_max_visible(self.notifications.max_visible as u64);
        self.version = SETTINGS_VERSION;
        self
    }
}

const SETTINGS_VERSION: u32 = 1;

const STORAGE_KEY: &str = "atmo_ui_settings";

/// Global settings state
pub static SETTINGS: GlobalSignal<UiSettings> = Signal::global(UiSettings::default);

/// Load settings from LocalStorage, falling back to defaults
pub fn init_settings() {
    match LocalStorage::get::<UiSettings>(STORAGE_KEY) {
        Ok(settings) => {
            log::info!("Loaded UI settings (schema v{})", settings.version);
            *SETTINGS.write() = settings.normalized();
        }
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
            log::info!("No stored UI settings, using defaults");
        }
        Err(e) => {
            log::warn!("Ignoring unreadable UI settings: {}", e);
        }
    }
}

/// Replace the settings and persist them
pub fn save_settings(settings: UiSettings) -> anyhow::Result<()> {
    let settings = settings.normalized();
    LocalStorage::set(STORAGE_KEY, &settings).context("Failed to write UI settings")?;
    *SETTINGS.write() = settings;
    log::info!("UI settings saved");
    Ok(())
}

/// Restore defaults and drop the stored copy
pub fn reset_settings() {
    LocalStorage::delete(STORAGE_KEY);
    *SETTINGS.write() = UiSettings::default();
    log::info!("UI settings reset to defaults");
}
