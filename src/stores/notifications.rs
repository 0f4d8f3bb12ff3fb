//! User-facing notifications
//!
//! [`NotificationSink`] is what the rest of the app talks to; the
//! `NotificationCenter` component renders whatever the store holds.

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::markup::strip_tags;
use crate::utils::text::levenshtein_distance;

/// Options accepted by [`NotificationSink::notify`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyOptions {
    /// Keep the notification until the user closes it
    pub no_timeout: bool,
}

impl NotifyOptions {
    pub fn sticky() -> Self {
        Self { no_timeout: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub header: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub sticky: bool,
}

/// Anything that can surface a message to the user
pub trait NotificationSink {
    fn notify(&mut self, header: &str, body: &str, options: NotifyOptions) -> Uuid;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Seconds a non-sticky notification stays visible
    pub timeout_secs: u64,
    /// Oldest entries are dropped beyond this count
    pub max_visible: usize,
}

/// Longest timeout accepted from settings (one day)
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Most notifications kept on screen
pub const MAX_VISIBLE_LIMIT: usize = 50;

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            max_visible: 6,
        }
    }
}

/// Timeout from user input, kept within 1..=[`MAX_TIMEOUT_SECS`]
pub fn clamp_timeout_secs(value: u64) -> u64 {
    value.clamp(1, MAX_TIMEOUT_SECS)
}

/// Visible count from user input, kept within 1..=[`MAX_VISIBLE_LIMIT`]
pub fn clamp_max_visible(value: u64) -> usize {
    usize::try_from(value)
        .unwrap_or(usize::MAX)
        .clamp(1, MAX_VISIBLE_LIMIT)
}

/// Ordered notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    settings: NotificationSettings,
    items: Vec<Notification>,
}

impl NotificationStore {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings,
            items: Vec::new(),
        }
    }

    pub fn set_settings(&mut self, settings: NotificationSettings) {
        self.settings = settings;
        self.enforce_limit();
    }

    /// Out-of-range settings fall back to the default timeout
    pub fn timeout(&self) -> Duration {
        i64::try_from(self.settings.timeout_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| {
                Duration::seconds(NotificationSettings::default().timeout_secs as i64)
            })
    }

    /// Notifications whose header or body loosely matches `query`
    ///
    /// Each query word must appear in the text or be within a small edit
    /// distance of one of its words, so typos still find the entry.
    pub fn search(&self, query: &str) -> Vec<&Notification> {
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|item| {
                let text = format!("{} {}", strip_tags(&item.header), strip_tags(&item.body));
                words.iter().all(|word| fuzzy_contains(&text, word))
            })
            .collect()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a notification stamped with `timestamp`
    pub fn push_at(
        &mut self,
        header: &str,
        body: &str,
        options: NotifyOptions,
        timestamp: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notification {
            id,
            header: header.to_string(),
            body: body.to_string(),
            timestamp,
            sticky: options.no_timeout,
        });
        self.enforce_limit();
        id
    }

    /// Returns false if the id was unknown (already expired or dismissed)
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Drop non-sticky notifications older than the configured timeout.
    /// Returns how many were removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let timeout = self.timeout();
        let before = self.items.len();
        self.items
            .retain(|item| item.sticky || now - item.timestamp < timeout);
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn enforce_limit(&mut self) {
        let max = self.settings.max_visible.max(1);
        if self.items.len() > max {
            let excess = self.items.len() - max;
            self.items.drain(..excess);
        }
    }
}

/// `word` occurs in `text`, or some word of `text` is one or two edits away
fn fuzzy_contains(text: &str, word: &str) -> bool {
    let word = word.to_lowercase();
    if text.to_lowercase().contains(&word) {
        return true;
    }

    let tolerance = (word.chars().count() / 4).clamp(1, 2);
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|candidate| !candidate.is_empty())
        .any(|candidate| levenshtein_distance(candidate, &word) <= tolerance)
}

impl NotificationSink for NotificationStore {
    fn notify(&mut self, header: &str, body: &str, options: NotifyOptions) -> Uuid {
        log::info!("Notification: {}", strip_tags(header));
        self.push_at(header, body, options, Utc::now())
    }
}

/// Components hold the store behind a signal provided by the app root
impl NotificationSink for Signal<NotificationStore> {
    fn notify(&mut self, header: &str, body: &str, options: NotifyOptions) -> Uuid {
        self.write().notify(header, body, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_default_options_not_sticky() {
        let mut store = NotificationStore::default();
        store.notify("Volume Detached", "", NotifyOptions::default());
        assert_eq!(store.len(), 1);
        assert!(!store.items()[0].sticky);
    }

    #[test]
    fn test_no_timeout_is_sticky() {
        let mut store = NotificationStore::default();
        store.notify("Volume attachment failed.", "contact support", NotifyOptions::sticky());
        assert!(store.items()[0].sticky);
        assert_eq!(store.items()[0].body, "contact support");
    }

    #[test]
    fn test_expire_keeps_sticky_and_fresh() {
        let mut store = NotificationStore::new(NotificationSettings {
            timeout_secs: 5,
            max_visible: 10,
        });
        store.push_at("old", "", NotifyOptions::default(), t0());
        store.push_at("old sticky", "", NotifyOptions::sticky(), t0());
        store.push_at("fresh", "", NotifyOptions::default(), t0() + Duration::seconds(4));

        let removed = store.expire(t0() + Duration::seconds(6));
        assert_eq!(removed, 1);

        let headers: Vec<_> = store.items().iter().map(|n| n.header.as_str()).collect();
        assert_eq!(headers, vec!["old sticky", "fresh"]);
    }

    #[test]
    fn test_dismiss() {
        let mut store = NotificationStore::default();
        let id = store.push_at("a", "", NotifyOptions::sticky(), t0());
        store.push_at("b", "", NotifyOptions::default(), t0());

        assert!(store.dismiss(id));
        assert!(!store.dismiss(id));
        assert_eq!(store.items()[0].header, "b");
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut store = NotificationStore::new(NotificationSettings {
            timeout_secs: 5,
            max_visible: 2,
        });
        store.push_at("1", "", NotifyOptions::sticky(), t0());
        store.push_at("2", "", NotifyOptions::default(), t0());
        store.push_at("3", "", NotifyOptions::default(), t0());

        let headers: Vec<_> = store.items().iter().map(|n| n.header.as_str()).collect();
        assert_eq!(headers, vec!["2", "3"]);
    }

    #[test]
    fn test_huge_timeout_does_not_panic() {
        let mut store = NotificationStore::new(NotificationSettings {
            timeout_secs: 10_000_000_000_000_000,
            max_visible: 6,
        });
        store.notify("x", "", NotifyOptions::default());

        assert_eq!(store.timeout(), Duration::seconds(5));
        assert_eq!(store.expire(Utc::now()), 0);

        store.set_settings(NotificationSettings {
            timeout_secs: u64::MAX,
            max_visible: 6,
        });
        assert_eq!(store.timeout(), Duration::seconds(5));
        assert_eq!(store.expire(Utc::now() + Duration::seconds(10)), 1);
    }

    #[test]
    fn test_clamp_inputs() {
        assert_eq!(clamp_timeout_secs(0), 1);
        assert_eq!(clamp_timeout_secs(30), 30);
        assert_eq!(clamp_timeout_secs(u64::MAX), MAX_TIMEOUT_SECS);

        assert_eq!(clamp_max_visible(0), 1);
        assert_eq!(clamp_max_visible(8), 8);
        assert_eq!(clamp_max_visible(4_294_967_296), MAX_VISIBLE_LIMIT);
        assert_eq!(clamp_max_visible(u64::MAX), MAX_VISIBLE_LIMIT);
    }

    #[test]
    fn test_search_tolerates_typos() {
        let mut store = NotificationStore::default();
        store.push_at("Volume Detached", "Volume is now available", NotifyOptions::default(), t0());
        store.push_at("Weather report", "Atmosphere is at 70% capacity.", NotifyOptions::default(), t0());
        store.push_at("<strong>Settings</strong> saved", "", NotifyOptions::default(), t0());

        let headers = |query: &str| -> Vec<String> {
            store.search(query).iter().map(|n| n.header.clone()).collect()
        };

        assert_eq!(headers("").len(), 3);
        assert_eq!(headers("volme"), vec!["Volume Detached"]);
        assert_eq!(headers("capacity weathr"), vec!["Weather report"]);
        assert_eq!(headers("settings"), vec!["<strong>Settings</strong> saved"]);
        assert!(headers("strong").is_empty());
        assert!(headers("kubernetes").is_empty());
    }

    #[test]
    fn test_shrinking_limit_trims() {
        let mut store = NotificationStore::default();
        for i in 0..4 {
            store.push_at(&i.to_string(), "", NotifyOptions::default(), t0());
        }
        store.set_settings(NotificationSettings {
            timeout_secs: 5,
            max_visible: 1,
        });
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].header, "3");
    }
}
