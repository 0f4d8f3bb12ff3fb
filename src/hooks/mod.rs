pub mod use_confirm;
pub mod use_confirm_keyboard;
pub mod use_notifications;

pub use use_confirm::{use_confirm, use_confirm_provider};
pub use use_notifications::{use_notifications, use_notifications_provider};
