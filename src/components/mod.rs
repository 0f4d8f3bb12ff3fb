// UI Components
// App-wide overlays mounted once by the root component

pub mod confirm_modal;
pub mod notification_center;

pub use confirm_modal::ConfirmModal;
pub use notification_center::NotificationCenter;
