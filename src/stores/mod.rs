// Application state
// The confirm controller and notification store are owned by the root
// component and shared through context; settings are a global signal

pub mod confirm_store;
pub mod notifications;
pub mod settings_store;
