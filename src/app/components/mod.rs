//! Shared UI components for the portal shell.

pub mod color_switcher;
pub mod error_alert;
pub mod layout;
pub mod notification_container;
pub mod view_host;

pub use color_switcher::ColorSwitcher;
pub use error_alert::ErrorAlert;
pub use layout::Layout;
pub use notification_container::NotificationContainer;
pub use view_host::ViewHost;
