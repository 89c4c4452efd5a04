//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod banner;
pub mod header;
pub mod json_view;
pub mod loading;
pub mod sidebar;
pub mod tabs;
pub mod toast;

pub use banner::{ConfigBanner, ErrorBanner};
pub use header::Header;
pub use json_view::{JsonView, RecordTable, StatCard};
pub use loading::{InlineLoading, Loading};
pub use sidebar::Sidebar;
pub use tabs::TabBar;
pub use toast::Toast;
