//! UI Components
//!
//! Leptos components for the dashboard.

pub mod chart_panel;
pub mod clock;
pub mod loading;
pub mod navbar;
pub mod toast;

pub use chart_panel::ChartPanel;
pub use clock::Clock;
pub use loading::Loading;
pub use navbar::Navbar;
pub use toast::Toast;
