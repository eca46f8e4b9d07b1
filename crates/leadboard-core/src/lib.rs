//! leadboard-core - Core library for leadboard
//!
//! Provides the sample datasets, selection state, and aggregation logic
//! behind the dashboard widgets. Everything here is plain data and pure
//! functions so it compiles for both native and wasm32 targets.

pub mod error;
pub mod format;
pub mod models;
pub mod state;
pub mod tabs;

pub use error::CoreError;
pub use state::SidebarState;
pub use tabs::DashboardTab;
