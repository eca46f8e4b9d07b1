//! Domain models and embedded sample datasets

pub mod funnel;
pub mod nav;
pub mod sources;
pub mod stats;
pub mod tracking;

pub use funnel::{FunnelStage, FunnelSummary, ACTIVE_LEADS, FUNNEL_STAGES};
pub use nav::{NavIcon, NavItem, MAIN_NAV, SUPPORT_NAV};
pub use sources::{source_data, value_share, SourceMetric, SourceSlice};
pub use stats::{StatEmphasis, StatEntry, OTHER_DATA, REASONS_LOST};
pub use tracking::{tracking_data, TimeRange, TrackingPoint, TOTAL_CLOSED, TOTAL_LOST};
