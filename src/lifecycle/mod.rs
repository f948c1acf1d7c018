//! Lifecycle management: building, wiring and shutting down the stores and
//! clients.
//!
//! - [`DashboardSystem`] - composition root that owns every store task and hands
//!   out the per-family clients

pub mod dashboard_system;

pub use dashboard_system::*;
