//! Per-family clients over [`FallbackResolver`](tiered_client::FallbackResolver),
//! plus the booking and auth clients whose endpoints are not CRUD-shaped.

pub mod activity_client;
pub mod activity_partner_client;
pub mod auth_client;
pub mod booking_client;
pub mod event_client;
pub mod partner_client;
pub mod partner_poc_client;
pub mod volunteer_client;

pub use activity_client::*;
pub use activity_partner_client::*;
pub use auth_client::*;
pub use booking_client::*;
pub use event_client::*;
pub use partner_client::*;
pub use partner_poc_client::*;
pub use volunteer_client::*;
