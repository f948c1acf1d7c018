//! Pure data structures (records and payload DTOs) for every resource family.
//!
//! Records use the backend's camelCase field names. Create and update payloads
//! serialize only the fields that were provided.

pub mod activity;
pub mod activity_partner;
pub mod event;
pub mod partner;
pub mod partner_poc;
pub mod registration;
pub mod volunteer;

pub use activity::*;
pub use activity_partner::*;
pub use event::*;
pub use partner::*;
pub use partner_poc::*;
pub use registration::*;
pub use volunteer::*;
