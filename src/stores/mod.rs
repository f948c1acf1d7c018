//! Local store and backend route bindings for every resource family.
//!
//! Each submodule implements [`StoreEntity`](tiered_client::StoreEntity) (create
//! defaults, merge-on-update, actions) and, where the backend serves the family,
//! [`RemoteEntity`](tiered_client::RemoteEntity) with its fixed routes. Each also
//! exposes a `new()` factory that returns the store actor and its client.

pub mod activity;
pub mod activity_partner;
pub mod event;
pub mod partner;
pub mod partner_poc;
pub mod registration;
pub mod volunteer;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tiered_client::{ClientError, SimulatedLatency};

/// Request buffer for each store actor.
pub const STORE_BUFFER: usize = 32;

/// How slow the local stores pretend to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LatencyProfile {
    /// Delays modeled on the mock backend, so loading states are visible.
    #[default]
    Realistic,
    /// No delay. Use this in tests.
    Instant,
}

impl LatencyProfile {
    /// Latency for a family whose reads take `list_ms` and `get_ms`.
    pub fn with_reads(self, list_ms: u64, get_ms: u64) -> SimulatedLatency {
        match self {
            LatencyProfile::Realistic => SimulatedLatency::default()
                .with_reads(Duration::from_millis(list_ms), Duration::from_millis(get_ms)),
            LatencyProfile::Instant => SimulatedLatency::none(),
        }
    }

    pub fn standard(self) -> SimulatedLatency {
        match self {
            LatencyProfile::Realistic => SimulatedLatency::default(),
            LatencyProfile::Instant => SimulatedLatency::none(),
        }
    }
}

/// Monotonic `<prefix>_<n>` ids, starting at 1.
pub fn id_sequence(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = AtomicU64::new(1);
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

/// Overwrites `slot` when a value was provided.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Treats an empty string like an absent one.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Rejects a provided value that is blank.
pub(crate) fn reject_blank(value: &Option<String>, message: &str) -> Result<(), ClientError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ClientError::InvalidRequest(message.into())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_blank_allows_absent_and_filled_values() {
        assert_eq!(reject_blank(&None, "name is required"), Ok(()));
        assert_eq!(reject_blank(&Some("Ann".into()), "name is required"), Ok(()));
        assert_eq!(
            reject_blank(&Some("  ".into()), "name is required"),
            Err(ClientError::InvalidRequest("name is required".into()))
        );
    }

    #[test]
    fn id_sequence_is_monotonic() {
        let next = id_sequence("event");
        assert_eq!(next(), "event_1");
        assert_eq!(next(), "event_2");
    }

    #[test]
    fn instant_profile_has_no_delay() {
        assert_eq!(LatencyProfile::Instant.with_reads(800, 500), SimulatedLatency::none());
        let realistic = LatencyProfile::Realistic.with_reads(600, 400);
        assert_eq!(realistic.list, Duration::from_millis(600));
        assert_eq!(realistic.create, Duration::from_millis(1000));
    }
}
