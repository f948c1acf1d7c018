//! # StoreEntity Trait
//!
//! The contract every resource record (Event, Partner, Activity, ...) implements
//! so the generic [`StoreActor`](crate::StoreActor) can keep it in the local tier.
//!
//! Associated types tie each record to its own create/update payloads, so an
//! `EventCreate` can never be sent to the activities store. The hooks are
//! synchronous: the local tier is pure in-memory bookkeeping, and the simulated
//! latency lives in [`StoreClient`](crate::StoreClient), not here.

use crate::error::ClientError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource record must implement to live in a local store.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. `Display` is used to expand `{id}` in route templates.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Create payload. Serialized as the remote request body, so optional
    /// fields should skip serialization when absent.
    type Create: Serialize + Send + Sync + Debug;

    /// Partial update payload with merge semantics.
    type Update: Serialize + Send + Sync + Debug;

    /// Family-specific operations beyond CRUD. Use [`NoAction`] when there are none.
    type Action: Send + Sync + Debug;

    /// Result of an action, decoded from the backend when answered remotely.
    type ActionResult: DeserializeOwned + Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Builds the full record, filling every unspecified field with its default.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        now: DateTime<Utc>,
    ) -> Result<Self, ClientError>;

    /// Shallow merge: provided fields overwrite, absent fields persist.
    fn on_update(&mut self, update: Self::Update, now: DateTime<Utc>) -> Result<(), ClientError>;

    fn handle_action(
        &mut self,
        action: Self::Action,
        now: DateTime<Utc>,
    ) -> Result<Self::ActionResult, ClientError>;
}

/// Action type for families without custom actions. It has no values, so
/// `handle_action` can be written as `match action {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {}
