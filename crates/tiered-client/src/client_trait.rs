//! # FamilyClient Trait
//!
//! Common interface for the per-family clients, with default `list`, `get` and
//! `delete` built on a [`FallbackResolver`].
use crate::{ClientError, Envelope, FallbackResolver, RemoteEntity};
use async_trait::async_trait;

/// Trait for family-specific clients to inherit the standard read and delete
/// operations. Clients add their own `create`/`update` (which take typed
/// payloads) and any family actions.
///
/// # Example
///
/// ```ignore
/// pub struct EventClient {
///     resolver: FallbackResolver<Event>,
/// }
///
/// #[async_trait]
/// impl FamilyClient<Event> for EventClient {
///     fn resolver(&self) -> &FallbackResolver<Event> {
///         &self.resolver
///     }
/// }
///
/// // list(), get() and delete() are provided automatically.
/// let events = client.list().await?.data;
/// ```
#[async_trait]
pub trait FamilyClient<E: RemoteEntity>: Send + Sync {
    /// Access the family's resolver.
    fn resolver(&self) -> &FallbackResolver<E>;

    #[tracing::instrument(skip(self), fields(family = E::FAMILY))]
    async fn list(&self) -> Result<Envelope<Vec<E>>, ClientError> {
        tracing::debug!("Sending request");
        self.resolver().list().await
    }

    /// Fetch a record by id. `NotFound` when neither tier has it.
    #[tracing::instrument(skip(self), fields(family = E::FAMILY))]
    async fn get(&self, id: E::Id) -> Result<Envelope<E>, ClientError> {
        tracing::debug!("Sending request");
        self.resolver().get(id).await
    }

    #[tracing::instrument(skip(self), fields(family = E::FAMILY))]
    async fn delete(&self, id: E::Id) -> Result<Envelope<bool>, ClientError> {
        tracing::debug!("Sending request");
        self.resolver().delete(id).await
    }
}
