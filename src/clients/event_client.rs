use crate::model::{Event, EventCreate, EventId, EventUpdate};
use async_trait::async_trait;
use tiered_client::{ClientError, Envelope, FallbackResolver, FamilyClient};
use tracing::{debug, instrument};

/// Client for events. The backend only serves reads, so writes are always
/// answered by the local store.
#[derive(Clone)]
pub struct EventClient {
    resolver: FallbackResolver<Event>,
}

impl EventClient {
    pub fn new(resolver: FallbackResolver<Event>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self, params))]
    pub async fn create_event(&self, params: EventCreate) -> Result<Envelope<Event>, ClientError> {
        debug!(?params, "create_event called");
        self.resolver.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_event(
        &self,
        id: EventId,
        update: EventUpdate,
    ) -> Result<Envelope<Event>, ClientError> {
        debug!(?update, "update_event called");
        self.resolver.update(id, update).await
    }
}

#[async_trait]
impl FamilyClient<Event> for EventClient {
    fn resolver(&self) -> &FallbackResolver<Event> {
        &self.resolver
    }
}
