use crate::model::{Activity, ActivityAction, ActivityCreate, ActivityId, ActivityUpdate};
use async_trait::async_trait;
use tiered_client::{ClientError, Envelope, FallbackResolver, FamilyClient};
use tracing::{debug, info, instrument};

/// Client for activity templates.
///
/// `delete` is inherited but has no backend route, so it always removes the
/// local copy. Prefer [`disable_activity`](Self::disable_activity).
#[derive(Clone)]
pub struct ActivityClient {
    resolver: FallbackResolver<Activity>,
}

impl ActivityClient {
    pub fn new(resolver: FallbackResolver<Activity>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self, params))]
    pub async fn create_activity(
        &self,
        params: ActivityCreate,
    ) -> Result<Envelope<Activity>, ClientError> {
        debug!(?params, "create_activity called");
        self.resolver.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_activity(
        &self,
        id: ActivityId,
        update: ActivityUpdate,
    ) -> Result<Envelope<Activity>, ClientError> {
        debug!(?update, "update_activity called");
        self.resolver.update(id, update).await
    }

    /// Marks the activity inactive and returns it.
    #[instrument(skip(self))]
    pub async fn disable_activity(
        &self,
        id: ActivityId,
        reason: Option<String>,
    ) -> Result<Envelope<Activity>, ClientError> {
        info!("Disabling activity");
        self.resolver
            .action(id, ActivityAction::Disable { reason })
            .await
    }
}

#[async_trait]
impl FamilyClient<Activity> for ActivityClient {
    fn resolver(&self) -> &FallbackResolver<Activity> {
        &self.resolver
    }
}
