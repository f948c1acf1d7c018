use crate::model::{Volunteer, VolunteerCreate, VolunteerId, VolunteerUpdate};
use async_trait::async_trait;
use tiered_client::{ClientError, Envelope, FallbackResolver, FamilyClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct VolunteerClient {
    resolver: FallbackResolver<Volunteer>,
}

impl VolunteerClient {
    pub fn new(resolver: FallbackResolver<Volunteer>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self, params))]
    pub async fn create_volunteer(
        &self,
        params: VolunteerCreate,
    ) -> Result<Envelope<Volunteer>, ClientError> {
        debug!(?params, "create_volunteer called");
        self.resolver.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_volunteer(
        &self,
        id: VolunteerId,
        update: VolunteerUpdate,
    ) -> Result<Envelope<Volunteer>, ClientError> {
        debug!(?update, "update_volunteer called");
        self.resolver.update(id, update).await
    }
}

#[async_trait]
impl FamilyClient<Volunteer> for VolunteerClient {
    fn resolver(&self) -> &FallbackResolver<Volunteer> {
        &self.resolver
    }
}
