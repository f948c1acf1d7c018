use crate::model::{Partner, PartnerCreate, PartnerId, PartnerUpdate};
use async_trait::async_trait;
use tiered_client::{ClientError, Envelope, FallbackResolver, FamilyClient};
use tracing::{debug, instrument};

/// Client for partners. Answered locally until the backend grows partner
/// endpoints.
#[derive(Clone)]
pub struct PartnerClient {
    resolver: FallbackResolver<Partner>,
}

impl PartnerClient {
    pub fn new(resolver: FallbackResolver<Partner>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self, params))]
    pub async fn create_partner(&self, params: PartnerCreate) -> Result<Envelope<Partner>, ClientError> {
        debug!(?params, "create_partner called");
        self.resolver.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_partner(
        &self,
        id: PartnerId,
        update: PartnerUpdate,
    ) -> Result<Envelope<Partner>, ClientError> {
        debug!(?update, "update_partner called");
        self.resolver.update(id, update).await
    }
}

#[async_trait]
impl FamilyClient<Partner> for PartnerClient {
    fn resolver(&self) -> &FallbackResolver<Partner> {
        &self.resolver
    }
}
