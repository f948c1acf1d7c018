use crate::model::{PartnerPoc, PartnerPocCreate, PartnerPocId, PartnerPocUpdate};
use async_trait::async_trait;
use tiered_client::{ClientError, Envelope, FallbackResolver, FamilyClient, QueryParams};
use tracing::{debug, instrument};

/// Client for partner points of contact. Reads always come from the local
/// store since the backend cannot list or fetch contacts.
#[derive(Clone)]
pub struct PartnerPocClient {
    resolver: FallbackResolver<PartnerPoc>,
}

impl PartnerPocClient {
    pub fn new(resolver: FallbackResolver<PartnerPoc>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn list_for_partner(
        &self,
        partner_id: String,
    ) -> Result<Envelope<Vec<PartnerPoc>>, ClientError> {
        let query = QueryParams::new().param("partnerId", &partner_id);
        self.resolver
            .list_where(query, move |poc| poc.partner_id == partner_id)
            .await
    }

    #[instrument(skip(self, params))]
    pub async fn create_poc(&self, params: PartnerPocCreate) -> Result<Envelope<PartnerPoc>, ClientError> {
        debug!(?params, "create_poc called");
        self.resolver.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_poc(
        &self,
        id: PartnerPocId,
        update: PartnerPocUpdate,
    ) -> Result<Envelope<PartnerPoc>, ClientError> {
        debug!(?update, "update_poc called");
        self.resolver.update(id, update).await
    }
}

#[async_trait]
impl FamilyClient<PartnerPoc> for PartnerPocClient {
    fn resolver(&self) -> &FallbackResolver<PartnerPoc> {
        &self.resolver
    }
}
