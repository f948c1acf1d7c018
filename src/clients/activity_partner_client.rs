use crate::model::{
    ActivityPartner, ActivityPartnerCreate, ActivityPartnerId, ActivityPartnerQuery,
    ActivityPartnerUpdate,
};
use async_trait::async_trait;
use tiered_client::{ClientError, Envelope, FallbackResolver, FamilyClient, QueryParams};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ActivityPartnerClient {
    resolver: FallbackResolver<ActivityPartner>,
}

impl ActivityPartnerClient {
    pub fn new(resolver: FallbackResolver<ActivityPartner>) -> Self {
        Self { resolver }
    }

    /// Lists links matching `query`. Unset filters are not sent.
    #[instrument(skip(self))]
    pub async fn list_filtered(
        &self,
        query: ActivityPartnerQuery,
    ) -> Result<Envelope<Vec<ActivityPartner>>, ClientError> {
        let params = QueryParams::new()
            .optional("activityId", query.activity_id.as_ref())
            .optional("partnerId", query.partner_id.as_ref())
            .optional("isActive", query.is_active);
        self.resolver
            .list_where(params, move |link| query.matches(link))
            .await
    }

    #[instrument(skip(self, params))]
    pub async fn create_link(
        &self,
        params: ActivityPartnerCreate,
    ) -> Result<Envelope<ActivityPartner>, ClientError> {
        debug!(?params, "create_link called");
        self.resolver.create(params).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_link(
        &self,
        id: ActivityPartnerId,
        update: ActivityPartnerUpdate,
    ) -> Result<Envelope<ActivityPartner>, ClientError> {
        debug!(?update, "update_link called");
        self.resolver.update(id, update).await
    }
}

#[async_trait]
impl FamilyClient<ActivityPartner> for ActivityPartnerClient {
    fn resolver(&self) -> &FallbackResolver<ActivityPartner> {
        &self.resolver
    }
}
