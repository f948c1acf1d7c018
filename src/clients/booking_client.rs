//! Booking sync and developer registrations.
//!
//! These endpoints do not fit the CRUD route table, so the client builds each
//! request itself and runs it through [`try_remote`] and [`settle`] against
//! the local registrations store.

use crate::model::{BulkRegistrationSync, Registration, RegistrationId, RegistrationSync};
use crate::stores::registration::FAMILY;
use std::sync::Arc;
use tiered_client::resource::expand;
use tiered_client::{
    send_typed, settle, to_body, try_remote, ApiRequest, ClientError, Envelope, Operation,
    Decision, StoreClient, Transport,
};
use tracing::{debug, instrument};

const SYNC: &str = "/v2/booking/registration";
const BULK_SYNC: &str = "/v2/booking/registration/bulk";
const BY_THIRD_PARTY_ID: &str = "/v2/booking/third-party-id/{id}";
const REGISTER: &str = "/v2/developer-api/v2/registrations";
const CANCEL: &str = "/v2/developer-api/v2/registrations/{id}";

#[derive(Clone)]
pub struct BookingClient {
    transport: Arc<dyn Transport>,
    local: StoreClient<Registration>,
}

impl BookingClient {
    pub fn new(transport: Arc<dyn Transport>, local: StoreClient<Registration>) -> Self {
        Self { transport, local }
    }

    pub fn local(&self) -> &StoreClient<Registration> {
        &self.local
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<Option<R>, ClientError>
    where
        B: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let request = ApiRequest::post(path).with_body(to_body(body)?);
        send_typed(self.transport.as_ref(), request).await
    }

    /// Pushes one third-party registration.
    #[instrument(skip(self, params))]
    pub async fn sync_registration(
        &self,
        params: RegistrationSync,
    ) -> Result<Envelope<Registration>, ClientError> {
        debug!(?params, "sync_registration called");
        let decision: Decision<Registration> =
            try_remote(self.transport.is_configured(), || self.post(SYNC, &params)).await;
        settle(FAMILY, Operation::Create, decision, || self.local.create(params)).await
    }

    /// Pushes many registrations at once. Locally each is created in order; the
    /// first invalid entry stops the batch.
    #[instrument(skip(self, registrations), fields(size = registrations.len()))]
    pub async fn bulk_sync(
        &self,
        registrations: Vec<RegistrationSync>,
    ) -> Result<Envelope<Vec<Registration>>, ClientError> {
        let body = BulkRegistrationSync { registrations };
        let decision: Decision<Vec<Registration>> =
            try_remote(self.transport.is_configured(), || self.post(BULK_SYNC, &body)).await;
        settle(FAMILY, Operation::Create, decision, || {
            self.local.create_many(body.registrations)
        })
        .await
    }

    /// First registration carrying `third_party_id`, or `NotFound`.
    #[instrument(skip(self))]
    pub async fn find_by_third_party_id(
        &self,
        third_party_id: String,
    ) -> Result<Envelope<Registration>, ClientError> {
        let decision: Decision<Registration> = try_remote(self.transport.is_configured(), || {
            let request = ApiRequest::get(expand(BY_THIRD_PARTY_ID, &third_party_id));
            send_typed(self.transport.as_ref(), request)
        })
        .await;
        settle(FAMILY, Operation::Get, decision, || async move {
            self.local
                .list()
                .await?
                .into_iter()
                .find(|r| r.third_party_id == third_party_id)
                .ok_or(ClientError::NotFound(third_party_id))
        })
        .await
    }

    /// Registers a volunteer through the developer API.
    #[instrument(skip(self, params))]
    pub async fn register(&self, params: RegistrationSync) -> Result<Envelope<Registration>, ClientError> {
        debug!(?params, "register called");
        let decision: Decision<Registration> =
            try_remote(self.transport.is_configured(), || self.post(REGISTER, &params)).await;
        settle(FAMILY, Operation::Create, decision, || self.local.create(params)).await
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: RegistrationId) -> Result<Envelope<bool>, ClientError> {
        let decision = try_remote(self.transport.is_configured(), || async {
            let body = self.transport.send(ApiRequest::delete(expand(CANCEL, &id))).await?;
            Ok::<_, ClientError>(body.map(|_| true))
        })
        .await;
        settle(FAMILY, Operation::Delete, decision, || self.local.delete(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{self, LatencyProfile};
    use serde_json::json;
    use tiered_client::mock::MockTransport;
    use tiered_client::Source;

    fn sync(third_party_id: &str) -> RegistrationSync {
        RegistrationSync {
            third_party_id: third_party_id.into(),
            event_id: "1".into(),
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah@example.com".into(),
            status: None,
        }
    }

    fn client(mock: &MockTransport) -> BookingClient {
        let (actor, store) = stores::registration::new(vec![], LatencyProfile::Instant);
        tokio::spawn(actor.run());
        BookingClient::new(Arc::new(mock.clone()), store)
    }

    #[tokio::test]
    async fn bulk_sync_falls_back_and_keeps_order() {
        let mock = MockTransport::new();
        mock.expect_post(BULK_SYNC).return_status(503, "Service Unavailable");
        let booking = client(&mock);

        let env = booking.bulk_sync(vec![sync("tp-1"), sync("tp-2")]).await.unwrap();
        assert_eq!(env.source, Source::Local);
        let ids: Vec<&str> = env.data.iter().map(|r| r.third_party_id.as_str()).collect();
        assert_eq!(ids, vec!["tp-1", "tp-2"]);
        assert!(env.data.iter().all(|r| r.status == "registered"));

        let sent = mock.calls()[0].body.clone().unwrap();
        assert_eq!(sent["registrations"][1]["thirdPartyId"], json!("tp-2"));
    }

    #[tokio::test]
    async fn bulk_sync_stores_nothing_when_one_entry_is_invalid() {
        let mock = MockTransport::unconfigured();
        let booking = client(&mock);

        let mut broken = sync("tp-2");
        broken.event_id = String::new();
        let result = booking.bulk_sync(vec![sync("tp-1"), broken]).await;
        assert_eq!(
            result,
            Err(ClientError::InvalidRequest("eventId is required".into()))
        );

        assert_eq!(
            booking.find_by_third_party_id("tp-1".into()).await,
            Err(ClientError::NotFound("tp-1".into()))
        );
        let retried = booking.bulk_sync(vec![sync("tp-1")]).await.unwrap();
        assert_eq!(retried.data.len(), 1);
    }

    #[tokio::test]
    async fn find_by_third_party_id_searches_local_store() {
        let mock = MockTransport::unconfigured();
        let booking = client(&mock);
        booking.sync_registration(sync("tp-7")).await.unwrap();

        let found = booking.find_by_third_party_id("tp-7".into()).await.unwrap();
        assert_eq!(found.data.id, "registration_1");
        assert_eq!(
            booking.find_by_third_party_id("tp-8".into()).await,
            Err(ClientError::NotFound("tp-8".into()))
        );
        assert_eq!(mock.call_count(), 0);
    }
}
