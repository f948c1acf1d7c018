//! Booking registrations. Only the local store lives here; the booking
//! endpoints are not CRUD-shaped and are bound in
//! [`BookingClient`](crate::clients::BookingClient).

use super::{id_sequence, merge, non_empty, reject_blank, LatencyProfile, STORE_BUFFER};
use crate::model::{Registration, RegistrationSync, RegistrationUpdate};
use chrono::{DateTime, Utc};
use tiered_client::{ClientError, NoAction, StoreActor, StoreClient, StoreEntity};

pub const FAMILY: &str = "registrations";

/// Status given to registrations synced without one.
pub const DEFAULT_STATUS: &str = "registered";

pub fn new(
    seed: Vec<Registration>,
    profile: LatencyProfile,
) -> (StoreActor<Registration>, StoreClient<Registration>) {
    let (actor, client) = StoreActor::new(FAMILY, STORE_BUFFER, id_sequence("registration"));
    (actor.with_records(seed), client.with_latency(profile.standard()))
}

impl StoreEntity for Registration {
    type Id = String;
    type Create = RegistrationSync;
    type Update = RegistrationUpdate;
    type Action = NoAction;
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: RegistrationSync, now: DateTime<Utc>) -> Result<Self, ClientError> {
        let third_party_id = non_empty(Some(params.third_party_id))
            .ok_or_else(|| ClientError::InvalidRequest("thirdPartyId is required".into()))?;
        let event_id = non_empty(Some(params.event_id))
            .ok_or_else(|| ClientError::InvalidRequest("eventId is required".into()))?;
        Ok(Self {
            id,
            third_party_id,
            event_id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            status: non_empty(params.status).unwrap_or_else(|| DEFAULT_STATUS.into()),
            synced_at: now,
        })
    }

    fn on_update(&mut self, update: RegistrationUpdate, now: DateTime<Utc>) -> Result<(), ClientError> {
        reject_blank(&update.status, "status must not be empty")?;
        merge(&mut self.status, update.status);
        self.synced_at = now;
        Ok(())
    }

    fn handle_action(&mut self, action: NoAction, _now: DateTime<Utc>) -> Result<(), ClientError> {
        match action {}
    }
}
