//! Partner points of contact. The backend can create, update and delete them
//! but cannot list or fetch them, so reads are always local.

use super::{id_sequence, merge, non_empty, reject_blank, LatencyProfile, STORE_BUFFER};
use crate::model::{PartnerPoc, PartnerPocCreate, PartnerPocUpdate};
use chrono::{DateTime, Utc};
use tiered_client::{ClientError, NoAction, RemoteEntity, Routes, StoreActor, StoreClient, StoreEntity};

pub const FAMILY: &str = "partner-pocs";

pub fn new(seed: Vec<PartnerPoc>, profile: LatencyProfile) -> (StoreActor<PartnerPoc>, StoreClient<PartnerPoc>) {
    let (actor, client) = StoreActor::new(FAMILY, STORE_BUFFER, id_sequence("poc"));
    (actor.with_records(seed), client.with_latency(profile.standard()))
}

impl StoreEntity for PartnerPoc {
    type Id = String;
    type Create = PartnerPocCreate;
    type Update = PartnerPocUpdate;
    type Action = NoAction;
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: PartnerPocCreate, now: DateTime<Utc>) -> Result<Self, ClientError> {
        let partner_id = non_empty(Some(params.partner_id))
            .ok_or_else(|| ClientError::InvalidRequest("partnerId is required".into()))?;
        let name = non_empty(Some(params.name))
            .ok_or_else(|| ClientError::InvalidRequest("contact name is required".into()))?;
        Ok(Self {
            id,
            partner_id,
            name,
            email: params.email,
            phone: params.phone,
            role: params.role,
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, update: PartnerPocUpdate, now: DateTime<Utc>) -> Result<(), ClientError> {
        reject_blank(&update.name, "contact name is required")?;
        merge(&mut self.name, update.name);
        merge(&mut self.email, update.email);
        merge(&mut self.phone, update.phone.map(Some));
        merge(&mut self.role, update.role.map(Some));
        self.updated_at = now;
        Ok(())
    }

    fn handle_action(&mut self, action: NoAction, _now: DateTime<Utc>) -> Result<(), ClientError> {
        match action {}
    }
}

impl RemoteEntity for PartnerPoc {
    const FAMILY: &'static str = FAMILY;

    fn routes() -> Routes {
        Routes {
            create: Some("/v2/partner/poc"),
            update: Some("/v2/partner/poc/{id}"),
            delete: Some("/v2/partner/poc/{id}"),
            ..Routes::none()
        }
    }
}
