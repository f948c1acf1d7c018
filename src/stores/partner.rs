//! Partners: the backend has no partner endpoints, so every call is local.

use super::{id_sequence, merge, non_empty, reject_blank, LatencyProfile, STORE_BUFFER};
use crate::model::{Partner, PartnerCreate, PartnerUpdate};
use chrono::{DateTime, Utc};
use tiered_client::{ClientError, NoAction, RemoteEntity, Routes, StoreActor, StoreClient, StoreEntity};

pub const FAMILY: &str = "partners";

pub fn new(seed: Vec<Partner>, profile: LatencyProfile) -> (StoreActor<Partner>, StoreClient<Partner>) {
    let (actor, client) = StoreActor::new(FAMILY, STORE_BUFFER, id_sequence("partner"));
    (
        actor.with_records(seed),
        client.with_latency(profile.with_reads(600, 400)),
    )
}

impl StoreEntity for Partner {
    type Id = String;
    type Create = PartnerCreate;
    type Update = PartnerUpdate;
    type Action = NoAction;
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: PartnerCreate, now: DateTime<Utc>) -> Result<Self, ClientError> {
        let name = non_empty(Some(params.name))
            .ok_or_else(|| ClientError::InvalidRequest("partner name is required".into()))?;
        Ok(Self {
            id,
            name,
            partner_type: params.partner_type.unwrap_or_default(),
            description: params.description.unwrap_or_default(),
            contact_email: params.contact_email.unwrap_or_default(),
            contact_phone: params.contact_phone.unwrap_or_default(),
            website: params.website,
            address: params.address.unwrap_or_default(),
            events_hosted: 0,
            volunteers_engaged: 0,
            focus_areas: params.focus_areas.unwrap_or_default(),
            is_active: true,
            created_at: now,
            logo_url: params.logo_url,
        })
    }

    fn on_update(&mut self, update: PartnerUpdate, _now: DateTime<Utc>) -> Result<(), ClientError> {
        reject_blank(&update.name, "partner name is required")?;
        merge(&mut self.name, update.name);
        merge(&mut self.partner_type, update.partner_type);
        merge(&mut self.description, update.description);
        merge(&mut self.contact_email, update.contact_email);
        merge(&mut self.contact_phone, update.contact_phone);
        merge(&mut self.website, update.website.map(Some));
        merge(&mut self.address, update.address);
        merge(&mut self.events_hosted, update.events_hosted);
        merge(&mut self.volunteers_engaged, update.volunteers_engaged);
        merge(&mut self.focus_areas, update.focus_areas);
        merge(&mut self.is_active, update.is_active);
        merge(&mut self.logo_url, update.logo_url.map(Some));
        Ok(())
    }

    fn handle_action(&mut self, action: NoAction, _now: DateTime<Utc>) -> Result<(), ClientError> {
        match action {}
    }
}

impl RemoteEntity for Partner {
    const FAMILY: &'static str = FAMILY;

    fn routes() -> Routes {
        Routes::none()
    }
}
