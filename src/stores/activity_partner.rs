//! Activity-partner links: full CRUD on the backend.

use super::{id_sequence, merge, non_empty, reject_blank, LatencyProfile, STORE_BUFFER};
use crate::model::{ActivityPartner, ActivityPartnerCreate, ActivityPartnerUpdate};
use chrono::{DateTime, Utc};
use tiered_client::{ClientError, NoAction, RemoteEntity, Routes, StoreActor, StoreClient, StoreEntity};

pub const FAMILY: &str = "activity-partners";

pub fn new(
    seed: Vec<ActivityPartner>,
    profile: LatencyProfile,
) -> (StoreActor<ActivityPartner>, StoreClient<ActivityPartner>) {
    let (actor, client) = StoreActor::new(FAMILY, STORE_BUFFER, id_sequence("activity_partner"));
    (actor.with_records(seed), client.with_latency(profile.standard()))
}

impl StoreEntity for ActivityPartner {
    type Id = String;
    type Create = ActivityPartnerCreate;
    type Update = ActivityPartnerUpdate;
    type Action = NoAction;
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(
        id: String,
        params: ActivityPartnerCreate,
        now: DateTime<Utc>,
    ) -> Result<Self, ClientError> {
        let activity_id = non_empty(Some(params.activity_id))
            .ok_or_else(|| ClientError::InvalidRequest("activityId is required".into()))?;
        let partner_id = non_empty(Some(params.partner_id))
            .ok_or_else(|| ClientError::InvalidRequest("partnerId is required".into()))?;
        Ok(Self {
            id,
            activity_id,
            partner_id,
            name: params.name.unwrap_or_default(),
            is_active: params.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, update: ActivityPartnerUpdate, now: DateTime<Utc>) -> Result<(), ClientError> {
        reject_blank(&update.activity_id, "activityId is required")?;
        reject_blank(&update.partner_id, "partnerId is required")?;
        merge(&mut self.activity_id, update.activity_id);
        merge(&mut self.partner_id, update.partner_id);
        merge(&mut self.name, update.name);
        merge(&mut self.is_active, update.is_active);
        self.updated_at = now;
        Ok(())
    }

    fn handle_action(&mut self, action: NoAction, _now: DateTime<Utc>) -> Result<(), ClientError> {
        match action {}
    }
}

impl RemoteEntity for ActivityPartner {
    const FAMILY: &'static str = FAMILY;

    fn routes() -> Routes {
        Routes::crud("/v2/activity-partner", "/v2/activity-partner/{id}")
    }
}
