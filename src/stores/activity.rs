//! Activities: list/get/create/update and `disable` on the backend, no delete.

use super::{id_sequence, merge, non_empty, LatencyProfile, STORE_BUFFER};
use crate::model::{Activity, ActivityAction, ActivityCreate, ActivityUpdate};
use chrono::{DateTime, Utc};
use serde_json::json;
use tiered_client::resource::expand;
use tiered_client::{ApiRequest, ClientError, RemoteEntity, Routes, StoreActor, StoreClient, StoreEntity};

pub const FAMILY: &str = "activities";

const COLLECTION: &str = "/v2/activity";
const ITEM: &str = "/v2/activity/{id}";
const DISABLE: &str = "/v2/activity/{id}/disable";

pub fn new(seed: Vec<Activity>, profile: LatencyProfile) -> (StoreActor<Activity>, StoreClient<Activity>) {
    let (actor, client) = StoreActor::new(FAMILY, STORE_BUFFER, id_sequence("activity"));
    (
        actor.with_records(seed),
        client.with_latency(profile.with_reads(500, 500)),
    )
}

fn check_participants(min: u32, max: u32) -> Result<(), ClientError> {
    if min > max {
        return Err(ClientError::InvalidRequest(format!(
            "minParticipants ({min}) exceeds maxParticipants ({max})"
        )));
    }
    Ok(())
}

impl StoreEntity for Activity {
    type Id = String;
    type Create = ActivityCreate;
    type Update = ActivityUpdate;
    type Action = ActivityAction;
    type ActionResult = Activity;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: ActivityCreate, now: DateTime<Utc>) -> Result<Self, ClientError> {
        let min_participants = params.min_participants.unwrap_or(1);
        let max_participants = params
            .max_participants
            .unwrap_or_else(|| min_participants.max(10));
        check_participants(min_participants, max_participants)?;
        Ok(Self {
            id,
            title: non_empty(params.title).unwrap_or_else(|| "Untitled Activity".into()),
            description: params.description.unwrap_or_default(),
            category: non_empty(params.category).unwrap_or_else(|| "General".into()),
            duration: params.duration.unwrap_or(60),
            min_participants,
            max_participants,
            skills_required: params.skills_required.unwrap_or_default(),
            materials: params.materials.unwrap_or_default(),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn on_update(&mut self, update: ActivityUpdate, now: DateTime<Utc>) -> Result<(), ClientError> {
        check_participants(
            update.min_participants.unwrap_or(self.min_participants),
            update.max_participants.unwrap_or(self.max_participants),
        )?;
        merge(&mut self.title, update.title);
        merge(&mut self.description, update.description);
        merge(&mut self.category, update.category);
        merge(&mut self.duration, update.duration);
        merge(&mut self.min_participants, update.min_participants);
        merge(&mut self.max_participants, update.max_participants);
        merge(&mut self.skills_required, update.skills_required);
        merge(&mut self.materials, update.materials);
        merge(&mut self.is_active, update.is_active);
        self.updated_at = now;
        Ok(())
    }

    fn handle_action(&mut self, action: ActivityAction, now: DateTime<Utc>) -> Result<Activity, ClientError> {
        match action {
            ActivityAction::Disable { .. } => {
                self.is_active = false;
                self.updated_at = now;
                Ok(self.clone())
            }
        }
    }
}

impl RemoteEntity for Activity {
    const FAMILY: &'static str = FAMILY;

    fn routes() -> Routes {
        Routes {
            delete: None,
            ..Routes::crud(COLLECTION, ITEM)
        }
    }

    fn action_request(id: &String, action: &ActivityAction) -> Option<ApiRequest> {
        match action {
            ActivityAction::Disable { reason } => {
                let body = match reason {
                    Some(reason) => json!({ "reason": reason }),
                    None => json!({}),
                };
                Some(ApiRequest::post(expand(DISABLE, id)).with_body(body))
            }
        }
    }
}
