//! Events: read-only on the backend, full CRUD locally.

use super::{id_sequence, merge, non_empty, LatencyProfile, STORE_BUFFER};
use crate::model::{Event, EventCreate, EventStatus, EventUpdate};
use chrono::{DateTime, Utc};
use tiered_client::{ClientError, NoAction, RemoteEntity, Routes, StoreActor, StoreClient, StoreEntity};

pub const FAMILY: &str = "events";

/// Creates the events store seeded with `seed`.
pub fn new(seed: Vec<Event>, profile: LatencyProfile) -> (StoreActor<Event>, StoreClient<Event>) {
    let (actor, client) = StoreActor::new(FAMILY, STORE_BUFFER, id_sequence("event"));
    (
        actor.with_records(seed),
        client.with_latency(profile.with_reads(800, 500)),
    )
}

impl StoreEntity for Event {
    type Id = String;
    type Create = EventCreate;
    type Update = EventUpdate;
    type Action = NoAction;
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    /// New events start as `planning` with no volunteers. The start date
    /// defaults to today and the end date to the start date.
    fn from_create_params(id: String, params: EventCreate, now: DateTime<Utc>) -> Result<Self, ClientError> {
        let start_date = params.start_date.unwrap_or_else(|| now.date_naive());
        let event = Self {
            id,
            title: non_empty(params.title).unwrap_or_else(|| "Untitled Event".into()),
            description: params.description.unwrap_or_default(),
            start_date,
            start_time: non_empty(params.start_time).unwrap_or_else(|| "09:00".into()),
            end_date: params.end_date.unwrap_or(start_date),
            end_time: non_empty(params.end_time).unwrap_or_else(|| "17:00".into()),
            location: non_empty(params.location).unwrap_or_else(|| "TBD".into()),
            address: non_empty(params.address).unwrap_or_else(|| "TBD".into()),
            registered_volunteers: 0,
            max_volunteers: params.max_volunteers.filter(|m| *m > 0).unwrap_or(50),
            status: EventStatus::Planning,
            category: non_empty(params.category).unwrap_or_else(|| "General".into()),
            host_id: non_empty(params.host_id).unwrap_or_else(|| "default".into()),
            host_name: non_empty(params.host_name).unwrap_or_else(|| "Event Host".into()),
            partner_id: params.partner_id,
            partner_name: params.partner_name,
            created_at: now,
            updated_at: now,
            image_url: params.image_url,
            requirements: params.requirements.unwrap_or_default(),
            tags: params.tags.unwrap_or_default(),
        };
        check_dates(&event)?;
        Ok(event)
    }

    fn on_update(&mut self, update: EventUpdate, now: DateTime<Utc>) -> Result<(), ClientError> {
        let start = update.start_date.unwrap_or(self.start_date);
        let end = update.end_date.unwrap_or(self.end_date);
        if end < start {
            return Err(ClientError::InvalidRequest(format!(
                "event ends ({end}) before it starts ({start})"
            )));
        }

        merge(&mut self.title, update.title);
        merge(&mut self.description, update.description);
        merge(&mut self.start_date, update.start_date);
        merge(&mut self.start_time, update.start_time);
        merge(&mut self.end_date, update.end_date);
        merge(&mut self.end_time, update.end_time);
        merge(&mut self.location, update.location);
        merge(&mut self.address, update.address);
        merge(&mut self.registered_volunteers, update.registered_volunteers);
        merge(&mut self.max_volunteers, update.max_volunteers);
        merge(&mut self.status, update.status);
        merge(&mut self.category, update.category);
        merge(&mut self.host_id, update.host_id);
        merge(&mut self.host_name, update.host_name);
        merge(&mut self.partner_id, update.partner_id.map(Some));
        merge(&mut self.partner_name, update.partner_name.map(Some));
        merge(&mut self.image_url, update.image_url.map(Some));
        merge(&mut self.requirements, update.requirements);
        merge(&mut self.tags, update.tags);
        self.updated_at = now;
        Ok(())
    }

    fn handle_action(&mut self, action: NoAction, _now: DateTime<Utc>) -> Result<(), ClientError> {
        match action {}
    }
}

fn check_dates(event: &Event) -> Result<(), ClientError> {
    if event.end_date < event.start_date {
        return Err(ClientError::InvalidRequest(format!(
            "event ends ({}) before it starts ({})",
            event.end_date, event.start_date
        )));
    }
    Ok(())
}

impl RemoteEntity for Event {
    const FAMILY: &'static str = FAMILY;

    fn routes() -> Routes {
        Routes::read_only(
            "/v2/developer-api/v2/events",
            "/v2/developer-api/v2/events/{id}",
        )
    }
}
