//! Volunteers: no backend endpoints; answered locally.

use super::{id_sequence, merge, LatencyProfile, STORE_BUFFER};
use crate::model::{Volunteer, VolunteerCreate, VolunteerUpdate};
use chrono::{DateTime, Utc};
use tiered_client::{ClientError, NoAction, RemoteEntity, Routes, StoreActor, StoreClient, StoreEntity};

pub const FAMILY: &str = "volunteers";

pub fn new(seed: Vec<Volunteer>, profile: LatencyProfile) -> (StoreActor<Volunteer>, StoreClient<Volunteer>) {
    let (actor, client) = StoreActor::new(FAMILY, STORE_BUFFER, id_sequence("vol"));
    (
        actor.with_records(seed),
        client.with_latency(profile.with_reads(700, 400)),
    )
}

fn check_email(email: &str) -> Result<(), ClientError> {
    if !email.contains('@') {
        return Err(ClientError::InvalidRequest(format!("invalid email address: {email:?}")));
    }
    Ok(())
}

impl StoreEntity for Volunteer {
    type Id = String;
    type Create = VolunteerCreate;
    type Update = VolunteerUpdate;
    type Action = NoAction;
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: VolunteerCreate, now: DateTime<Utc>) -> Result<Self, ClientError> {
        if params.first_name.trim().is_empty() || params.last_name.trim().is_empty() {
            return Err(ClientError::InvalidRequest("volunteer name is required".into()));
        }
        check_email(&params.email)?;
        Ok(Self {
            id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone.unwrap_or_default(),
            skills: params.skills.unwrap_or_default(),
            availability: params.availability.unwrap_or_default(),
            events_attended: 0,
            hours_contributed: 0,
            rating: 0.0,
            is_active: true,
            created_at: now,
            profile_image_url: params.profile_image_url,
        })
    }

    fn on_update(&mut self, update: VolunteerUpdate, _now: DateTime<Utc>) -> Result<(), ClientError> {
        if let Some(email) = &update.email {
            check_email(email)?;
        }
        if let Some(rating) = update.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(ClientError::InvalidRequest(format!("rating {rating} is outside 0-5")));
            }
        }
        merge(&mut self.first_name, update.first_name);
        merge(&mut self.last_name, update.last_name);
        merge(&mut self.email, update.email);
        merge(&mut self.phone, update.phone);
        merge(&mut self.skills, update.skills);
        merge(&mut self.availability, update.availability);
        merge(&mut self.events_attended, update.events_attended);
        merge(&mut self.hours_contributed, update.hours_contributed);
        merge(&mut self.rating, update.rating);
        merge(&mut self.is_active, update.is_active);
        merge(&mut self.profile_image_url, update.profile_image_url.map(Some));
        Ok(())
    }

    fn handle_action(&mut self, action: NoAction, _now: DateTime<Utc>) -> Result<(), ClientError> {
        match action {}
    }
}

impl RemoteEntity for Volunteer {
    const FAMILY: &'static str = FAMILY;

    fn routes() -> Routes {
        Routes::none()
    }
}
