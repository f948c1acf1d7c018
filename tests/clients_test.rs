use poc_dashboard::lifecycle::DashboardSystem;
use poc_dashboard::model::{
    ActivityCreate, ActivityPartnerCreate, ActivityPartnerQuery, ActivityPartnerUpdate,
    PartnerPocCreate, PartnerPocUpdate, RegistrationSync, RegistrationUpdate, VolunteerCreate,
};
use poc_dashboard::seed::Dataset;
use poc_dashboard::stores::LatencyProfile;
use serde_json::json;
use std::sync::Arc;
use tiered_client::mock::MockTransport;
use tiered_client::{ClientError, FamilyClient, Method, Source};

fn system(mock: &MockTransport) -> DashboardSystem {
    DashboardSystem::with_transport(
        Arc::new(mock.clone()),
        LatencyProfile::Instant,
        Dataset::default(),
    )
}

#[tokio::test]
async fn activity_create_goes_remote_with_provided_fields_only() {
    let mock = MockTransport::new();
    mock.expect_post("/v2/activity").return_json(json!({
        "id": "act-99",
        "title": "Tutoring",
        "category": "Education",
        "isActive": true
    }));
    let system = system(&mock);

    let env = system
        .activities
        .create_activity(ActivityCreate {
            title: Some("Tutoring".into()),
            category: Some("Education".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(env.source, Source::Remote);
    assert_eq!(env.data.id, "act-99");

    let call = &mock.calls()[0];
    assert_eq!(call.body, Some(json!({ "title": "Tutoring", "category": "Education" })));
    // Nothing was written locally.
    assert_eq!(system.activities.resolver().local().list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn disable_activity_falls_back_to_local() {
    let mock = MockTransport::new();
    mock.expect_post("/v2/activity/activity1/disable")
        .return_status(502, "Bad Gateway");
    let system = system(&mock);

    let env = system
        .activities
        .disable_activity("activity1".into(), Some("Season over".into()))
        .await
        .unwrap();
    assert_eq!(env.source, Source::Local);
    assert!(!env.data.is_active);
    assert_eq!(mock.calls()[0].body, Some(json!({ "reason": "Season over" })));
    mock.verify();
}

#[tokio::test]
async fn activity_delete_has_no_route() {
    let mock = MockTransport::new();
    let system = system(&mock);

    assert!(system.activities.delete("activity2".into()).await.unwrap().data);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn partner_poc_reads_are_local() {
    let mock = MockTransport::new();
    mock.expect_post("/v2/partner/poc").return_empty();
    mock.expect_put("/v2/partner/poc/poc_1").return_err(ClientError::Network("reset".into()));
    let system = system(&mock);

    // Empty by default.
    assert!(system.partner_pocs.list().await.unwrap().data.is_empty());

    let created = system
        .partner_pocs
        .create_poc(PartnerPocCreate {
            partner_id: "partner1".into(),
            name: "Dana Ortiz".into(),
            email: "dana@greenfuture.org".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.source, Source::Local);
    assert_eq!(created.data.id, "poc_1");

    let updated = system
        .partner_pocs
        .update_poc(
            "poc_1".into(),
            PartnerPocUpdate {
                role: Some("Volunteer Coordinator".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.data.role.as_deref(), Some("Volunteer Coordinator"));
    assert_eq!(updated.data.name, "Dana Ortiz");

    let for_partner = system.partner_pocs.list_for_partner("partner1".into()).await.unwrap();
    assert_eq!(for_partner.data.len(), 1);
    assert!(system
        .partner_pocs
        .list_for_partner("partner2".into())
        .await
        .unwrap()
        .data
        .is_empty());
    mock.verify();
}

#[tokio::test]
async fn activity_partner_query_is_sent_and_applied_locally() {
    let mock = MockTransport::new();
    mock.expect_get("/v2/activity-partner")
        .return_status(503, "Service Unavailable");
    let system = system(&mock);

    let query = ActivityPartnerQuery {
        activity_id: Some("activity1".into()),
        is_active: Some(true),
        ..Default::default()
    };
    let env = system.activity_partners.list_filtered(query).await.unwrap();
    assert_eq!(env.source, Source::Local);
    assert_eq!(env.data.len(), 1);
    assert_eq!(env.data[0].partner_id, "partner1");

    let call = &mock.calls()[0];
    assert_eq!(call.method, Method::GET);
    assert_eq!(
        call.query.present().collect::<Vec<_>>(),
        vec![("activityId", "activity1"), ("isActive", "true")]
    );
}

#[tokio::test]
async fn activity_partner_link_requires_ids() {
    let mock = MockTransport::unconfigured();
    let system = system(&mock);

    let result = system
        .activity_partners
        .create_link(ActivityPartnerCreate {
            activity_id: "activity2".into(),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
}

#[tokio::test]
async fn blank_updates_are_rejected_and_leave_records_unchanged() {
    let mock = MockTransport::unconfigured();
    let system = system(&mock);

    system
        .partner_pocs
        .create_poc(PartnerPocCreate {
            partner_id: "partner1".into(),
            name: "Ann".into(),
            email: "ann@greenfuture.org".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let result = system
        .partner_pocs
        .update_poc(
            "poc_1".into(),
            PartnerPocUpdate {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(
        result,
        Err(ClientError::InvalidRequest("contact name is required".into()))
    );
    assert_eq!(system.partner_pocs.get("poc_1".into()).await.unwrap().data.name, "Ann");

    let result = system
        .activity_partners
        .update_link(
            "activity_partner1".into(),
            ActivityPartnerUpdate {
                name: Some("Renamed".into()),
                partner_id: Some(" ".into()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(
        result,
        Err(ClientError::InvalidRequest("partnerId is required".into()))
    );
    let link = system.activity_partners.get("activity_partner1".into()).await.unwrap().data;
    assert_eq!(link.partner_id, "partner1");
    assert_eq!(link.name, "Green Future Foundation");

    let registrations = system.booking.local();
    let stored = registrations
        .create(RegistrationSync {
            third_party_id: "tp-3".into(),
            event_id: "1".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let result = registrations
        .update(
            stored.id.clone(),
            RegistrationUpdate {
                status: Some(String::new()),
            },
        )
        .await;
    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    assert_eq!(
        registrations.get(stored.id).await.unwrap().map(|r| r.status),
        Some("registered".into())
    );
}

#[tokio::test]
async fn volunteer_validation_errors_are_final() {
    let mock = MockTransport::unconfigured();
    let system = system(&mock);

    let result = system
        .volunteers
        .create_volunteer(VolunteerCreate {
            first_name: "Ada".into(),
            last_name: "Park".into(),
            email: "not-an-email".into(),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    assert_eq!(system.volunteers.list().await.unwrap().data.len(), 2);
}

#[tokio::test]
async fn booking_sync_prefers_backend() {
    let mock = MockTransport::new();
    mock.expect_post("/v2/booking/registration").return_json(json!({
        "id": "reg-1",
        "thirdPartyId": "tp-1",
        "eventId": "1",
        "status": "confirmed"
    }));
    mock.expect_delete("/v2/developer-api/v2/registrations/reg-1")
        .return_status(404, "Not Found");
    let system = system(&mock);

    let synced = system
        .booking
        .sync_registration(RegistrationSync {
            third_party_id: "tp-1".into(),
            event_id: "1".into(),
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah.johnson@email.com".into(),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(synced.source, Source::Remote);
    assert_eq!(synced.data.status, "confirmed");

    // The remote registration was never stored locally.
    assert_eq!(
        system.booking.cancel("reg-1".into()).await,
        Err(ClientError::NotFound("reg-1".into()))
    );
    mock.verify();
}

#[tokio::test]
async fn register_falls_back_and_is_found_by_third_party_id() {
    let mock = MockTransport::new();
    mock.expect_post("/v2/developer-api/v2/registrations")
        .return_status(500, "Internal Server Error");
    mock.expect_get("/v2/booking/third-party-id/tp-9")
        .return_status(404, "Not Found");
    let system = system(&mock);

    let registered = system
        .booking
        .register(RegistrationSync {
            third_party_id: "tp-9".into(),
            event_id: "2".into(),
            first_name: "Lee".into(),
            last_name: "Chen".into(),
            email: "lee.chen@email.com".into(),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(registered.source, Source::Local);
    assert_eq!(registered.data.status, "registered");

    let sent = mock.calls()[0].body.clone().unwrap();
    assert_eq!(sent["thirdPartyId"], json!("tp-9"));

    let found = system.booking.find_by_third_party_id("tp-9".into()).await.unwrap();
    assert_eq!(found.source, Source::Local);
    assert_eq!(found.data.id, registered.data.id);
    mock.verify();
}
