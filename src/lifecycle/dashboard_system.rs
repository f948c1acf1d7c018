use crate::clients::{
    ActivityClient, ActivityPartnerClient, AuthClient, BookingClient, EventClient, PartnerClient,
    PartnerPocClient, VolunteerClient,
};
use crate::config::SdkConfig;
use crate::error::DashboardError;
use crate::model::{Activity, Event, Partner, Volunteer};
use crate::seed::Dataset;
use crate::stores::{self, LatencyProfile};
use std::sync::Arc;
use tiered_client::{
    ClientError, Envelope, FallbackResolver, FamilyClient, HttpTransport, RemoteEntity,
    ResourceClient, StoreActor, StoreClient, StoreEntity, Transport,
};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Composition root for the dashboard data client.
///
/// `DashboardSystem` is responsible for:
/// - **Lifecycle Management**: spawning one store task per family and stopping them
/// - **Dependency Wiring**: sharing one [`Transport`] across every family client
/// - **Seeding**: loading each store from a [`Dataset`]
///
/// There is no global instance; the owner decides when to shut it down.
///
/// # Example
///
/// ```ignore
/// let system = DashboardSystem::new(&config, LatencyProfile::Realistic)?;
///
/// let events = system.events.list().await?;
/// let created = system.events.create_event(EventCreate::titled("Park cleanup")).await?;
///
/// system.shutdown().await?;
/// ```
pub struct DashboardSystem {
    pub events: EventClient,
    pub partners: PartnerClient,
    pub activities: ActivityClient,
    pub volunteers: VolunteerClient,
    pub partner_pocs: PartnerPocClient,
    pub activity_partners: ActivityPartnerClient,
    pub booking: BookingClient,
    pub auth: AuthClient,

    transport: Arc<dyn Transport>,

    /// Store task handles, awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

/// The four lists shown on the dashboard home screen, fetched together.
#[derive(Debug, Clone)]
pub struct Overview {
    pub events: Envelope<Vec<Event>>,
    pub partners: Envelope<Vec<Partner>>,
    pub activities: Envelope<Vec<Activity>>,
    pub volunteers: Envelope<Vec<Volunteer>>,
}

impl Overview {
    /// Volunteer places still free across all events.
    pub fn open_spots(&self) -> u32 {
        self.events.data.iter().map(Event::open_spots).sum()
    }

    pub fn active_partners(&self) -> usize {
        self.partners.data.iter().filter(|p| p.is_active).count()
    }
}

impl DashboardSystem {
    /// Builds the system against the real backend described by `config`,
    /// seeded with the default [`Dataset`]. Must be called inside a Tokio
    /// runtime.
    pub fn new(config: &SdkConfig, profile: LatencyProfile) -> Result<Self, DashboardError> {
        config.validate()?;
        let transport = HttpTransport::new(config.transport_config())?;
        info!(
            base_url = %config.base_url,
            configured = config.is_configured(),
            "Starting dashboard system"
        );
        Ok(Self::with_transport(Arc::new(transport), profile, Dataset::default()))
    }

    /// Builds the system on any transport with an explicit seed. Tests use
    /// this with a [`MockTransport`](tiered_client::mock::MockTransport).
    pub fn with_transport(transport: Arc<dyn Transport>, profile: LatencyProfile, seed: Dataset) -> Self {
        let mut handles = Vec::new();

        let events = resolver(&transport, &mut handles, stores::event::new(seed.events, profile));
        let partners = resolver(&transport, &mut handles, stores::partner::new(seed.partners, profile));
        let activities = resolver(
            &transport,
            &mut handles,
            stores::activity::new(seed.activities, profile),
        );
        let volunteers = resolver(
            &transport,
            &mut handles,
            stores::volunteer::new(seed.volunteers, profile),
        );
        let partner_pocs = resolver(
            &transport,
            &mut handles,
            stores::partner_poc::new(seed.partner_pocs, profile),
        );
        let activity_partners = resolver(
            &transport,
            &mut handles,
            stores::activity_partner::new(seed.activity_partners, profile),
        );
        let registrations = spawn(
            &mut handles,
            stores::registration::new(seed.registrations, profile),
        );

        Self {
            events: EventClient::new(events),
            partners: PartnerClient::new(partners),
            activities: ActivityClient::new(activities),
            volunteers: VolunteerClient::new(volunteers),
            partner_pocs: PartnerPocClient::new(partner_pocs),
            activity_partners: ActivityPartnerClient::new(activity_partners),
            booking: BookingClient::new(Arc::clone(&transport), registrations),
            auth: AuthClient::new(Arc::clone(&transport)),
            transport,
            handles,
        }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Whether a credential is configured, i.e. whether the backend is tried
    /// at all.
    pub fn is_configured(&self) -> bool {
        self.transport.is_configured()
    }

    /// Lists events, partners, activities and volunteers concurrently. Each
    /// family falls back on its own.
    #[tracing::instrument(skip(self))]
    pub async fn overview(&self) -> Result<Overview, ClientError> {
        let (events, partners, activities, volunteers) = tokio::join!(
            self.events.list(),
            self.partners.list(),
            self.activities.list(),
            self.volunteers.list(),
        );
        Ok(Overview {
            events: events?,
            partners: partners?,
            activities: activities?,
            volunteers: volunteers?,
        })
    }

    /// Gracefully shuts down every store.
    ///
    /// Dropping the clients closes each store's channel; the store task then
    /// drains and exits, and its handle is awaited here. Clones of the
    /// clients held elsewhere keep their store alive until they are dropped.
    pub async fn shutdown(self) -> Result<(), DashboardError> {
        info!("Shutting down dashboard system...");

        drop(self.events);
        drop(self.partners);
        drop(self.activities);
        drop(self.volunteers);
        drop(self.partner_pocs);
        drop(self.activity_partners);
        drop(self.booking);
        drop(self.auth);

        join_stores(self.handles).await?;

        info!("Dashboard system shutdown complete.");
        Ok(())
    }
}

/// Awaits every store task, then reports the first failure.
async fn join_stores(handles: Vec<JoinHandle<()>>) -> Result<(), DashboardError> {
    let mut first_failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Store task failed: {:?}", e);
            first_failure.get_or_insert(DashboardError::StoreTask(e.to_string()));
        }
    }
    first_failure.map_or(Ok(()), Err)
}

fn spawn<E: StoreEntity>(
    handles: &mut Vec<JoinHandle<()>>,
    (actor, client): (StoreActor<E>, StoreClient<E>),
) -> StoreClient<E> {
    handles.push(tokio::spawn(actor.run()));
    client
}

fn resolver<E: RemoteEntity>(
    transport: &Arc<dyn Transport>,
    handles: &mut Vec<JoinHandle<()>>,
    store: (StoreActor<E>, StoreClient<E>),
) -> FallbackResolver<E> {
    let local = spawn(handles, store);
    FallbackResolver::new(ResourceClient::new(Arc::clone(transport)), local)
}
