//! Demo: loads the saved credential (if any), prints the dashboard overview and
//! creates an event. Without a credential every answer comes from local data.

use poc_dashboard::config::{ConfigManager, EnvOverrides, FileConfigStore};
use poc_dashboard::lifecycle::DashboardSystem;
use poc_dashboard::model::EventCreate;
use poc_dashboard::stores::LatencyProfile;
use poc_dashboard::DashboardError;
use tiered_client::logging::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    setup_tracing();

    let config_dir = std::env::var("POC_SDK_CONFIG_DIR").unwrap_or_else(|_| ".".to_string());
    let config = ConfigManager::load(FileConfigStore::new(&config_dir))?
        .with_overrides(EnvOverrides::from_env()?)?
        .effective();

    let system = DashboardSystem::new(&config, LatencyProfile::Realistic)?;

    let overview = system
        .overview()
        .instrument(tracing::info_span!("overview"))
        .await?;
    info!(
        events = overview.events.data.len(),
        events_remote = overview.events.is_remote(),
        active_partners = overview.active_partners(),
        activities = overview.activities.data.len(),
        volunteers = overview.volunteers.data.len(),
        open_spots = overview.open_spots(),
        "Dashboard loaded"
    );

    let span = tracing::info_span!("event_creation");
    let created = async {
        info!("Creating demo event");
        system
            .events
            .create_event(EventCreate::titled("Neighborhood Tree Planting"))
            .await
    }
    .instrument(span)
    .await?;
    info!(event_id = %created.data.id, source = ?created.source, "Event created");

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
