//! # POC Dashboard Data Client
//!
//! > **Every dashboard read and write answers, with or without a backend.**
//!
//! This crate wires the generic machinery of [`tiered_client`] to the
//! dashboard's resource families: events, partners, activities, volunteers,
//! partner contacts, activity-partner links and booking registrations.
//!
//! Each operation tries the remote backend once. When there is no credential,
//! no endpoint for the operation, an error or an empty success, the family's
//! seeded in-memory store answers instead. Callers always get an
//! [`Envelope`](tiered_client::Envelope) and never see a transport error.
//!
//! ## Module Tour
//!
//! ### 1. The Records ([`model`])
//! Resource records and their create/update payloads, in the backend's JSON
//! shape.
//!
//! ### 2. The Bindings ([`stores`])
//! Per-family local store behaviour (defaults, merge rules, validation) and the
//! fixed backend routes.
//! - **Key items**: [`LatencyProfile`](stores::LatencyProfile), one `new()` factory per family.
//!
//! ### 3. The Interface ([`clients`])
//! Typed clients, one per family, plus [`BookingClient`](clients::BookingClient)
//! and [`AuthClient`](clients::AuthClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`DashboardSystem`](lifecycle::DashboardSystem) spawns the stores, shares one
//! transport and shuts everything down.
//!
//! ### 5. Settings ([`config`], [`seed`])
//! Persisted credential configuration with environment overrides, and the
//! default [`Dataset`](seed::Dataset).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use poc_dashboard::lifecycle::DashboardSystem;
//! use poc_dashboard::model::EventCreate;
//! use poc_dashboard::seed::Dataset;
//! use poc_dashboard::stores::LatencyProfile;
//! use tiered_client::mock::MockTransport;
//! use tiered_client::{FamilyClient, Source};
//!
//! #[tokio::main]
//! async fn main() {
//!     // No credential: everything is answered locally.
//!     let mock = MockTransport::unconfigured();
//!     let system = DashboardSystem::with_transport(
//!         Arc::new(mock.clone()),
//!         LatencyProfile::Instant,
//!         Dataset::default(),
//!     );
//!
//!     let created = system.events.create_event(EventCreate::titled("Park cleanup")).await.unwrap();
//!     assert_eq!(created.source, Source::Local);
//!     assert_eq!(system.events.list().await.unwrap().data.len(), 4);
//!     assert_eq!(mock.call_count(), 0);
//!
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Local data only
//! RUST_LOG=info cargo run
//!
//! # Against a backend
//! POC_SDK_TOKEN=... POC_SDK_BASE_URL=https://api.example.com RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod seed;
pub mod stores;

pub use error::DashboardError;
