//! # Tiered Client
//!
//! Building blocks for a data client that answers every resource operation from
//! one of two tiers: a remote HTTP backend (primary) or a seeded in-memory store
//! (fallback). Callers always receive a uniform [`Envelope`], and transport
//! failures never reach them.
//!
//! ## Architecture Overview
//!
//! Four layers, leaves first:
//!
//! 1. **Transport** ([`Transport`], [`HttpTransport`]) - one HTTP request with
//!    bearer credential, timeout and status normalization
//! 2. **Resource Client** ([`ResourceClient`]) - fixed route templates per
//!    family, typed decoding, `NotSupported` for missing routes
//! 3. **Fallback Resolver** ([`FallbackResolver`], [`resolve`]) - tries the
//!    remote tier once and classifies the outcome
//! 4. **Local Data Source** ([`StoreActor`], [`StoreClient`]) - per-family
//!    actor that owns its records, with simulated latency
//!
//! ```text
//! caller -> FallbackResolver -> ResourceClient -> Transport
//!                 |
//!                 +-- on fallback --> StoreClient -> StoreActor
//! ```
//!
//! ## Why an Actor for the Local Tier?
//!
//! Each family's records live inside a single Tokio task and are only touched
//! while that task handles a message. Operations on one family are therefore
//! atomic without locks, and concurrent writes to the same id resolve as
//! last-write-wins by arrival order.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Core Abstractions
//!
//! ### [`StoreEntity`] and [`RemoteEntity`] - The Records
//!
//! A record implements [`StoreEntity`] to live in a local store (id, create
//! defaults, merge-on-update, actions) and [`RemoteEntity`] to bind its family
//! name and backend [`Routes`].
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//! use tiered_client::mock::MockTransport;
//! use tiered_client::{
//!     ClientError, FallbackResolver, NoAction, RemoteEntity, ResourceClient, Routes, Source,
//!     StoreActor, StoreEntity,
//! };
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note { id: String, text: String }
//! #[derive(Debug, Serialize)] struct NoteCreate { text: String }
//! #[derive(Debug, Serialize)] struct NoteUpdate { text: Option<String> }
//!
//! impl StoreEntity for Note {
//!     type Id = String;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Action = NoAction;
//!     type ActionResult = ();
//!
//!     fn id(&self) -> &String { &self.id }
//!     fn from_create_params(id: String, p: NoteCreate, _: DateTime<Utc>) -> Result<Self, ClientError> {
//!         Ok(Self { id, text: p.text })
//!     }
//!     fn on_update(&mut self, u: NoteUpdate, _: DateTime<Utc>) -> Result<(), ClientError> {
//!         if let Some(text) = u.text { self.text = text; }
//!         Ok(())
//!     }
//!     fn handle_action(&mut self, action: NoAction, _: DateTime<Utc>) -> Result<(), ClientError> {
//!         match action {}
//!     }
//! }
//!
//! impl RemoteEntity for Note {
//!     const FAMILY: &'static str = "notes";
//!     fn routes() -> Routes { Routes::crud("/notes", "/notes/{id}") }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = StoreActor::<Note>::new("notes", 16, || "note_1".to_string());
//!     tokio::spawn(actor.run());
//!
//!     let mock = MockTransport::new();
//!     mock.expect_post("/notes").return_status(503, "Service Unavailable");
//!
//!     let resolver = FallbackResolver::new(ResourceClient::new(Arc::new(mock.clone())), store);
//!     let created = resolver.create(NoteCreate { text: "hi".into() }).await.unwrap();
//!
//!     // The backend failed, so the local store answered.
//!     assert_eq!(created.source, Source::Local);
//!     assert_eq!(created.data.id, "note_1");
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockTransport`] scripts backend answers and records calls; see the
//! [`mock`] module for patterns. [`SimulatedLatency::none`] removes store delays.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod message;
pub mod mock;
pub mod resolver;
pub mod resource;
pub mod transport;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::{SimulatedLatency, StoreClient};
pub use client_trait::FamilyClient;
pub use entity::{NoAction, StoreEntity};
pub use envelope::{Envelope, Source};
pub use error::ClientError;
pub use message::{Response, StoreRequest};
pub use resolver::{classify, resolve, settle, try_remote, Decision, FallbackReason, FallbackResolver};
pub use resource::{send_typed, to_body, Operation, RemoteEntity, ResourceClient, Routes};
pub use transport::{ApiRequest, HttpTransport, QueryParams, Transport, TransportConfig};

// Re-exported so downstream crates can build requests and check addresses without a direct reqwest dependency.
pub use reqwest::{Method, Url};
