//! # Local Store Client
//!
//! The caller half of the local data tier.

use crate::entity::StoreEntity;
use crate::error::ClientError;
use crate::message::StoreRequest;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Per-operation delay applied before a request reaches the store.
///
/// The delay runs in the caller's task, so a caller that gives up while
/// waiting never reaches the store at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub action: Duration,
}

impl SimulatedLatency {
    /// No delay at all. Use this in tests.
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
            action: delay,
        }
    }

    /// Overrides the read delays, which vary by family.
    pub const fn with_reads(self, list: Duration, get: Duration) -> Self {
        Self { list, get, ..self }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            get: Duration::from_millis(500),
            create: Duration::from_millis(1000),
            update: Duration::from_millis(800),
            delete: Duration::from_millis(500),
            action: Duration::from_millis(800),
        }
    }
}

/// A type-safe client for one family's [`StoreActor`](crate::StoreActor).
///
/// Cheap to clone: it holds only a channel sender. Once every clone is dropped
/// the actor drains its queue and exits.
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    family: &'static str,
    sender: mpsc::Sender<StoreRequest<T>>,
    latency: SimulatedLatency,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(family: &'static str, sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self {
            family,
            sender,
            latency: SimulatedLatency::none(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn latency(&self) -> SimulatedLatency {
        self.latency
    }

    async fn request<R>(
        &self,
        delay: Duration,
        build: impl FnOnce(oneshot::Sender<Result<R, ClientError>>) -> StoreRequest<T>,
    ) -> Result<R, ClientError> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ClientError::StoreClosed)?;
        response.await.map_err(|_| ClientError::StoreDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, ClientError> {
        self.request(self.latency.list, |respond_to| StoreRequest::List {
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ClientError> {
        self.request(self.latency.get, |respond_to| StoreRequest::Get {
            id,
            respond_to,
        })
        .await
    }

    pub async fn create(&self, params: T::Create) -> Result<T, ClientError> {
        self.request(self.latency.create, |respond_to| StoreRequest::Create {
            params,
            respond_to,
        })
        .await
    }

    /// Creates all records or none. One create delay covers the batch.
    pub async fn create_many(&self, params: Vec<T::Create>) -> Result<Vec<T>, ClientError> {
        self.request(self.latency.create, |respond_to| StoreRequest::CreateMany {
            params,
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, ClientError> {
        self.request(self.latency.update, |respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Removes a record. `NotFound` when the id is absent.
    pub async fn delete(&self, id: T::Id) -> Result<bool, ClientError> {
        self.request(self.latency.delete, |respond_to| StoreRequest::Delete {
            id,
            respond_to,
        })
        .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ClientError> {
        self.request(self.latency.action, |respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
