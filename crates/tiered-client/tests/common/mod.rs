#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tiered_client::{
    ApiRequest, ClientError, RemoteEntity, Routes, StoreActor, StoreClient, StoreEntity,
};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub priority: u8,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Serialize)]
pub struct TaskCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

#[derive(Debug, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

#[derive(Debug)]
pub enum TaskAction {
    Complete,
}

impl StoreEntity for Task {
    type Id = String;
    type Create = TaskCreate;
    type Update = TaskUpdate;
    type Action = TaskAction;
    type ActionResult = Task;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: TaskCreate, now: DateTime<Utc>) -> Result<Self, ClientError> {
        if params.priority.is_some_and(|p| p > 5) {
            return Err(ClientError::InvalidRequest("priority must be 1-5".into()));
        }
        Ok(Self {
            id,
            title: params.title.unwrap_or_else(|| "Untitled".into()),
            priority: params.priority.unwrap_or(3),
            done: false,
            updated_at: Some(now),
        })
    }

    fn on_update(&mut self, update: TaskUpdate, now: DateTime<Utc>) -> Result<(), ClientError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        self.updated_at = Some(now);
        Ok(())
    }

    fn handle_action(&mut self, action: TaskAction, now: DateTime<Utc>) -> Result<Task, ClientError> {
        match action {
            TaskAction::Complete => {
                if self.done {
                    return Err(ClientError::InvalidRequest(format!("{} already done", self.id)));
                }
                self.done = true;
                self.updated_at = Some(now);
                Ok(self.clone())
            }
        }
    }
}

impl RemoteEntity for Task {
    const FAMILY: &'static str = "tasks";

    fn routes() -> Routes {
        Routes::crud("/tasks", "/tasks/{id}")
    }

    fn action_request(id: &String, action: &TaskAction) -> Option<ApiRequest> {
        match action {
            TaskAction::Complete => Some(ApiRequest::post(format!("/tasks/{id}/complete"))),
        }
    }
}

/// A read-only family, for `NotSupported` paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
}

impl StoreEntity for Label {
    type Id = String;
    type Create = TaskCreate;
    type Update = TaskUpdate;
    type Action = tiered_client::NoAction;
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, _: TaskCreate, _: DateTime<Utc>) -> Result<Self, ClientError> {
        Ok(Self { id })
    }

    fn on_update(&mut self, _: TaskUpdate, _: DateTime<Utc>) -> Result<(), ClientError> {
        Ok(())
    }

    fn handle_action(&mut self, action: tiered_client::NoAction, _: DateTime<Utc>) -> Result<(), ClientError> {
        match action {}
    }
}

impl RemoteEntity for Label {
    const FAMILY: &'static str = "labels";

    fn routes() -> Routes {
        Routes::read_only("/labels", "/labels/{id}")
    }
}

// --- Helpers ---

pub fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.into(),
        title: title.into(),
        priority: 3,
        done: false,
        updated_at: None,
    }
}

pub fn id_generator(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = AtomicU64::new(1);
    move || format!("{prefix}_{}", counter.fetch_add(1, Ordering::SeqCst))
}

pub fn spawn_store<E: StoreEntity>(family: &'static str, seed: Vec<E>, next_id: impl Fn() -> E::Id + Send + Sync + 'static) -> StoreClient<E> {
    let (actor, client) = StoreActor::new(family, 32, next_id);
    tokio::spawn(actor.with_records(seed).run());
    client
}

pub fn task_store(seed: Vec<Task>) -> StoreClient<Task> {
    spawn_store("tasks", seed, id_generator("task"))
}
