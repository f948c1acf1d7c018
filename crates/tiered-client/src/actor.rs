//! # Local Store Actor
//!
//! `StoreActor` is the server half of the local data tier. It owns one family's
//! records and processes requests sequentially, so the record map needs no lock.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::ClientError;
use crate::message::StoreRequest;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The in-memory store for one resource family.
///
/// Records are kept in an [`IndexMap`] so `List` returns them in insertion
/// order; deletes use `shift_remove` to keep that order intact. Every reply is
/// a clone, callers never hold a reference into the store.
///
/// # Usage Pattern
///
/// 1. **Create**: `StoreActor::new()` returns the actor and its [`StoreClient`].
/// 2. **Seed**: `with_records()` loads the deterministic dataset.
/// 3. **Run**: spawn `actor.run()`; it exits once every client is dropped.
///
/// ```rust
/// use tiered_client::{ClientError, NoAction, StoreActor, StoreEntity};
/// use chrono::{DateTime, Utc};
/// use serde::Serialize;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: String, text: String }
/// #[derive(Debug, Serialize)] struct NoteCreate { text: String }
/// #[derive(Debug, Serialize)] struct NoteUpdate { text: Option<String> }
///
/// impl StoreEntity for Note {
///     type Id = String;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoAction;
///     type ActionResult = ();
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, p: NoteCreate, _: DateTime<Utc>) -> Result<Self, ClientError> {
///         Ok(Self { id, text: p.text })
///     }
///     fn on_update(&mut self, u: NoteUpdate, _: DateTime<Utc>) -> Result<(), ClientError> {
///         if let Some(text) = u.text { self.text = text; }
///         Ok(())
///     }
///     fn handle_action(&mut self, action: NoAction, _: DateTime<Utc>) -> Result<(), ClientError> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new("notes", 16, || "note_1".to_string());
///     tokio::spawn(actor.run());
///
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, "note_1");
/// }
/// ```
pub struct StoreActor<T: StoreEntity> {
    family: &'static str,
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates an empty store and the client that talks to it.
    ///
    /// `buffer_size` bounds the request channel; callers wait when it is full.
    /// `next_id_fn` must be monotonic; ids already present are skipped.
    pub fn new(
        family: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            family,
            receiver,
            store: IndexMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, StoreClient::new(family, sender))
    }

    /// Loads seed records in the given order.
    pub fn with_records(mut self, records: impl IntoIterator<Item = T>) -> Self {
        for record in records {
            self.store.insert(record.id().clone(), record);
        }
        self
    }

    /// Next free id, skipping ids in the store and in `pending`.
    fn allocate_id(&self, pending: &IndexMap<T::Id, T>) -> Result<T::Id, ClientError> {
        for _ in 0..=self.store.len() + pending.len() {
            let id = (self.next_id_fn)();
            if !self.store.contains_key(&id) && !pending.contains_key(&id) {
                return Ok(id);
            }
        }
        Err(ClientError::InvalidRequest(format!(
            "id generator for {} produced only existing ids",
            self.family
        )))
    }

    /// Builds every record before inserting any, so one invalid entry leaves
    /// the store untouched.
    fn create_all(&mut self, params: Vec<T::Create>) -> Result<Vec<T>, ClientError> {
        let now = Utc::now();
        let mut staged = IndexMap::with_capacity(params.len());
        for params in params {
            let id = self.allocate_id(&staged)?;
            let item = T::from_create_params(id.clone(), params, now)?;
            staged.insert(id, item);
        }
        let created = staged.values().cloned().collect();
        self.store.extend(staged);
        Ok(created)
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        let family = self.family;
        info!(family, size = self.store.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(family, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(family, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Create { params, respond_to } => {
                    debug!(family, ?params, "Create");
                    let result = self.allocate_id(&IndexMap::new()).and_then(|id| {
                        let item = T::from_create_params(id.clone(), params, Utc::now())?;
                        self.store.insert(id, item.clone());
                        Ok(item)
                    });
                    match &result {
                        Ok(item) => info!(family, id = %item.id(), size = self.store.len(), "Created"),
                        Err(e) => warn!(family, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::CreateMany { params, respond_to } => {
                    debug!(family, count = params.len(), "Create many");
                    let result = self.create_all(params);
                    match &result {
                        Ok(items) => info!(family, count = items.len(), size = self.store.len(), "Created"),
                        Err(e) => warn!(family, error = %e, "Create many failed, nothing stored"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(family, %id, ?update, "Update");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.on_update(update, Utc::now()).map(|()| item.clone()),
                        None => Err(ClientError::NotFound(id.to_string())),
                    };
                    match &result {
                        Ok(_) => info!(family, %id, "Updated"),
                        Err(e) => warn!(family, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(family, %id, "Delete");
                    if self.store.shift_remove(&id).is_some() {
                        info!(family, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(true));
                    } else {
                        warn!(family, %id, "Not found");
                        let _ = respond_to.send(Err(ClientError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(family, %id, ?action, "Action");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action, Utc::now()),
                        None => Err(ClientError::NotFound(id.to_string())),
                    };
                    match &result {
                        Ok(_) => info!(family, %id, "Action ok"),
                        Err(e) => warn!(family, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(family, size = self.store.len(), "Shutdown");
    }
}
