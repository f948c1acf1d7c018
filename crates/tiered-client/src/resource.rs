//! # Resource Client
//!
//! Binds a resource family to its fixed backend routes and decodes the JSON the
//! [`Transport`] returns into typed records.

use crate::entity::StoreEntity;
use crate::error::ClientError;
use crate::transport::{ApiRequest, QueryParams, Transport};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The logical operations a family can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Action,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Action => "action",
        };
        f.write_str(name)
    }
}

/// Path templates for one family. `None` means the backend has no endpoint
/// and the operation fails with `NotSupported` before any request is made.
///
/// Item routes contain an `{id}` placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Routes {
    pub list: Option<&'static str>,
    pub get: Option<&'static str>,
    pub create: Option<&'static str>,
    pub update: Option<&'static str>,
    pub delete: Option<&'static str>,
}

impl Routes {
    /// A family with no remote endpoints at all.
    pub const fn none() -> Self {
        Self {
            list: None,
            get: None,
            create: None,
            update: None,
            delete: None,
        }
    }

    /// List/create on `collection`, get/update/delete on `item`.
    pub const fn crud(collection: &'static str, item: &'static str) -> Self {
        Self {
            list: Some(collection),
            get: Some(item),
            create: Some(collection),
            update: Some(item),
            delete: Some(item),
        }
    }

    /// List and get only.
    pub const fn read_only(collection: &'static str, item: &'static str) -> Self {
        Self {
            list: Some(collection),
            get: Some(item),
            create: None,
            update: None,
            delete: None,
        }
    }

    pub fn template(&self, op: Operation) -> Option<&'static str> {
        match op {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
            Operation::Action => None,
        }
    }
}

/// Characters an id may keep as-is inside one path segment.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Expands `{id}` in a route template, percent-encoding the id so it stays a
/// single path segment.
pub fn expand(template: &str, id: &impl fmt::Display) -> String {
    let id = id.to_string();
    template.replace("{id}", &utf8_percent_encode(&id, ID_SEGMENT).to_string())
}

/// A [`StoreEntity`] that the backend also serves.
pub trait RemoteEntity: StoreEntity + DeserializeOwned {
    /// Family name used in logs and `NotSupported` errors, e.g. `"events"`.
    const FAMILY: &'static str;

    fn routes() -> Routes;

    /// Remote request for a family action, or `None` when the backend does
    /// not offer it.
    fn action_request(_id: &Self::Id, _action: &Self::Action) -> Option<ApiRequest> {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

/// Typed access to one family's backend endpoints.
///
/// Every method returns `Ok(None)` when the backend answered 2xx with no
/// payload. The [`FallbackResolver`](crate::FallbackResolver) treats that the
/// same as a failure.
pub struct ResourceClient<E: RemoteEntity> {
    transport: Arc<dyn Transport>,
    routes: Routes,
    _family: std::marker::PhantomData<fn() -> E>,
}

impl<E: RemoteEntity> Clone for ResourceClient<E> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            routes: self.routes,
            _family: std::marker::PhantomData,
        }
    }
}

impl<E: RemoteEntity> ResourceClient<E> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            routes: E::routes(),
            _family: std::marker::PhantomData,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_configured()
    }

    fn route(&self, op: Operation) -> Result<&'static str, ClientError> {
        self.routes.template(op).ok_or(ClientError::NotSupported {
            family: E::FAMILY,
            operation: op,
        })
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<R>, ClientError> {
        send_typed(self.transport.as_ref(), request).await
    }

    pub async fn list(&self, query: QueryParams) -> Result<Option<Vec<E>>, ClientError> {
        let path = self.route(Operation::List)?;
        let body: Option<ListBody<E>> = self.call(ApiRequest::get(path).with_query(query)).await?;
        Ok(body.map(|b| match b {
            ListBody::Bare(items) | ListBody::Wrapped { data: items } => items,
        }))
    }

    pub async fn get(&self, id: &E::Id) -> Result<Option<E>, ClientError> {
        let path = expand(self.route(Operation::Get)?, id);
        self.call(ApiRequest::get(path)).await
    }

    pub async fn create(&self, params: &E::Create) -> Result<Option<E>, ClientError> {
        let path = self.route(Operation::Create)?;
        let body = to_body(params)?;
        self.call(ApiRequest::post(path).with_body(body)).await
    }

    pub async fn update(&self, id: &E::Id, update: &E::Update) -> Result<Option<E>, ClientError> {
        let path = expand(self.route(Operation::Update)?, id);
        let body = to_body(update)?;
        self.call(ApiRequest::put(path).with_body(body)).await
    }

    /// Any non-null body counts as a confirmed delete.
    pub async fn delete(&self, id: &E::Id) -> Result<Option<bool>, ClientError> {
        let path = expand(self.route(Operation::Delete)?, id);
        let body = self.transport.send(ApiRequest::delete(path)).await?;
        Ok(body.map(|_| true))
    }

    pub async fn action(
        &self,
        id: &E::Id,
        action: &E::Action,
    ) -> Result<Option<E::ActionResult>, ClientError> {
        let request = E::action_request(id, action).ok_or(ClientError::NotSupported {
            family: E::FAMILY,
            operation: Operation::Action,
        })?;
        self.call(request).await
    }
}

/// Sends a request outside the CRUD routes and decodes its answer.
pub async fn send_typed<R: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
) -> Result<Option<R>, ClientError> {
    match transport.send(request).await? {
        Some(value) => decode(value).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ClientError> {
    serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "Response did not match the record shape");
        ClientError::malformed(e)
    })
}

pub fn to_body(payload: &impl Serialize) -> Result<Value, ClientError> {
    serde_json::to_value(payload).map_err(|e| ClientError::InvalidRequest(e.to_string()))
}
