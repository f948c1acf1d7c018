//! # Fallback Resolver
//!
//! Chooses which tier answers an operation. The remote tier is tried at most
//! once; its outcome is classified by [`classify`], and anything other than a
//! usable payload sends the operation to the local store. Exactly one tier
//! answers each call.
//!
//! | remote outcome | answered by |
//! |---|---|
//! | no credential (never called) | local |
//! | `Ok(Some(data))` | remote |
//! | `Ok(None)` (2xx without payload) | local |
//! | `NotSupported` (transport never called) | local |
//! | any other error | local |

use crate::client::StoreClient;
use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::resource::{Operation, RemoteEntity, ResourceClient};
use crate::transport::QueryParams;
use std::fmt;
use std::future::Future;
use tracing::{debug, warn};

/// Why the local tier answered.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    Unconfigured,
    NotSupported,
    EmptySuccess,
    Failed(ClientError),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Unconfigured => f.write_str("no credential configured"),
            FallbackReason::NotSupported => f.write_str("no remote endpoint"),
            FallbackReason::EmptySuccess => f.write_str("remote returned no data"),
            FallbackReason::Failed(e) => write!(f, "remote failed: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision<T> {
    UseRemote(T),
    FallBack(FallbackReason),
}

/// Classifies one remote outcome. Pure, so the policy is testable without a
/// network.
pub fn classify<T>(outcome: Result<Option<T>, ClientError>) -> Decision<T> {
    match outcome {
        Ok(Some(data)) => Decision::UseRemote(data),
        Ok(None) => Decision::FallBack(FallbackReason::EmptySuccess),
        Err(ClientError::NotSupported { .. }) => Decision::FallBack(FallbackReason::NotSupported),
        Err(ClientError::Unconfigured) => Decision::FallBack(FallbackReason::Unconfigured),
        Err(e) => Decision::FallBack(FallbackReason::Failed(e)),
    }
}

/// Attempts the remote tier, or skips it when no credential is configured.
pub async fn try_remote<T, R, RF>(configured: bool, remote: R) -> Decision<T>
where
    R: FnOnce() -> RF,
    RF: Future<Output = Result<Option<T>, ClientError>>,
{
    if configured {
        classify(remote().await)
    } else {
        Decision::FallBack(FallbackReason::Unconfigured)
    }
}

/// Turns a decision into an envelope, calling `local` on fallback. Errors
/// from `local` are final.
pub async fn settle<T, L, LF>(
    family: &'static str,
    operation: Operation,
    decision: Decision<T>,
    local: L,
) -> Result<Envelope<T>, ClientError>
where
    L: FnOnce() -> LF,
    LF: Future<Output = Result<T, ClientError>>,
{
    match decision {
        Decision::UseRemote(data) => {
            debug!(family, %operation, "Answered remotely");
            Ok(Envelope::remote(data))
        }
        Decision::FallBack(reason) => {
            match &reason {
                FallbackReason::Failed(_) | FallbackReason::EmptySuccess => {
                    warn!(family, %operation, %reason, "Falling back to local data")
                }
                _ => debug!(family, %operation, %reason, "Falling back to local data"),
            }
            local().await.map(Envelope::local)
        }
    }
}

/// Runs one operation under the fallback policy: [`try_remote`] then [`settle`].
///
/// When `local` needs to take ownership of something `remote` borrows, call
/// the two steps separately.
pub async fn resolve<T, R, RF, L, LF>(
    family: &'static str,
    operation: Operation,
    configured: bool,
    remote: R,
    local: L,
) -> Result<Envelope<T>, ClientError>
where
    R: FnOnce() -> RF,
    RF: Future<Output = Result<Option<T>, ClientError>>,
    L: FnOnce() -> LF,
    LF: Future<Output = Result<T, ClientError>>,
{
    let decision = try_remote(configured, remote).await;
    settle(family, operation, decision, local).await
}

/// Fallback policy bound to one family's remote and local clients.
pub struct FallbackResolver<E: RemoteEntity> {
    remote: ResourceClient<E>,
    local: StoreClient<E>,
}

impl<E: RemoteEntity> Clone for FallbackResolver<E> {
    fn clone(&self) -> Self {
        Self {
            remote: self.remote.clone(),
            local: self.local.clone(),
        }
    }
}

impl<E: RemoteEntity> FallbackResolver<E> {
    pub fn new(remote: ResourceClient<E>, local: StoreClient<E>) -> Self {
        Self { remote, local }
    }

    pub fn remote(&self) -> &ResourceClient<E> {
        &self.remote
    }

    pub fn local(&self) -> &StoreClient<E> {
        &self.local
    }

    fn configured(&self) -> bool {
        self.remote.is_configured()
    }

    pub async fn list(&self) -> Result<Envelope<Vec<E>>, ClientError> {
        self.list_where(QueryParams::new(), |_| true).await
    }

    /// Lists with backend query parameters. A local answer applies
    /// `predicate` instead, since the store knows nothing about the query.
    pub async fn list_where(
        &self,
        query: QueryParams,
        predicate: impl Fn(&E) -> bool + Send + Sync,
    ) -> Result<Envelope<Vec<E>>, ClientError> {
        resolve(
            E::FAMILY,
            Operation::List,
            self.configured(),
            || self.remote.list(query),
            || async {
                let mut items = self.local.list().await?;
                items.retain(|item| predicate(item));
                Ok::<_, ClientError>(items)
            },
        )
        .await
    }

    /// A local miss is `NotFound`.
    pub async fn get(&self, id: E::Id) -> Result<Envelope<E>, ClientError> {
        let decision = try_remote(self.configured(), || self.remote.get(&id)).await;
        settle(E::FAMILY, Operation::Get, decision, || async move {
            let missing = id.to_string();
            self.local.get(id).await?.ok_or(ClientError::NotFound(missing))
        })
        .await
    }

    pub async fn create(&self, params: E::Create) -> Result<Envelope<E>, ClientError> {
        let decision = try_remote(self.configured(), || self.remote.create(&params)).await;
        settle(E::FAMILY, Operation::Create, decision, || {
            self.local.create(params)
        })
        .await
    }

    pub async fn update(&self, id: E::Id, update: E::Update) -> Result<Envelope<E>, ClientError> {
        let decision = try_remote(self.configured(), || self.remote.update(&id, &update)).await;
        settle(E::FAMILY, Operation::Update, decision, || {
            self.local.update(id, update)
        })
        .await
    }

    pub async fn delete(&self, id: E::Id) -> Result<Envelope<bool>, ClientError> {
        let decision = try_remote(self.configured(), || self.remote.delete(&id)).await;
        settle(E::FAMILY, Operation::Delete, decision, || self.local.delete(id)).await
    }

    pub async fn action(
        &self,
        id: E::Id,
        action: E::Action,
    ) -> Result<Envelope<E::ActionResult>, ClientError> {
        let decision = try_remote(self.configured(), || self.remote.action(&id, &action)).await;
        settle(E::FAMILY, Operation::Action, decision, || {
            self.local.perform_action(id, action)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_every_outcome() {
        assert_eq!(classify(Ok(Some(1))), Decision::UseRemote(1));
        assert_eq!(
            classify::<u8>(Ok(None)),
            Decision::FallBack(FallbackReason::EmptySuccess)
        );
        assert_eq!(
            classify::<u8>(Err(ClientError::NotSupported {
                family: "partners",
                operation: Operation::Get,
            })),
            Decision::FallBack(FallbackReason::NotSupported)
        );
        assert_eq!(
            classify::<u8>(Err(ClientError::Timeout)),
            Decision::FallBack(FallbackReason::Failed(ClientError::Timeout))
        );
    }

    #[tokio::test]
    async fn unconfigured_never_calls_remote() {
        let called = std::cell::Cell::new(false);
        let env = resolve(
            "events",
            Operation::List,
            false,
            || async {
                called.set(true);
                Ok(Some(vec![9]))
            },
            || async { Ok(vec![1, 2]) },
        )
        .await
        .unwrap();
        assert!(!called.get());
        assert_eq!(env, Envelope::local(vec![1, 2]));
    }

    #[tokio::test]
    async fn local_errors_are_final() {
        let result: Result<Envelope<u8>, _> = resolve(
            "events",
            Operation::Get,
            true,
            || async { Err(ClientError::Timeout) },
            || async { Err(ClientError::NotFound("event_9".into())) },
        )
        .await;
        assert_eq!(result, Err(ClientError::NotFound("event_9".into())));
    }
}
