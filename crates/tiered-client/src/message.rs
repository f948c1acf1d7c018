//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::StoreClient) to its
//! [`StoreActor`](crate::StoreActor). Each carries a oneshot channel for the reply.

use crate::entity::StoreEntity;
use crate::error::ClientError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, ClientError>>;

/// CRUD requests plus a family-specific `Action`.
///
/// The variants follow the resource lifecycle: `Create` and `CreateMany` start it, `Get` and
/// `List` read it, `Update` and `Action` mutate it, `Delete` ends it.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    /// Inserts every record or none of them.
    CreateMany {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
