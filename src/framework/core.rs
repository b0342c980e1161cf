//! # Core Store Framework
//!
//! This module defines the generic building blocks for the entity stores.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait that all stored record types must implement.
//! - [`StoreActor`]: The generic actor that owns a collection of records.
//! - [`StoreClient`]: The generic client for communicating with a store.
//! - [`StoreError`]: Common store errors (e.g., ActorClosed, AlreadyExists).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks and DTOs)
// =============================================================================

/// Trait that any record type must implement to be managed by a [`StoreActor`].
///
/// # Architecture Note
/// By defining a contract (`StoreEntity`) that all our record types (Activity,
/// Routine, RoutineActivity) must satisfy, we write the store loop *once* and
/// reuse it for every entity. Associated types keep each store type-safe: a
/// routine-activity store only accepts routine-activity payloads.
///
/// # Identifiers
/// Record identifiers are supplied by the caller on create. The store enforces
/// uniqueness: a create for an id that is already present is rejected with
/// [`StoreError::AlreadyExists`], never overwritten.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other stores (e.g., a
/// record checking that the rows it references exist). The `Context` type is
/// injected into every hook at `run()` time, which lets dependencies be wired
/// after the actors are constructed.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record (DTO - Data Transfer Object).
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing record.
    type UpdateParams: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the store.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the full record from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built but before it is inserted.
    /// Rejecting here (e.g., a referenced record does not exist) aborts the
    /// create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called when an update request is received. Only the fields carried by
    /// `update` may change.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), String>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a store to request operations.
///
/// The variants map directly to the record lifecycle: **Create** inserts a new
/// record under a caller-supplied id, **Get** and **List** read current state,
/// **Update** applies a partial mutation through [`StoreEntity::on_update`],
/// and **Delete** removes the record and answers with its prior field values.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        id: T::Id,
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE GENERIC STORE ACTOR
// =============================================================================

/// The generic actor that owns a collection of records.
///
/// # Architecture Note
/// This struct is the "server" half of the store. It owns the state (`records`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `StoreActor` processes its messages *sequentially* in its own task, so
/// no `Mutex` or `RwLock` is needed for `records`, and a read issued after a
/// completed write observes that write. Requests from concurrent connections
/// interleave at message granularity; multi-step handler sequences
/// (existence-check-then-create) are not transactional, which is why Create
/// re-checks the id here rather than trusting the caller's lookup.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
}

impl<T: StoreEntity> StoreActor<T> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every entity hook. This allows
    /// records to consult other stores (e.g., a routine activity verifying its
    /// parent routine) that were wired up *after* this actor was constructed.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "RoutineActivity" instead of
        // "routine_tracker::model::routine_activity::RoutineActivity")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Create");
                    if self.records.contains_key(&id) {
                        warn!(entity_type, %id, "Duplicate id");
                        let _ = respond_to.send(Err(StoreError::AlreadyExists(id.to_string())));
                        continue;
                    }
                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            // Await the async hook; a rejection leaves the store untouched
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::Rejected(e)));
                                continue;
                            }
                            self.records.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.records.len(), "List");
                    let items: Vec<T> = self.records.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.records.get_mut(&id) {
                        // Await the async hook
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    match self.records.remove(&id) {
                        Some(item) => {
                            // Await the async hook; a rejection puts the record back
                            if let Err(e) = item.on_delete(&context).await {
                                warn!(entity_type, %id, error = %e, "on_delete failed");
                                self.records.insert(id.clone(), item);
                                let _ = respond_to.send(Err(StoreError::Rejected(e)));
                                continue;
                            }
                            info!(entity_type, %id, size = self.records.len(), "Deleted");
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `StoreActor`.
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Create a record under a caller-supplied id. Returns the stored record.
    pub async fn create(&self, id: T::Id, params: T::CreateParams) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create {
                id,
                params,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Delete a record. Returns the record's field values as of the delete.
    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
