use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Routine, RoutineCreate};
use crate::routine::RoutineError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the Routine store.
///
/// Routine ids are server-generated; the counter is shared across clones of
/// this client so concurrent creates never collide.
#[derive(Clone)]
pub struct RoutineClient {
    inner: StoreClient<Routine>,
    next_id: Arc<AtomicU64>,
}

impl RoutineClient {
    pub fn new(inner: StoreClient<Routine>) -> Self {
        Self {
            inner,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn create_routine(&self, params: RoutineCreate) -> Result<Routine, RoutineError> {
        debug!(?params, "Sending request");
        let id = format!("routine_{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.inner.create(id, params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<Routine> for RoutineClient {
    type Error = RoutineError;

    fn inner(&self) -> &StoreClient<Routine> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}
