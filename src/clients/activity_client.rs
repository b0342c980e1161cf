use crate::activity::ActivityError;
use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Activity, ActivityCreate};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the Activity store.
#[derive(Clone)]
pub struct ActivityClient {
    inner: StoreClient<Activity>,
    next_id: Arc<AtomicU64>,
}

impl ActivityClient {
    pub fn new(inner: StoreClient<Activity>) -> Self {
        Self {
            inner,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn create_activity(&self, params: ActivityCreate) -> Result<Activity, ActivityError> {
        debug!(?params, "Sending request");
        let id = format!("activity_{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.inner.create(id, params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<Activity> for ActivityClient {
    type Error = ActivityError;

    fn inner(&self) -> &StoreClient<Activity> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}
