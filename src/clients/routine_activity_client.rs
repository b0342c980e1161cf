use crate::clients::routine_client::RoutineClient;
use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{RoutineActivity, RoutineActivityCreate, RoutineActivityUpdate};
use crate::routine_activity::RoutineActivityError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the RoutineActivity store.
///
/// Also hosts the authorization gate: ownership of a routine activity is not
/// stored on the record, so [`RoutineActivityClient::can_edit`] resolves it
/// through the parent routine's `creator_id`.
#[derive(Clone)]
pub struct RoutineActivityClient {
    inner: StoreClient<RoutineActivity>,
    routines: RoutineClient,
}

impl RoutineActivityClient {
    pub fn new(inner: StoreClient<RoutineActivity>, routines: RoutineClient) -> Self {
        Self { inner, routines }
    }
}

#[async_trait]
impl StoreHandle<RoutineActivity> for RoutineActivityClient {
    type Error = RoutineActivityError;

    fn inner(&self) -> &StoreClient<RoutineActivity> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}

impl RoutineActivityClient {
    /// Create a routine activity under its caller-supplied id.
    ///
    /// The store rejects a duplicate id ([`RoutineActivityError::AlreadyExists`])
    /// and a dangling routine/activity reference
    /// ([`RoutineActivityError::CreationFailed`]).
    #[instrument(skip(self, params))]
    pub async fn create_routine_activity(
        &self,
        params: RoutineActivityCreate,
    ) -> Result<RoutineActivity, RoutineActivityError> {
        debug!(?params, "Sending request");
        let id = params.id.clone();
        self.inner.create(id, params).await.map_err(Self::map_error)
    }

    /// Apply a partial update (`count` and/or `duration`) to a routine activity.
    #[instrument(skip(self))]
    pub async fn update_routine_activity(
        &self,
        id: String,
        update: RoutineActivityUpdate,
    ) -> Result<RoutineActivity, RoutineActivityError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The authorization gate: may `user_id` mutate routine activity `id`?
    ///
    /// Resolves the record, follows `routine_id` to the owning routine, and
    /// compares the routine's `creator_id` to the acting user. Returns false
    /// when the record does not exist, when the routine does not exist, or
    /// when the owner differs.
    #[instrument(skip(self))]
    pub async fn can_edit(&self, id: &str, user_id: &str) -> Result<bool, RoutineActivityError> {
        let record = match self.inner.get(id.to_string()).await.map_err(Self::map_error)? {
            Some(record) => record,
            None => return Ok(false),
        };

        let routine = self
            .routines
            .get(record.routine_id.clone())
            .await
            .map_err(|e| RoutineActivityError::Store(e.to_string()))?;

        match routine {
            Some(routine) => Ok(routine.creator_id == user_id),
            None => Ok(false),
        }
    }
}
