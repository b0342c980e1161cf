use crate::framework::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit standard read and delete
/// operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// common operations like `get`, `list` and `delete`, while each client maps
/// [`StoreError`] into its own resource error type.
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record in the store.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a record by ID, returning its prior field values.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
