//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod activity_client;
pub mod routine_activity_client;
pub mod routine_client;
pub mod store_handle;

pub use activity_client::*;
pub use routine_activity_client::*;
pub use routine_client::*;
pub use store_handle::*;
