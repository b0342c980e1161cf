//! Pure data structures (DTOs) implementing the [`StoreEntity`](crate::framework::StoreEntity) trait.

pub mod activity;
pub mod routine;
pub mod routine_activity;

pub use activity::*;
pub use routine::*;
pub use routine_activity::*;
