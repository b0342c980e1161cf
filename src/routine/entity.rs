//! StoreEntity trait implementation for the Routine record type.

use crate::framework::StoreEntity;
use crate::model::{Routine, RoutineCreate};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for Routine {
    type Id = String;
    type CreateParams = RoutineCreate;
    type UpdateParams = (); // Routines are not updated through this service
    type Context = ();

    fn from_create_params(id: String, params: RoutineCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            creator_id: params.creator_id,
            name: params.name,
            goal: params.goal,
            is_public: params.is_public,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }
}
