//! StoreEntity trait implementation for the Activity record type.

use crate::framework::StoreEntity;
use crate::model::{Activity, ActivityCreate};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for Activity {
    type Id = String;
    type CreateParams = ActivityCreate;
    type UpdateParams = (); // Activities are not updated through this service
    type Context = ();

    fn from_create_params(id: String, params: ActivityCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }
}
