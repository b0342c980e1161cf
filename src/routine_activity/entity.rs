//! StoreEntity trait implementation for the RoutineActivity record type.

use crate::clients::{ActivityClient, RoutineClient, StoreHandle};
use crate::framework::StoreEntity;
use crate::model::{RoutineActivity, RoutineActivityCreate, RoutineActivityUpdate};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for RoutineActivity {
    type Id = String;
    type CreateParams = RoutineActivityCreate;
    type UpdateParams = RoutineActivityUpdate;
    type Context = (RoutineClient, ActivityClient);

    fn from_create_params(id: String, params: RoutineActivityCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            routine_id: params.routine_id,
            activity_id: params.activity_id,
            duration: params.duration,
            count: params.count,
        })
    }

    /// Both referenced records must exist before the join row is stored.
    /// A dangling reference rejects the create, mirroring a foreign-key
    /// constraint in a relational store.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), String> {
        let (routines, activities) = ctx;

        let routine = routines
            .get(self.routine_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        if routine.is_none() {
            return Err(format!("routine {} does not exist", self.routine_id));
        }

        let activity = activities
            .get(self.activity_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        if activity.is_none() {
            return Err(format!("activity {} does not exist", self.activity_id));
        }

        Ok(())
    }

    /// Applies only the supplied fields; `id`, `routine_id` and `activity_id`
    /// are immutable.
    async fn on_update(
        &mut self,
        update: RoutineActivityUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), String> {
        if let Some(count) = update.count {
            self.count = count;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        Ok(())
    }
}
