use crate::clients::{ActivityClient, RoutineActivityClient, RoutineClient};
use tracing::{error, info};

/// The runtime orchestrator for the tracker's store actors.
///
/// `TrackerSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping all stores
/// - **Dependency Wiring**: connecting stores that depend on each other (the
///   routine-activity store consults the routine and activity stores)
///
/// # Architecture
///
/// Three stores run, one task each:
/// - **Routine store**: routines, the ownership anchor for authorization
/// - **Activity store**: reusable exercise definitions
/// - **RoutineActivity store**: the join records; its context carries clients
///   for the other two so creates can verify both references
///
/// # Example
///
/// ```ignore
/// let system = TrackerSystem::new();
///
/// let routine = system.routine_client.create_routine(params).await?;
/// let record = system
///     .routine_activity_client
///     .create_routine_activity(fields)
///     .await?;
///
/// system.shutdown().await?;
/// ```
pub struct TrackerSystem {
    /// Client for the RoutineActivity store (and the authorization gate)
    pub routine_activity_client: RoutineActivityClient,

    /// Client for the Routine store
    pub routine_client: RoutineClient,

    /// Client for the Activity store
    pub activity_client: ActivityClient,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TrackerSystem {
    /// Creates and initializes a new `TrackerSystem` with all stores running.
    pub fn new() -> Self {
        // 1. Create stores (routine and activity have no dependencies)
        let (routine_actor, routine_client) = crate::routine::new();
        let (activity_actor, activity_client) = crate::activity::new();
        let (routine_activity_actor, routine_activity_client) =
            crate::routine_activity::new(routine_client.clone());

        // 2. Start stores with injected context
        let routine_handle = tokio::spawn(routine_actor.run(()));
        let activity_handle = tokio::spawn(activity_actor.run(()));

        // The routine-activity store verifies both references on create
        // (Context = (RoutineClient, ActivityClient))
        let routine_activity_handle = tokio::spawn(
            routine_activity_actor.run((routine_client.clone(), activity_client.clone())),
        );

        Self {
            routine_activity_client,
            routine_client,
            activity_client,
            handles: vec![routine_handle, activity_handle, routine_activity_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each store actor drains its
    /// mailbox and exits. The routine-activity actor holds clones of the
    /// routine and activity clients in its context, so those two stores exit
    /// once it has — joining the handles in any order terminates.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.routine_activity_client);
        drop(self.routine_client);
        drop(self.activity_client);

        for handle in self.handles {
            // If the store task panicked, this returns an Err
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for TrackerSystem {
    fn default() -> Self {
        Self::new()
    }
}
