//! Background snapshot saving.
//!
//! The save runs on Tokio's blocking pool so file I/O never stalls an
//! async task. Unlike a fire-and-forget thread, [`spawn_save`] hands
//! back a [`SaveHandle`], and shutdown waits on it so the snapshot on
//! disk always reflects the final state.
//!
//! ```ignore
//! let handle = spawn_save(store, inventory);
//! if let Err(e) = handle.wait().await {
//!     // already logged by the task; exit normally
//! }
//! ```

use std::sync::Arc;

use innkeep_room::RoomInventory;
use tokio::task::JoinHandle;

use crate::{SnapshotStore, StoreError};

/// Handle to an in-flight snapshot save.
#[derive(Debug)]
pub struct SaveHandle {
    task: JoinHandle<Result<(), StoreError>>,
}

impl SaveHandle {
    /// Waits for the save to finish and returns its outcome.
    pub async fn wait(self) -> Result<(), StoreError> {
        self.task
            .await
            .map_err(|e| StoreError::TaskFailed(e.to_string()))?
    }

    /// Returns `true` once the save has finished (successfully or not).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Starts saving `inventory` to `store` in the background.
///
/// Takes the inventory by value: once the caller hands it over, no
/// further mutation can sneak into the snapshot.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_save<S: SnapshotStore>(
    store: Arc<S>,
    inventory: RoomInventory,
) -> SaveHandle {
    let task = tokio::task::spawn_blocking(move || {
        let result = store.save(&inventory);
        match &result {
            Ok(()) => tracing::info!(
                occupied = inventory.occupied_rooms().len(),
                "hotel data saved"
            ),
            Err(e) => tracing::error!(error = %e, "error saving hotel data"),
        }
        result
    });
    SaveHandle { task }
}
