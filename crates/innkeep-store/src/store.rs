//! Snapshot stores: where the inventory lives between runs.

use std::io;
use std::path::{Path, PathBuf};

use innkeep_room::RoomInventory;

#[cfg(feature = "json")]
use crate::JsonCodec;
use crate::{Codec, StoreError};

/// File name used when no snapshot path is configured.
pub const DEFAULT_SNAPSHOT_FILE: &str = "hotel_backup.json";

/// Saves and loads whole-inventory snapshots.
///
/// A store holds at most one snapshot; `save` replaces it. There is no
/// partial update: the inventory is always written and read as a unit,
/// so a snapshot never mixes state from two different moments.
///
/// Both methods are synchronous. Callers that live on an async runtime
/// go through [`spawn_save`](crate::spawn_save), which moves the call
/// onto the blocking pool. That is also why the trait is
/// `Send + Sync + 'static`: the store is shared through an `Arc` with
/// that background task.
///
/// [`FileStore`] is the implementation the binary uses. Tests plug in
/// their own stores (one that always fails, for instance) to exercise
/// the error paths without touching the disk.
pub trait SnapshotStore: Send + Sync + 'static {
    /// Writes the entire inventory, overwriting any previous snapshot.
    fn save(&self, inventory: &RoomInventory) -> Result<(), StoreError>;

    /// Reads the last snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot has ever been saved.
    fn load(&self) -> Result<Option<RoomInventory>, StoreError>;
}

/// Loads the last snapshot, or an empty inventory if there is none or
/// it can't be read. Never fails: a bad snapshot is logged and skipped.
pub fn load_or_empty<S: SnapshotStore + ?Sized>(store: &S) -> RoomInventory {
    match store.load() {
        Ok(Some(inventory)) => {
            tracing::info!(
                occupied = inventory.occupied_rooms().len(),
                "previous hotel data loaded"
            );
            inventory
        }
        Ok(None) => {
            tracing::info!("no previous data found, starting fresh");
            RoomInventory::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "snapshot unreadable, starting fresh");
            RoomInventory::new()
        }
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// A [`SnapshotStore`] backed by a single file.
#[derive(Debug, Clone)]
pub struct FileStore<C: Codec> {
    path: PathBuf,
    codec: C,
}

impl<C: Codec> FileStore<C> {
    pub fn new(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(feature = "json")]
impl FileStore<JsonCodec> {
    /// A file store that writes JSON.
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::new(path, JsonCodec)
    }
}

impl<C: Codec> SnapshotStore for FileStore<C> {
    fn save(&self, inventory: &RoomInventory) -> Result<(), StoreError> {
        let bytes = self.codec.encode(inventory)?;
        std::fs::write(&self.path, &bytes).map_err(|e| self.io_error(e))?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            "snapshot written"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<RoomInventory>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        self.codec.decode(&bytes).map(Some)
    }
}
