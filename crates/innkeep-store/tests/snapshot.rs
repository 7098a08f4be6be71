//! Integration tests for file snapshots and the background saver.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use innkeep_room::{
    GuestDetails, Occupancy, RoomCategory, RoomInventory, RoomNumber, RoomRecord,
};
use innkeep_store::{
    FileStore, SnapshotStore, StoreError, load_or_empty, spawn_save,
};

// =========================================================================
// Helpers
// =========================================================================

/// A unique path under the system temp dir. Removed on drop.
struct TempPath(PathBuf);

impl TempPath {
    fn new(name: &str) -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        Self(std::env::temp_dir().join(format!(
            "innkeep-{}-{n}-{name}.json",
            std::process::id()
        )))
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn occupied_inventory() -> RoomInventory {
    let mut inv = RoomInventory::new();
    inv.occupy(
        RoomCategory::LuxuryDouble,
        0,
        RoomRecord::new(Occupancy::Double {
            guest: GuestDetails::new("Asha", "555-1", "F"),
            companion: GuestDetails::new("Ravi", "555-2", "M"),
        }),
    )
    .unwrap();
    inv.occupy(
        RoomCategory::DeluxeSingle,
        3,
        RoomRecord::new(Occupancy::Single {
            guest: GuestDetails::new("Meera", "555-3", "F"),
        }),
    )
    .unwrap();
    inv
}

/// A store whose saves always fail.
struct BrokenStore;

impl SnapshotStore for BrokenStore {
    fn save(&self, _: &RoomInventory) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/dev/null/nope"),
            source: std::io::Error::other("disk on fire"),
        })
    }

    fn load(&self) -> Result<Option<RoomInventory>, StoreError> {
        Err(StoreError::TaskFailed("unreadable".into()))
    }
}

// =========================================================================
// FileStore
// =========================================================================

#[test]
fn test_load_missing_file_is_none() {
    let path = TempPath::new("missing");
    let store = FileStore::json(&path.0);
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_save_then_load_restores_inventory() {
    let path = TempPath::new("restore");
    let store = FileStore::json(&path.0);
    let inv = occupied_inventory();

    store.save(&inv).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded, inv);
    assert_eq!(loaded.occupied_rooms(), vec![RoomNumber(1), RoomNumber(44)]);
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let path = TempPath::new("overwrite");
    let store = FileStore::json(&path.0);

    store.save(&occupied_inventory()).unwrap();
    store.save(&RoomInventory::new()).unwrap();

    assert_eq!(store.load().unwrap(), Some(RoomInventory::new()));
}

#[test]
fn test_corrupt_snapshot_is_decode_error() {
    let path = TempPath::new("corrupt");
    std::fs::write(&path.0, b"{\"occupied\": [").unwrap();

    let store = FileStore::json(&path.0);
    assert!(matches!(store.load(), Err(StoreError::Decode(_))));
}

#[test]
fn test_load_or_empty_recovers_from_corrupt_snapshot() {
    let path = TempPath::new("recover");
    std::fs::write(&path.0, b"garbage").unwrap();

    let inv = load_or_empty(&FileStore::json(&path.0));
    assert_eq!(inv, RoomInventory::new());
}

#[test]
fn test_load_or_empty_with_missing_file() {
    let path = TempPath::new("fresh");
    let inv = load_or_empty(&FileStore::json(&path.0));
    for category in RoomCategory::ALL {
        assert_eq!(inv.available_count(category), category.capacity());
    }
}

#[test]
fn test_load_or_empty_with_failing_store() {
    assert_eq!(load_or_empty(&BrokenStore), RoomInventory::new());
}

// =========================================================================
// Background saver
// =========================================================================

#[tokio::test]
async fn test_spawn_save_writes_before_wait_returns() {
    let path = TempPath::new("spawned");
    let store = Arc::new(FileStore::json(&path.0));
    let inv = occupied_inventory();

    spawn_save(Arc::clone(&store), inv.clone()).wait().await.unwrap();

    assert_eq!(store.load().unwrap(), Some(inv));
}

#[tokio::test]
async fn test_spawn_save_reports_failure() {
    let handle = spawn_save(Arc::new(BrokenStore), RoomInventory::new());
    let err = handle.wait().await.unwrap_err();
    assert!(err.to_string().contains("disk on fire"));
}
