//! Snapshot persistence for Innkeep.
//!
//! The whole [`RoomInventory`](innkeep_room::RoomInventory) is stored as
//! one document and read back at startup:
//!
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how an inventory
//!   becomes bytes
//! - **Store** ([`SnapshotStore`] trait, [`FileStore`]) — where those
//!   bytes live
//! - **Saver** ([`spawn_save`], [`SaveHandle`]) — the background save
//!   run at shutdown
//! - **Errors** ([`StoreError`])
//!
//! Loading is forgiving: [`load_or_empty`] turns a missing or unreadable
//! snapshot into an empty hotel instead of an error.

mod codec;
mod error;
mod saver;
mod store;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::StoreError;
pub use saver::{SaveHandle, spawn_save};
pub use store::{DEFAULT_SNAPSHOT_FILE, FileStore, SnapshotStore, load_or_empty};
