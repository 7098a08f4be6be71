//! Codec trait and implementations for snapshot serialization.
//!
//! The store doesn't care HOW an inventory is turned into bytes, only
//! that something implements [`Codec`]. [`JsonCodec`] is the default:
//! a pretty-printed document a person can open and read.

use serde::{Serialize, de::DeserializeOwned};

use crate::StoreError;

/// Encodes values to bytes and decodes them back.
///
/// ## Trait bounds
///
/// - `Send + Sync`: a [`FileStore`](crate::FileStore) carries its codec
///   into the blocking save task, which Tokio may run on any thread of
///   its blocking pool.
/// - `'static`: the codec owns everything it needs and borrows nothing
///   from the caller, so the store can outlive the stack frame that
///   built it.
///
/// ## Generic methods
///
/// `encode` and `decode` are generic over the value, not the trait, so
/// one codec handles any serde type. The store only ever hands it a
/// whole [`RoomInventory`](innkeep_room::RoomInventory).
/// `decode` asks for `DeserializeOwned` so the result owns its strings and
/// the file buffer can be dropped as soon as decoding returns.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `StoreError::Encode` if serialization fails (for
    /// example, a map whose keys can't be written in this format).
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `StoreError::Decode` if the bytes are malformed or don't
    /// describe a valid `T`.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, StoreError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that writes indented JSON (via `serde_json`).
///
/// Behind the `json` feature flag (enabled by default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec_pretty(value).map_err(StoreError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, StoreError> {
        serde_json::from_slice(data).map_err(StoreError::Decode)
    }
}
