//! Error types for the room layer.
//!
//! Each crate in Innkeep defines its own error enum. An `InventoryError`
//! always means a slot-level rule was broken: a room that doesn't exist,
//! a slot that was expected empty or full, or a record that doesn't fit
//! its category. Business-level meaning ("this room is not booked") is
//! added one layer up, in the service crate.

use crate::{RoomCategory, RoomNumber};

/// Errors that can occur during inventory operations.
///
/// Every operation that returns one of these leaves the inventory
/// exactly as it was. The derives include `Clone` and `PartialEq` so
/// tests can compare errors with `assert_eq!`, and so the service layer
/// can map one variant and pass the rest through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The room number does not fall inside any category's range.
    #[error("room {0} does not exist")]
    InvalidRoomNumber(RoomNumber),

    /// A slot index past the end of a category's slot array.
    ///
    /// Room numbers are translated to indices before they get here, so
    /// this only shows up when a caller indexes slots directly.
    #[error("slot {index} is out of range for {category}")]
    IndexOutOfRange {
        category: RoomCategory,
        index: usize,
    },

    /// The slot already holds a guest record.
    #[error("room {0} is already occupied")]
    SlotOccupied(RoomNumber),

    /// The slot holds no guest record.
    #[error("room {0} is empty")]
    SlotEmpty(RoomNumber),

    /// The record's guest count doesn't match the category.
    /// A double room must hold exactly two guests, a single room one.
    #[error("{category} cannot hold a record with {guests} guest(s)")]
    ArityMismatch {
        category: RoomCategory,
        guests: usize,
    },
}
