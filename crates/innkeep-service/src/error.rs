//! Error types for the service layer.
//!
//! Every variant is recoverable: the console prints the message and
//! returns to the menu. Nothing here should ever end the process.

use innkeep_room::{InventoryError, RoomNumber};

/// Errors returned by [`HotelService`](crate::HotelService) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The room number is outside the hotel, or outside the category
    /// the caller asked for.
    #[error("room {0} is not a valid room number")]
    InvalidRoomNumber(RoomNumber),

    /// Booking was attempted on a room that already has guests.
    #[error("room {0} is not available")]
    RoomNotAvailable(RoomNumber),

    /// Billing or checkout was attempted on an empty room.
    #[error("room {0} is not occupied")]
    RoomNotOccupied(RoomNumber),

    /// Food was ordered for a room nobody has booked.
    #[error("room {0} is not booked, please book the room first")]
    RoomNotBooked(RoomNumber),

    /// A required guest field was blank, or the number of guests doesn't
    /// match the room category.
    #[error("invalid guest details: {0}")]
    InvalidGuestDetails(String),

    /// The item code is not on the menu (valid codes are 1–4).
    #[error("invalid menu item {0}, please choose 1-4")]
    InvalidMenuItem(i64),

    /// Quantities must be positive.
    #[error("invalid quantity {0}, quantity must be positive")]
    InvalidQuantity(i64),

    /// An inventory error that has no more specific service meaning.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
