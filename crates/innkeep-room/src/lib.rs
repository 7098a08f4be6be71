//! Room inventory for Innkeep.
//!
//! This crate owns the hotel's room state: which of the sixty rooms are
//! occupied, who is staying in them, and what they've ordered.
//!
//! # Key types
//!
//! - [`RoomCategory`] — the four fixed categories, their capacities,
//!   rates, and room-number ranges
//! - [`RoomNumber`] — guest-facing room number, mapped to a
//!   `(category, index)` slot by [`RoomNumber::locate`]
//! - [`RoomRecord`] — guests plus food tab for one occupied room
//! - [`FoodOrder`] / [`MenuItem`] — room-service line items
//! - [`RoomInventory`] — fixed slot arrays, one per category
//!
//! # How it fits in the stack
//!
//! ```text
//! Console (innkeep)        ← menu loop, input parsing
//!     ↕
//! Service (innkeep-service) ← booking, food orders, billing, checkout
//!     ↕
//! Room Layer (this crate)   ← slot state and the room-number layout
//! ```

mod category;
mod error;
mod inventory;
mod menu;
mod record;

pub use category::{RoomCategory, RoomFeatures, RoomNumber};
pub use error::InventoryError;
pub use inventory::RoomInventory;
pub use menu::{FoodOrder, MenuItem};
pub use record::{GuestDetails, Occupancy, RoomRecord};
