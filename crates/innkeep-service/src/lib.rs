//! Front-desk business logic for Innkeep.
//!
//! [`HotelService`] is the core of the system: booking rooms, taking
//! room-service orders, producing bills, and checking guests out. It
//! owns no state; callers pass the [`RoomInventory`](innkeep_room::RoomInventory)
//! in explicitly.
//!
//! Every operation returns a typed [`ServiceError`] on failure and leaves
//! the inventory unchanged when it fails.

mod bill;
mod error;
mod service;

pub use bill::{Bill, BillLine, Checkout};
pub use error::ServiceError;
pub use service::{BookingRequest, FoodRequest, HotelService};
