//! # Innkeep
//!
//! Front desk for a small hotel: sixty rooms in four categories,
//! bookings, room service, itemized bills, and checkout.
//!
//! The facade crate re-exports the layers below it and adds the pieces
//! that make a runnable program: the interactive [`Console`], the
//! [`FrontDesk`] session runner, [`FrontDeskConfig`], and the unified
//! [`InnkeepError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use innkeep::prelude::*;
//!
//! # async fn demo() -> Result<(), InnkeepError> {
//! let config = FrontDeskConfig::from_env();
//! config.install_tracing();
//!
//! let desk = FrontDesk::from_config(config);
//! let input = std::io::BufReader::new(std::io::stdin());
//! desk.run(input, std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod console;
mod desk;
mod error;

pub use config::FrontDeskConfig;
pub use console::{Console, parse_number};
pub use desk::FrontDesk;
pub use error::InnkeepError;

pub use innkeep_room as room;
pub use innkeep_service as service;
pub use innkeep_store as store;

/// Everything needed to run or drive a front desk.
pub mod prelude {
    pub use crate::{Console, FrontDesk, FrontDeskConfig, InnkeepError};
    pub use innkeep_room::{
        FoodOrder, GuestDetails, MenuItem, Occupancy, RoomCategory, RoomInventory,
        RoomNumber, RoomRecord,
    };
    pub use innkeep_service::{
        Bill, BookingRequest, Checkout, FoodRequest, HotelService, ServiceError,
    };
    pub use innkeep_store::{FileStore, JsonCodec, SnapshotStore, StoreError};
}
