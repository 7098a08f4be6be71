//! Front-desk operations over a [`RoomInventory`].
//!
//! [`HotelService`] holds no state of its own. Every operation takes the
//! inventory explicitly, validates its inputs, and either mutates the
//! inventory or leaves it exactly as it was.

use std::num::NonZeroU32;

use innkeep_room::{
    FoodOrder, GuestDetails, InventoryError, MenuItem, Occupancy, RoomCategory,
    RoomFeatures, RoomInventory, RoomNumber, RoomRecord,
};

use crate::{Bill, Checkout, ServiceError};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Guest details supplied when booking a room.
///
/// `companion` is required for double rooms and must be absent for
/// single rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub primary: GuestDetails,
    pub companion: Option<GuestDetails>,
}

impl BookingRequest {
    pub fn single(primary: GuestDetails) -> Self {
        Self {
            primary,
            companion: None,
        }
    }

    pub fn double(primary: GuestDetails, companion: GuestDetails) -> Self {
        Self {
            primary,
            companion: Some(companion),
        }
    }

    /// Validates the request against the category and trims every field.
    fn into_occupancy(
        self,
        category: RoomCategory,
    ) -> Result<Occupancy, ServiceError> {
        let guest = checked_guest(&self.primary, "guest")?;
        match (category.is_double(), self.companion) {
            (true, Some(companion)) => Ok(Occupancy::Double {
                guest,
                companion: checked_guest(&companion, "second guest")?,
            }),
            (true, None) => Err(ServiceError::InvalidGuestDetails(format!(
                "{category} requires a second guest"
            ))),
            (false, None) => Ok(Occupancy::Single { guest }),
            (false, Some(_)) => Err(ServiceError::InvalidGuestDetails(format!(
                "{category} takes a single guest"
            ))),
        }
    }
}

fn checked_guest(
    details: &GuestDetails,
    who: &str,
) -> Result<GuestDetails, ServiceError> {
    if !details.is_complete() {
        return Err(ServiceError::InvalidGuestDetails(format!(
            "{who} name, contact, and gender are all required"
        )));
    }
    Ok(details.trimmed())
}

/// One requested line of a food order, as typed at the console.
///
/// Both fields are raw integers so that out-of-range input reaches the
/// service and is rejected with a typed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodRequest {
    pub item_code: i64,
    pub quantity: i64,
}

impl FoodRequest {
    pub fn new(item_code: i64, quantity: i64) -> Self {
        Self {
            item_code,
            quantity,
        }
    }

    /// Turns the request into an order, or says what's wrong with it.
    ///
    /// # Errors
    /// [`ServiceError::InvalidMenuItem`] for codes outside 1–4, then
    /// [`ServiceError::InvalidQuantity`] for quantities below 1.
    pub fn validate(self) -> Result<FoodOrder, ServiceError> {
        let item = MenuItem::from_code(self.item_code)
            .ok_or(ServiceError::InvalidMenuItem(self.item_code))?;
        let quantity = u32::try_from(self.quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ServiceError::InvalidQuantity(self.quantity))?;
        Ok(FoodOrder::new(item, quantity))
    }
}

// ---------------------------------------------------------------------------
// HotelService
// ---------------------------------------------------------------------------

/// The hotel's business operations.
///
/// A plain namespace: all functions are associated functions that take
/// the inventory by reference, so ownership of room state stays with
/// the caller.
pub struct HotelService;

impl HotelService {
    /// Books `room` in `category` for the guests in `request`.
    ///
    /// # Errors
    /// - [`ServiceError::InvalidRoomNumber`] if `room` is not in `category`
    /// - [`ServiceError::RoomNotAvailable`] if the room is occupied
    /// - [`ServiceError::InvalidGuestDetails`] if a field is blank or the
    ///   guest count doesn't match the category
    pub fn book_room(
        inventory: &mut RoomInventory,
        category: RoomCategory,
        room: RoomNumber,
        request: BookingRequest,
    ) -> Result<(), ServiceError> {
        let index = bookable_index(inventory, category, room)?;
        let occupancy = request.into_occupancy(category)?;
        let guests = occupancy.guest_count();
        inventory
            .occupy(category, index, RoomRecord::new(occupancy))
            .map_err(|e| match e {
                InventoryError::SlotOccupied(room) => {
                    ServiceError::RoomNotAvailable(room)
                }
                other => other.into(),
            })?;

        tracing::info!(%room, %category, guests, "room booked");
        Ok(())
    }

    /// Checks that `room` belongs to `category` and is free, without
    /// booking it. The console uses this to reject a room before asking
    /// for guest details.
    ///
    /// # Errors
    /// Same room checks as [`HotelService::book_room`].
    pub fn check_bookable(
        inventory: &RoomInventory,
        category: RoomCategory,
        room: RoomNumber,
    ) -> Result<(), ServiceError> {
        bookable_index(inventory, category, room).map(|_| ())
    }

    /// Adds food to an occupied room's tab.
    ///
    /// All items are validated before any is added, so a bad line leaves
    /// the tab unchanged.
    ///
    /// # Errors
    /// - [`ServiceError::InvalidRoomNumber`] if `room` doesn't exist
    /// - [`ServiceError::RoomNotBooked`] if nobody is staying there
    /// - [`ServiceError::InvalidMenuItem`] / [`ServiceError::InvalidQuantity`]
    ///   for the first bad line
    pub fn order_food(
        inventory: &mut RoomInventory,
        room: RoomNumber,
        items: &[FoodRequest],
    ) -> Result<(), ServiceError> {
        let (category, index) = locate(room)?;
        if inventory.get(category, index).is_none() {
            return Err(ServiceError::RoomNotBooked(room));
        }

        let orders = items
            .iter()
            .map(|request| request.validate())
            .collect::<Result<Vec<_>, _>>()?;
        let count = orders.len();

        inventory
            .add_food(category, index, orders)
            .map_err(|e| match e {
                InventoryError::SlotEmpty(room) => ServiceError::RoomNotBooked(room),
                other => other.into(),
            })?;

        tracing::info!(%room, items = count, "food ordered");
        Ok(())
    }

    /// Number of free rooms in the category.
    pub fn check_availability(
        inventory: &RoomInventory,
        category: RoomCategory,
    ) -> usize {
        inventory.available_count(category)
    }

    /// Free room numbers in the category, ascending.
    pub fn available_rooms(
        inventory: &RoomInventory,
        category: RoomCategory,
    ) -> Vec<RoomNumber> {
        inventory.available_slots(category)
    }

    pub fn room_features(category: RoomCategory) -> RoomFeatures {
        category.features()
    }

    /// Looks up who is staying in a room.
    ///
    /// # Errors
    /// [`ServiceError::RoomNotBooked`] if the room is empty.
    pub fn occupant(
        inventory: &RoomInventory,
        room: RoomNumber,
    ) -> Result<&RoomRecord, ServiceError> {
        let (category, index) = locate(room)?;
        inventory
            .get(category, index)
            .ok_or(ServiceError::RoomNotBooked(room))
    }

    /// Computes the bill for an occupied room. Does not modify anything.
    ///
    /// # Errors
    /// [`ServiceError::RoomNotOccupied`] if the room is empty.
    pub fn generate_bill(
        inventory: &RoomInventory,
        room: RoomNumber,
    ) -> Result<Bill, ServiceError> {
        let (category, index) = locate(room)?;
        let record = inventory
            .get(category, index)
            .ok_or(ServiceError::RoomNotOccupied(room))?;
        Ok(Bill::for_record(room, category, record))
    }

    /// Checks a room out.
    ///
    /// Unconfirmed, this only reports who is staying and changes nothing,
    /// so it can be repeated freely. Confirmed, it bills the room and then
    /// vacates it; the record and its food tab are gone afterwards.
    ///
    /// # Errors
    /// [`ServiceError::RoomNotOccupied`] if the room is empty.
    pub fn checkout_room(
        inventory: &mut RoomInventory,
        room: RoomNumber,
        confirmed: bool,
    ) -> Result<Checkout, ServiceError> {
        if !confirmed {
            let (category, index) = locate(room)?;
            let record = inventory
                .get(category, index)
                .ok_or(ServiceError::RoomNotOccupied(room))?;
            return Ok(Checkout::Pending {
                room,
                guest_name: record.guest_name().to_string(),
            });
        }

        let bill = Self::generate_bill(inventory, room)?;
        let (category, index) = locate(room)?;
        inventory.vacate(category, index).map_err(|e| match e {
            InventoryError::SlotEmpty(room) => ServiceError::RoomNotOccupied(room),
            other => other.into(),
        })?;

        tracing::info!(%room, %category, total = bill.total, "checked out");
        Ok(Checkout::Completed(bill))
    }
}

fn bookable_index(
    inventory: &RoomInventory,
    category: RoomCategory,
    room: RoomNumber,
) -> Result<usize, ServiceError> {
    let index = category
        .index_of(room)
        .ok_or(ServiceError::InvalidRoomNumber(room))?;
    if !inventory.is_empty(category, index) {
        return Err(ServiceError::RoomNotAvailable(room));
    }
    Ok(index)
}

fn locate(room: RoomNumber) -> Result<(RoomCategory, usize), ServiceError> {
    room.locate()
        .map_err(|_| ServiceError::InvalidRoomNumber(room))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(name: &str) -> GuestDetails {
        GuestDetails::new(name, "555", "M")
    }

    #[test]
    fn test_into_occupancy_trims_fields() {
        let request = BookingRequest::single(GuestDetails::new(" Asha ", " 555", "F "));
        let occupancy = request.into_occupancy(RoomCategory::DeluxeSingle).unwrap();
        assert_eq!(occupancy.primary(), &GuestDetails::new("Asha", "555", "F"));
    }

    #[test]
    fn test_into_occupancy_requires_companion_for_double() {
        let err = BookingRequest::single(guest("Asha"))
            .into_occupancy(RoomCategory::LuxuryDouble)
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidGuestDetails(_)));
    }

    #[test]
    fn test_into_occupancy_rejects_companion_for_single() {
        let err = BookingRequest::double(guest("Asha"), guest("Ravi"))
            .into_occupancy(RoomCategory::LuxurySingle)
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidGuestDetails(_)));
    }

    #[test]
    fn test_into_occupancy_rejects_blank_companion() {
        let err = BookingRequest::double(guest("Asha"), GuestDetails::new("Ravi", "", "M"))
            .into_occupancy(RoomCategory::DeluxeDouble)
            .unwrap_err();
        assert!(err.to_string().contains("second guest"));
    }

    #[test]
    fn test_food_request_validation() {
        assert_eq!(
            FoodRequest::new(5, 1).validate(),
            Err(ServiceError::InvalidMenuItem(5))
        );
        assert_eq!(
            FoodRequest::new(2, 0).validate(),
            Err(ServiceError::InvalidQuantity(0))
        );
        assert_eq!(
            FoodRequest::new(2, -3).validate(),
            Err(ServiceError::InvalidQuantity(-3))
        );
        let order = FoodRequest::new(2, 2).validate().unwrap();
        assert_eq!(order.item(), MenuItem::Pasta);
        assert_eq!(order.price(), 120.0);
    }
}
