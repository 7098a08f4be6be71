//! The room inventory: four fixed-size slot arrays, one per category.
//!
//! # Invariants
//!
//! - Each category has exactly `capacity()` slots, for the whole life of
//!   the inventory.
//! - A slot is either empty or holds one [`RoomRecord`] whose occupancy
//!   arity matches the category (two guests in double rooms, one in
//!   single rooms). [`RoomInventory::occupy`] enforces this, and so does
//!   deserialization, which replays every stored room through `occupy`.
//!
//! # Concurrency note
//!
//! `RoomInventory` has no interior locking. It is owned by one task at a
//! time and handed around by value or `&mut`, never shared.

use serde::{Deserialize, Serialize};

use crate::{FoodOrder, InventoryError, RoomCategory, RoomNumber, RoomRecord};

/// All room state for the hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "InventorySnapshot", try_from = "InventorySnapshot")]
pub struct RoomInventory {
    /// Indexed by [`RoomCategory::position`].
    wings: [Vec<Option<RoomRecord>>; 4],
}

impl RoomInventory {
    /// Creates an inventory with every room empty.
    pub fn new() -> Self {
        Self {
            wings: RoomCategory::ALL.map(|category| vec![None; category.capacity()]),
        }
    }

    /// Returns `true` iff the slot exists and holds no record.
    ///
    /// An index past the end of the category is not an empty slot, so
    /// this returns `false` for it.
    pub fn is_empty(&self, category: RoomCategory, index: usize) -> bool {
        matches!(self.wing(category).get(index), Some(None))
    }

    /// Room numbers of all empty slots in the category, ascending.
    pub fn available_slots(&self, category: RoomCategory) -> Vec<RoomNumber> {
        self.wing(category)
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .filter_map(|(index, _)| category.room_number(index))
            .collect()
    }

    /// Number of empty slots in the category.
    pub fn available_count(&self, category: RoomCategory) -> usize {
        self.wing(category).iter().filter(|slot| slot.is_none()).count()
    }

    /// Number of occupied slots in the category.
    pub fn occupied_count(&self, category: RoomCategory) -> usize {
        category.capacity() - self.available_count(category)
    }

    /// Room numbers of every occupied room in the hotel, ascending.
    pub fn occupied_rooms(&self) -> Vec<RoomNumber> {
        RoomCategory::ALL
            .into_iter()
            .flat_map(move |category| {
                self.wing(category)
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_some())
                    .filter_map(move |(index, _)| category.room_number(index))
            })
            .collect()
    }

    /// Stores a record in an empty slot.
    ///
    /// # Errors
    /// - [`InventoryError::IndexOutOfRange`] if the slot doesn't exist
    /// - [`InventoryError::ArityMismatch`] if the record's guest count
    ///   doesn't fit the category
    /// - [`InventoryError::SlotOccupied`] if the slot already holds a record
    pub fn occupy(
        &mut self,
        category: RoomCategory,
        index: usize,
        record: RoomRecord,
    ) -> Result<(), InventoryError> {
        let room = Self::room_at(category, index)?;
        if record.occupancy().is_double() != category.is_double() {
            return Err(InventoryError::ArityMismatch {
                category,
                guests: record.guest_count(),
            });
        }

        let slot = self.slot_mut(category, index)?;
        if slot.is_some() {
            return Err(InventoryError::SlotOccupied(room));
        }
        *slot = Some(record);

        tracing::debug!(%room, %category, "slot occupied");
        Ok(())
    }

    /// Removes and returns the record in a slot.
    ///
    /// # Errors
    /// Returns [`InventoryError::SlotEmpty`] if there's nothing to remove.
    pub fn vacate(
        &mut self,
        category: RoomCategory,
        index: usize,
    ) -> Result<RoomRecord, InventoryError> {
        let room = Self::room_at(category, index)?;
        let record = self
            .slot_mut(category, index)?
            .take()
            .ok_or(InventoryError::SlotEmpty(room))?;

        tracing::debug!(%room, %category, "slot vacated");
        Ok(record)
    }

    /// Read-only lookup. `None` for empty or nonexistent slots.
    pub fn get(&self, category: RoomCategory, index: usize) -> Option<&RoomRecord> {
        self.wing(category).get(index).and_then(Option::as_ref)
    }

    /// Appends food orders to an occupied room's tab.
    ///
    /// # Errors
    /// Returns [`InventoryError::SlotEmpty`] if the room isn't occupied.
    pub fn add_food(
        &mut self,
        category: RoomCategory,
        index: usize,
        orders: impl IntoIterator<Item = FoodOrder>,
    ) -> Result<(), InventoryError> {
        let room = Self::room_at(category, index)?;
        let record = self
            .slot_mut(category, index)?
            .as_mut()
            .ok_or(InventoryError::SlotEmpty(room))?;
        record.append_orders(orders);
        Ok(())
    }

    fn wing(&self, category: RoomCategory) -> &[Option<RoomRecord>] {
        &self.wings[category.position()]
    }

    fn slot_mut(
        &mut self,
        category: RoomCategory,
        index: usize,
    ) -> Result<&mut Option<RoomRecord>, InventoryError> {
        self.wings[category.position()]
            .get_mut(index)
            .ok_or(InventoryError::IndexOutOfRange { category, index })
    }

    fn room_at(
        category: RoomCategory,
        index: usize,
    ) -> Result<RoomNumber, InventoryError> {
        category
            .room_number(index)
            .ok_or(InventoryError::IndexOutOfRange { category, index })
    }
}

impl Default for RoomInventory {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Snapshot form
// ---------------------------------------------------------------------------

/// The on-disk shape of an inventory: only occupied rooms, keyed by
/// room number.
///
/// ```json
/// { "occupied": [ { "room": 5, "record": { "occupancy": { ... }, "food_orders": [] } } ] }
/// ```
///
/// Empty slots are implied, so a snapshot can't disagree with the fixed
/// category capacities.
#[derive(Serialize, Deserialize)]
struct InventorySnapshot {
    occupied: Vec<OccupiedRoom>,
}

#[derive(Serialize, Deserialize)]
struct OccupiedRoom {
    room: RoomNumber,
    record: RoomRecord,
}

impl From<RoomInventory> for InventorySnapshot {
    fn from(inventory: RoomInventory) -> Self {
        let occupied = RoomCategory::ALL
            .into_iter()
            .zip(inventory.wings)
            .flat_map(|(category, wing)| {
                wing.into_iter().enumerate().filter_map(move |(index, slot)| {
                    Some(OccupiedRoom {
                        room: category.room_number(index)?,
                        record: slot?,
                    })
                })
            })
            .collect();
        Self { occupied }
    }
}

impl TryFrom<InventorySnapshot> for RoomInventory {
    type Error = InventoryError;

    fn try_from(snapshot: InventorySnapshot) -> Result<Self, Self::Error> {
        let mut inventory = RoomInventory::new();
        for OccupiedRoom { room, record } in snapshot.occupied {
            let (category, index) = room.locate()?;
            inventory.occupy(category, index, record)?;
        }
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuestDetails, Occupancy};

    fn single(name: &str) -> RoomRecord {
        RoomRecord::new(Occupancy::Single {
            guest: GuestDetails::new(name, "555", "M"),
        })
    }

    #[test]
    fn test_new_inventory_is_all_empty() {
        let inv = RoomInventory::new();
        for category in RoomCategory::ALL {
            assert_eq!(inv.available_count(category), category.capacity());
            assert_eq!(inv.occupied_count(category), 0);
        }
        assert!(inv.occupied_rooms().is_empty());
    }

    #[test]
    fn test_is_empty_out_of_range_is_false() {
        let inv = RoomInventory::new();
        assert!(inv.is_empty(RoomCategory::LuxurySingle, 9));
        assert!(!inv.is_empty(RoomCategory::LuxurySingle, 10));
    }

    #[test]
    fn test_occupy_out_of_range() {
        let mut inv = RoomInventory::new();
        let err = inv
            .occupy(RoomCategory::LuxurySingle, 10, single("Ravi"))
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::IndexOutOfRange {
                category: RoomCategory::LuxurySingle,
                index: 10
            }
        );
    }

    #[test]
    fn test_snapshot_json_lists_only_occupied_rooms() {
        let mut inv = RoomInventory::new();
        inv.occupy(RoomCategory::DeluxeSingle, 0, single("Ravi")).unwrap();

        let json = serde_json::to_value(&inv).unwrap();
        let occupied = json["occupied"].as_array().unwrap();
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0]["room"], 41);
        assert_eq!(occupied[0]["record"]["occupancy"]["kind"], "single");
    }
}
