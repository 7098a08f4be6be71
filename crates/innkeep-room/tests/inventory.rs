//! Integration tests for the room inventory.

use std::num::NonZeroU32;

use innkeep_room::{
    FoodOrder, GuestDetails, InventoryError, MenuItem, Occupancy, RoomCategory,
    RoomInventory, RoomNumber, RoomRecord,
};

// =========================================================================
// Helpers
// =========================================================================

fn guest(name: &str) -> GuestDetails {
    GuestDetails::new(name, "98450-12345", "F")
}

fn single(name: &str) -> RoomRecord {
    RoomRecord::new(Occupancy::Single { guest: guest(name) })
}

fn double(name: &str, companion: &str) -> RoomRecord {
    RoomRecord::new(Occupancy::Double {
        guest: guest(name),
        companion: guest(companion),
    })
}

fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

fn assert_counts_add_up(inv: &RoomInventory) {
    for category in RoomCategory::ALL {
        assert_eq!(
            inv.available_count(category) + inv.occupied_count(category),
            category.capacity(),
            "{category}"
        );
    }
}

// =========================================================================
// occupy / vacate
// =========================================================================

#[test]
fn test_occupy_then_get() {
    let mut inv = RoomInventory::new();
    inv.occupy(RoomCategory::LuxuryDouble, 4, double("Asha", "Ravi"))
        .unwrap();

    assert!(!inv.is_empty(RoomCategory::LuxuryDouble, 4));
    let record = inv.get(RoomCategory::LuxuryDouble, 4).unwrap();
    assert_eq!(record.guest_name(), "Asha");
    assert_eq!(record.companion().unwrap().name, "Ravi");
}

#[test]
fn test_occupy_taken_slot_fails_and_keeps_original() {
    let mut inv = RoomInventory::new();
    inv.occupy(RoomCategory::LuxurySingle, 0, single("Asha")).unwrap();

    let err = inv
        .occupy(RoomCategory::LuxurySingle, 0, single("Ravi"))
        .unwrap_err();
    assert_eq!(err, InventoryError::SlotOccupied(RoomNumber(31)));
    assert_eq!(
        inv.get(RoomCategory::LuxurySingle, 0).unwrap().guest_name(),
        "Asha"
    );
}

#[test]
fn test_occupy_rejects_wrong_arity() {
    let mut inv = RoomInventory::new();

    let err = inv
        .occupy(RoomCategory::DeluxeDouble, 0, single("Asha"))
        .unwrap_err();
    assert!(matches!(err, InventoryError::ArityMismatch { guests: 1, .. }));

    let err = inv
        .occupy(RoomCategory::DeluxeSingle, 0, double("Asha", "Ravi"))
        .unwrap_err();
    assert!(matches!(err, InventoryError::ArityMismatch { guests: 2, .. }));

    assert_counts_add_up(&inv);
    assert!(inv.occupied_rooms().is_empty());
}

#[test]
fn test_vacate_returns_record_and_empties_slot() {
    let mut inv = RoomInventory::new();
    inv.occupy(RoomCategory::DeluxeSingle, 19, single("Asha")).unwrap();

    let record = inv.vacate(RoomCategory::DeluxeSingle, 19).unwrap();
    assert_eq!(record.guest_name(), "Asha");
    assert!(inv.is_empty(RoomCategory::DeluxeSingle, 19));
}

#[test]
fn test_vacate_empty_slot_fails() {
    let mut inv = RoomInventory::new();
    let err = inv.vacate(RoomCategory::DeluxeSingle, 19).unwrap_err();
    assert_eq!(err, InventoryError::SlotEmpty(RoomNumber(60)));
}

// =========================================================================
// Availability
// =========================================================================

#[test]
fn test_available_slots_ascending_and_skip_occupied() {
    let mut inv = RoomInventory::new();
    inv.occupy(RoomCategory::LuxurySingle, 1, single("A")).unwrap();
    inv.occupy(RoomCategory::LuxurySingle, 8, single("B")).unwrap();

    let slots = inv.available_slots(RoomCategory::LuxurySingle);
    let expected: Vec<RoomNumber> = [31, 33, 34, 35, 36, 37, 38, 40]
        .into_iter()
        .map(RoomNumber)
        .collect();
    assert_eq!(slots, expected);
    assert_eq!(inv.available_count(RoomCategory::LuxurySingle), 8);
}

#[test]
fn test_counts_add_up_through_a_session() {
    let mut inv = RoomInventory::new();
    assert_counts_add_up(&inv);

    for index in 0..RoomCategory::LuxuryDouble.capacity() {
        inv.occupy(RoomCategory::LuxuryDouble, index, double("A", "B"))
            .unwrap();
        assert_counts_add_up(&inv);
    }
    assert_eq!(inv.available_count(RoomCategory::LuxuryDouble), 0);
    assert!(inv.available_slots(RoomCategory::LuxuryDouble).is_empty());

    inv.vacate(RoomCategory::LuxuryDouble, 3).unwrap();
    assert_counts_add_up(&inv);
    assert_eq!(
        inv.available_slots(RoomCategory::LuxuryDouble),
        vec![RoomNumber(4)]
    );
}

#[test]
fn test_occupied_rooms_spans_categories() {
    let mut inv = RoomInventory::new();
    inv.occupy(RoomCategory::DeluxeSingle, 0, single("A")).unwrap();
    inv.occupy(RoomCategory::LuxuryDouble, 9, double("B", "C")).unwrap();

    assert_eq!(inv.occupied_rooms(), vec![RoomNumber(10), RoomNumber(41)]);
}

// =========================================================================
// Food
// =========================================================================

#[test]
fn test_add_food_appends_in_order() {
    let mut inv = RoomInventory::new();
    inv.occupy(RoomCategory::LuxurySingle, 2, single("A")).unwrap();

    inv.add_food(
        RoomCategory::LuxurySingle,
        2,
        [FoodOrder::new(MenuItem::Noodles, qty(1))],
    )
    .unwrap();
    inv.add_food(
        RoomCategory::LuxurySingle,
        2,
        [FoodOrder::new(MenuItem::Coke, qty(2))],
    )
    .unwrap();

    let orders = inv.get(RoomCategory::LuxurySingle, 2).unwrap().food_orders();
    let items: Vec<MenuItem> = orders.iter().map(FoodOrder::item).collect();
    assert_eq!(items, vec![MenuItem::Noodles, MenuItem::Coke]);
}

#[test]
fn test_add_food_to_empty_room_fails() {
    let mut inv = RoomInventory::new();
    let err = inv
        .add_food(
            RoomCategory::LuxurySingle,
            2,
            [FoodOrder::new(MenuItem::Coke, qty(1))],
        )
        .unwrap_err();
    assert_eq!(err, InventoryError::SlotEmpty(RoomNumber(33)));
}

// =========================================================================
// Snapshot serialization
// =========================================================================

#[test]
fn test_snapshot_restores_guests_and_orders() {
    let mut inv = RoomInventory::new();
    inv.occupy(RoomCategory::DeluxeDouble, 5, double("Asha", "Ravi"))
        .unwrap();
    inv.add_food(
        RoomCategory::DeluxeDouble,
        5,
        [FoodOrder::new(MenuItem::Pasta, qty(2))],
    )
    .unwrap();
    inv.occupy(RoomCategory::DeluxeSingle, 7, single("Meera")).unwrap();

    let json = serde_json::to_string(&inv).unwrap();
    let restored: RoomInventory = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, inv);
    assert_eq!(
        restored.get(RoomCategory::DeluxeDouble, 5).unwrap().food_total(),
        120.0
    );
}

#[test]
fn test_snapshot_with_out_of_range_room_is_rejected() {
    let json = r#"{"occupied":[{"room":61,"record":{"occupancy":{"kind":"single","guest":{"name":"A","contact":"1","gender":"M"}}}}]}"#;
    assert!(serde_json::from_str::<RoomInventory>(json).is_err());
}

#[test]
fn test_snapshot_with_wrong_arity_is_rejected() {
    // Room 3 is a luxury double; a single-guest record can't live there.
    let json = r#"{"occupied":[{"room":3,"record":{"occupancy":{"kind":"single","guest":{"name":"A","contact":"1","gender":"M"}}}}]}"#;
    assert!(serde_json::from_str::<RoomInventory>(json).is_err());
}

#[test]
fn test_snapshot_with_duplicate_room_is_rejected() {
    let room = r#"{"room":45,"record":{"occupancy":{"kind":"single","guest":{"name":"A","contact":"1","gender":"M"}}}}"#;
    let json = format!(r#"{{"occupied":[{room},{room}]}}"#);
    assert!(serde_json::from_str::<RoomInventory>(&json).is_err());
}
