//! Room categories and the fixed room-number layout.
//!
//! The hotel has four categories, laid out back to back on one global
//! room-number line starting at 1:
//!
//! ```text
//!  1 ─ 10   LuxuryDouble   (10 rooms, ₹4000/day)
//! 11 ─ 30   DeluxeDouble   (20 rooms, ₹3000/day)
//! 31 ─ 40   LuxurySingle   (10 rooms, ₹2200/day)
//! 41 ─ 60   DeluxeSingle   (20 rooms, ₹1200/day)
//! ```
//!
//! Every range is derived from the capacities, so there is exactly one
//! place that decides where a category starts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InventoryError;

// ---------------------------------------------------------------------------
// RoomNumber
// ---------------------------------------------------------------------------

/// A guest-facing room number (1–60).
///
/// Same newtype pattern as the other identifiers in this workspace:
/// a `RoomNumber` can't be confused with a slot index even though both
/// are plain integers underneath. Serialized as the bare number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl RoomNumber {
    /// Maps this room number to its category and slot index.
    ///
    /// # Errors
    /// Returns [`InventoryError::InvalidRoomNumber`] if the number lies
    /// outside every category's range (0, or anything past the last room).
    pub fn locate(self) -> Result<(RoomCategory, usize), InventoryError> {
        RoomCategory::ALL
            .iter()
            .find_map(|category| {
                category.index_of(self).map(|index| (*category, index))
            })
            .ok_or(InventoryError::InvalidRoomNumber(self))
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoomCategory
// ---------------------------------------------------------------------------

/// One of the four fixed room categories.
///
/// The declaration order is the layout order on the room-number line
/// and the order of the console's room-type submenu.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RoomCategory {
    LuxuryDouble,
    DeluxeDouble,
    LuxurySingle,
    DeluxeSingle,
}

impl RoomCategory {
    /// All categories in layout order.
    pub const ALL: [RoomCategory; 4] = [
        Self::LuxuryDouble,
        Self::DeluxeDouble,
        Self::LuxurySingle,
        Self::DeluxeSingle,
    ];

    /// Number of rooms in this category.
    pub const fn capacity(self) -> usize {
        match self {
            Self::LuxuryDouble => 10,
            Self::DeluxeDouble => 20,
            Self::LuxurySingle => 10,
            Self::DeluxeSingle => 20,
        }
    }

    /// Daily rate in rupees.
    pub const fn daily_rate(self) -> u32 {
        match self {
            Self::LuxuryDouble => 4000,
            Self::DeluxeDouble => 3000,
            Self::LuxurySingle => 2200,
            Self::DeluxeSingle => 1200,
        }
    }

    /// Returns `true` for the two-guest categories.
    pub const fn is_double(self) -> bool {
        matches!(self, Self::LuxuryDouble | Self::DeluxeDouble)
    }

    /// How many guests a booking in this category must name.
    pub const fn guests_per_room(self) -> usize {
        if self.is_double() { 2 } else { 1 }
    }

    /// Position in [`RoomCategory::ALL`].
    pub(crate) const fn position(self) -> usize {
        match self {
            Self::LuxuryDouble => 0,
            Self::DeluxeDouble => 1,
            Self::LuxurySingle => 2,
            Self::DeluxeSingle => 3,
        }
    }

    /// Total number of rooms in the hotel.
    pub fn total_rooms() -> usize {
        Self::ALL.iter().map(|c| c.capacity()).sum()
    }

    /// The lowest room number in this category.
    pub fn first_room(self) -> RoomNumber {
        let preceding: usize = Self::ALL[..self.position()]
            .iter()
            .map(|c| c.capacity())
            .sum();
        RoomNumber(preceding as u32 + 1)
    }

    /// The highest room number in this category.
    pub fn last_room(self) -> RoomNumber {
        RoomNumber(self.first_room().0 + self.capacity() as u32 - 1)
    }

    /// Room number for a slot index, or `None` if the index is past
    /// the end of this category.
    pub fn room_number(self, index: usize) -> Option<RoomNumber> {
        (index < self.capacity())
            .then(|| RoomNumber(self.first_room().0 + index as u32))
    }

    /// Slot index for a room number, or `None` if the room belongs to
    /// another category (or to none).
    pub fn index_of(self, room: RoomNumber) -> Option<usize> {
        let first = self.first_room();
        let last = self.last_room();
        (first..=last)
            .contains(&room)
            .then(|| (room.0 - first.0) as usize)
    }

    /// Maps a submenu choice (1–4) to a category.
    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::LuxuryDouble),
            2 => Some(Self::DeluxeDouble),
            3 => Some(Self::LuxurySingle),
            4 => Some(Self::DeluxeSingle),
            _ => None,
        }
    }

    /// Human-readable name, e.g. "Luxury Double Room".
    pub const fn label(self) -> &'static str {
        match self {
            Self::LuxuryDouble => "Luxury Double Room",
            Self::DeluxeDouble => "Deluxe Double Room",
            Self::LuxurySingle => "Luxury Single Room",
            Self::DeluxeSingle => "Deluxe Single Room",
        }
    }

    /// The static feature card for this category.
    pub const fn features(self) -> RoomFeatures {
        let luxury = matches!(self, Self::LuxuryDouble | Self::LuxurySingle);
        RoomFeatures {
            category: self,
            bed: if self.is_double() { "1 Double Bed" } else { "1 Single Bed" },
            air_conditioned: luxury,
            free_breakfast: true,
            daily_rate: self.daily_rate(),
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// RoomFeatures
// ---------------------------------------------------------------------------

/// What a guest gets in a given category. Pure lookup data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomFeatures {
    pub category: RoomCategory,
    pub bed: &'static str,
    pub air_conditioned: bool,
    pub free_breakfast: bool,
    /// Daily rate in rupees.
    pub daily_rate: u32,
}

impl fmt::Display for RoomFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.category)?;
        writeln!(f, "- {}", self.bed)?;
        if self.air_conditioned {
            writeln!(f, "- AC Available")?;
        } else {
            writeln!(f, "- Non-AC")?;
        }
        if self.free_breakfast {
            writeln!(f, "- Free Breakfast")?;
        }
        write!(f, "- Charge per day: ₹{}", self.daily_rate)
    }
}
