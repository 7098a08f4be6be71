//! Guest records: who is staying in an occupied room and what they ate.
//!
//! A record exists only while a room is occupied. It is created by a
//! successful booking, grows as food is ordered, and is dropped at
//! checkout once the bill has been produced.

use serde::{Deserialize, Serialize};

use crate::FoodOrder;

// ---------------------------------------------------------------------------
// GuestDetails
// ---------------------------------------------------------------------------

/// Identity and contact details for one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub contact: String,
    pub gender: String,
}

impl GuestDetails {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            gender: gender.into(),
        }
    }

    /// Returns a copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.contact.trim(), self.gender.trim())
    }

    /// Returns `true` if every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.contact, &self.gender]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Occupancy
// ---------------------------------------------------------------------------

/// Who occupies a room. The variant is chosen by the category's arity:
/// single rooms hold one guest, double rooms exactly two.
///
/// Serialized with an internal `"kind"` tag:
///
/// ```json
/// { "kind": "double", "guest": { ... }, "companion": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Occupancy {
    Single {
        guest: GuestDetails,
    },
    Double {
        guest: GuestDetails,
        companion: GuestDetails,
    },
}

impl Occupancy {
    /// The guest the room is booked under.
    pub fn primary(&self) -> &GuestDetails {
        match self {
            Self::Single { guest } | Self::Double { guest, .. } => guest,
        }
    }

    /// The second guest, for double rooms.
    pub fn companion(&self) -> Option<&GuestDetails> {
        match self {
            Self::Single { .. } => None,
            Self::Double { companion, .. } => Some(companion),
        }
    }

    pub fn guest_count(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Double { .. } => 2,
        }
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double { .. })
    }
}

// ---------------------------------------------------------------------------
// RoomRecord
// ---------------------------------------------------------------------------

/// Everything stored in an occupied room slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    occupancy: Occupancy,
    /// Append-only while the room is occupied.
    #[serde(default)]
    food_orders: Vec<FoodOrder>,
}

impl RoomRecord {
    /// Creates a record with an empty food tab.
    pub fn new(occupancy: Occupancy) -> Self {
        Self {
            occupancy,
            food_orders: Vec::new(),
        }
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn primary(&self) -> &GuestDetails {
        self.occupancy.primary()
    }

    pub fn companion(&self) -> Option<&GuestDetails> {
        self.occupancy.companion()
    }

    /// Name of the guest the room is booked under.
    pub fn guest_name(&self) -> &str {
        &self.primary().name
    }

    pub fn guest_count(&self) -> usize {
        self.occupancy.guest_count()
    }

    /// Food orders in the order they were placed.
    pub fn food_orders(&self) -> &[FoodOrder] {
        &self.food_orders
    }

    /// Sum of all food order prices.
    pub fn food_total(&self) -> f64 {
        self.food_orders.iter().map(FoodOrder::price).sum()
    }

    pub(crate) fn append_orders(
        &mut self,
        orders: impl IntoIterator<Item = FoodOrder>,
    ) {
        self.food_orders.extend(orders);
    }
}
