//! The room-service menu and food order line items.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MenuItem
// ---------------------------------------------------------------------------

/// One of the four dishes room service offers.
///
/// Item codes are 1-based and match the order the menu is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuItem {
    Sandwich,
    Pasta,
    Noodles,
    Coke,
}

impl MenuItem {
    /// All items in menu order.
    pub const ALL: [MenuItem; 4] =
        [Self::Sandwich, Self::Pasta, Self::Noodles, Self::Coke];

    /// Looks up an item by its menu code (1–4).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Sandwich),
            2 => Some(Self::Pasta),
            3 => Some(Self::Noodles),
            4 => Some(Self::Coke),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Sandwich => 1,
            Self::Pasta => 2,
            Self::Noodles => 3,
            Self::Coke => 4,
        }
    }

    /// Price of one unit, in rupees.
    pub const fn unit_price(self) -> u32 {
        match self {
            Self::Sandwich => 50,
            Self::Pasta => 60,
            Self::Noodles => 70,
            Self::Coke => 30,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sandwich => "Sandwich",
            Self::Pasta => "Pasta",
            Self::Noodles => "Noodles",
            Self::Coke => "Coke",
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// FoodOrder
// ---------------------------------------------------------------------------

/// A single line on a room's food tab.
///
/// Immutable once created. The price is always derived from the item's
/// unit price, so a snapshot can never carry a price that disagrees
/// with the menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodOrder {
    item: MenuItem,
    quantity: NonZeroU32,
}

impl FoodOrder {
    pub fn new(item: MenuItem, quantity: NonZeroU32) -> Self {
        Self { item, quantity }
    }

    pub fn item(&self) -> MenuItem {
        self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// `quantity × unit price`, in rupees.
    pub fn price(&self) -> f64 {
        f64::from(self.quantity.get()) * f64::from(self.item.unit_price())
    }
}
