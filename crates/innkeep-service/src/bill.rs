//! Bills and checkout outcomes.

use std::fmt;

use innkeep_room::{MenuItem, RoomCategory, RoomNumber, RoomRecord};
use serde::Serialize;

/// One food line on a bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillLine {
    pub item: MenuItem,
    pub quantity: u32,
    /// `quantity × unit price`, in rupees.
    pub price: f64,
}

/// An itemized bill for one occupied room.
///
/// `total == room_charge + food_total`, and `food_total` is the sum of
/// every line's price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub room: RoomNumber,
    pub category: RoomCategory,
    pub guest_name: String,
    /// The category's daily rate.
    pub room_charge: f64,
    pub lines: Vec<BillLine>,
    pub food_total: f64,
    pub total: f64,
}

impl Bill {
    /// Builds the bill for a record without touching it.
    pub fn for_record(
        room: RoomNumber,
        category: RoomCategory,
        record: &RoomRecord,
    ) -> Self {
        let lines: Vec<BillLine> = record
            .food_orders()
            .iter()
            .map(|order| BillLine {
                item: order.item(),
                quantity: order.quantity(),
                price: order.price(),
            })
            .collect();
        let room_charge = f64::from(category.daily_rate());
        let food_total: f64 = lines.iter().map(|line| line.price).sum();

        Self {
            room,
            category,
            guest_name: record.guest_name().to_string(),
            room_charge,
            lines,
            food_total,
            total: room_charge + food_total,
        }
    }
}

const RULE: &str = "-------------------------";

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===============")?;
        writeln!(f, "      BILL")?;
        writeln!(f, "===============")?;
        writeln!(f, "Room {} ({}), guest: {}", self.room.0, self.category, self.guest_name)?;
        writeln!(f, "Room Charge: ₹{:.2}", self.room_charge)?;

        if !self.lines.is_empty() {
            writeln!(f)?;
            writeln!(f, "Food Charges:")?;
            writeln!(f, "{RULE}")?;
            writeln!(f, "{:<15} {:<10} {:<10}", "Item", "Quantity", "Price")?;
            writeln!(f, "{RULE}")?;
            for line in &self.lines {
                writeln!(
                    f,
                    "{:<15} {:<10} ₹{:.2}",
                    line.item.name(),
                    line.quantity,
                    line.price
                )?;
            }
        }

        writeln!(f, "{RULE}")?;
        write!(f, "Total Amount: ₹{:.2}", self.total)
    }
}

/// The result of a checkout request.
#[derive(Debug, Clone, PartialEq)]
pub enum Checkout {
    /// Checkout was not confirmed. Nothing changed; the caller shows the
    /// guest name and may ask again with confirmation.
    Pending { room: RoomNumber, guest_name: String },

    /// The room was billed and vacated.
    Completed(Bill),
}
