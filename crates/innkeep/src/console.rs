//! The interactive front-desk menu.
//!
//! [`Console`] is generic over its input and output so the same loop
//! runs against stdin/stdout in the binary and against in-memory
//! buffers in tests. Each menu action reads what it needs, calls one
//! [`HotelService`] operation, and prints the result or the error.
//! Errors never end the loop; end of input does.

use std::io::{BufRead, Write};
use std::str::FromStr;

use innkeep_room::{GuestDetails, MenuItem, RoomCategory, RoomInventory, RoomNumber};
use innkeep_service::{BookingRequest, Checkout, FoodRequest, HotelService};

use crate::InnkeepError;

/// Whether the menu loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads `Option<T>` from a prompt; `None` means input has ended.
macro_rules! or_exit {
    ($e:expr) => {
        match $e? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// A line-oriented front-desk console.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompt_to_continue: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt_to_continue: true,
        }
    }

    /// Sets whether to ask "Continue? (y/n)" after each action.
    pub fn prompt_to_continue(mut self, enabled: bool) -> Self {
        self.prompt_to_continue = enabled;
        self
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// The inventory is borrowed, not owned, so every change made before
    /// a failure is still in the caller's hands afterwards.
    ///
    /// # Errors
    /// Only console I/O failures end the loop with an error. Every
    /// business error is printed and the menu is shown again.
    pub fn run(mut self, inventory: &mut RoomInventory) -> Result<(), InnkeepError> {
        loop {
            if self.step(inventory)? == Flow::Exit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Shows the main menu once and performs the chosen action.
    fn step(&mut self, inventory: &mut RoomInventory) -> Result<Flow, InnkeepError> {
        self.show_main_menu()?;
        let choice: i64 = or_exit!(self.prompt_number("Enter your choice: "));

        let flow = match choice {
            1 => self.display_features()?,
            2 => self.check_availability(inventory)?,
            3 => self.book_room(inventory)?,
            4 => self.order_food(inventory)?,
            5 => self.checkout(inventory)?,
            6 => {
                writeln!(self.output, "Thank you for using Hotel Management System!")?;
                return Ok(Flow::Exit);
            }
            _ => {
                writeln!(self.output, "Invalid option. Please choose 1-6.")?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit || !self.prompt_to_continue {
            return Ok(flow);
        }

        let answer = or_exit!(self.prompt("\nContinue? (y/n): "));
        Ok(if is_yes(&answer) { Flow::Continue } else { Flow::Exit })
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    fn display_features(&mut self) -> Result<Flow, InnkeepError> {
        let category = or_exit!(self.choose_category("Display Features"));
        writeln!(self.output, "{}", HotelService::room_features(category))?;
        Ok(Flow::Continue)
    }

    fn check_availability(
        &mut self,
        inventory: &RoomInventory,
    ) -> Result<Flow, InnkeepError> {
        let category = or_exit!(self.choose_category("Check Availability"));
        let count = HotelService::check_availability(inventory, category);
        writeln!(self.output, "Number of rooms available: {count}")?;
        Ok(Flow::Continue)
    }

    fn book_room(
        &mut self,
        inventory: &mut RoomInventory,
    ) -> Result<Flow, InnkeepError> {
        let category = or_exit!(self.choose_category("Book Room"));

        let free = HotelService::available_rooms(inventory, category);
        let listed: Vec<String> = free.iter().map(|room| room.0.to_string()).collect();
        writeln!(self.output, "Available rooms: {}", listed.join(" "))?;

        let prompt = format!(
            "Enter room number ({}-{}): ",
            category.first_room().0,
            category.last_room().0
        );
        let room = RoomNumber(or_exit!(self.prompt_number::<u32>(&prompt)));
        if let Err(e) = HotelService::check_bookable(inventory, category, room) {
            return self.report(e.into());
        }

        let primary = or_exit!(self.read_guest("customer"));
        let request = if category.is_double() {
            let companion = or_exit!(self.read_guest("second customer"));
            BookingRequest::double(primary, companion)
        } else {
            BookingRequest::single(primary)
        };

        match HotelService::book_room(inventory, category, room, request) {
            Ok(()) => writeln!(self.output, "Room booked successfully!")?,
            Err(e) => return self.report(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn order_food(
        &mut self,
        inventory: &mut RoomInventory,
    ) -> Result<Flow, InnkeepError> {
        let room = RoomNumber(or_exit!(self.prompt_number::<u32>("Enter Room Number: ")));
        if let Err(e) = HotelService::occupant(inventory, room) {
            return self.report(e.into());
        }

        self.show_food_menu()?;
        let mut lines = Vec::new();
        loop {
            let item_code: i64 = or_exit!(self.prompt_number("Enter item number: "));
            let quantity: i64 = or_exit!(self.prompt_number("Enter quantity: "));
            let request = FoodRequest::new(item_code, quantity);
            match request.validate() {
                Ok(_) => lines.push(request),
                Err(e) => writeln!(self.output, "{e}")?,
            }

            let more = or_exit!(self.prompt("Order more items? (y/n): "));
            if !is_yes(&more) {
                break;
            }
        }

        if lines.is_empty() {
            writeln!(self.output, "No items ordered.")?;
            return Ok(Flow::Continue);
        }
        match HotelService::order_food(inventory, room, &lines) {
            Ok(()) => writeln!(self.output, "Order placed successfully!")?,
            Err(e) => return self.report(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn checkout(
        &mut self,
        inventory: &mut RoomInventory,
    ) -> Result<Flow, InnkeepError> {
        let room = RoomNumber(or_exit!(self.prompt_number::<u32>("Enter Room Number: ")));

        let guest_name = match HotelService::checkout_room(inventory, room, false) {
            Ok(Checkout::Pending { guest_name, .. }) => guest_name,
            Ok(Checkout::Completed(_)) => return Ok(Flow::Continue),
            Err(e) => return self.report(e.into()),
        };
        writeln!(self.output, "Room occupied by: {guest_name}")?;

        let answer = or_exit!(self.prompt("Do you want to checkout? (y/n): "));
        if !is_yes(&answer) {
            return Ok(Flow::Continue);
        }

        match HotelService::checkout_room(inventory, room, true) {
            Ok(Checkout::Completed(bill)) => {
                writeln!(self.output, "\n{bill}")?;
                writeln!(self.output, "Checkout successful! Room deallocated.")?;
            }
            Ok(Checkout::Pending { .. }) => {}
            Err(e) => return self.report(e.into()),
        }
        Ok(Flow::Continue)
    }

    // -----------------------------------------------------------------------
    // Menus
    // -----------------------------------------------------------------------

    fn show_main_menu(&mut self) -> Result<(), InnkeepError> {
        writeln!(self.output, "\n=========================")?;
        writeln!(self.output, "  HOTEL MANAGEMENT SYSTEM")?;
        writeln!(self.output, "=========================")?;
        writeln!(self.output, "1. Display Room Details")?;
        writeln!(self.output, "2. Check Room Availability")?;
        writeln!(self.output, "3. Book Room")?;
        writeln!(self.output, "4. Order Food")?;
        writeln!(self.output, "5. Checkout")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output, "=========================")?;
        Ok(())
    }

    fn show_food_menu(&mut self) -> Result<(), InnkeepError> {
        writeln!(self.output, "\n===========")?;
        writeln!(self.output, "    MENU")?;
        writeln!(self.output, "===========")?;
        for item in MenuItem::ALL {
            writeln!(
                self.output,
                "{}. {:<9} - ₹{}",
                item.code(),
                item.name(),
                item.unit_price()
            )?;
        }
        writeln!(self.output, "===========")?;
        Ok(())
    }

    /// Shows the room-type submenu and reads a choice.
    ///
    /// Returns `Ok(None)` at end of input. An out-of-range choice is
    /// reported and asked for again.
    fn choose_category(
        &mut self,
        action: &str,
    ) -> Result<Option<RoomCategory>, InnkeepError> {
        writeln!(self.output, "\n{action}")?;
        for (n, category) in RoomCategory::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} ({}-{})",
                n + 1,
                category,
                category.first_room().0,
                category.last_room().0
            )?;
        }

        loop {
            let Some(choice) = self.prompt_number::<i64>("Choose room type: ")? else {
                return Ok(None);
            };
            match RoomCategory::from_menu_choice(choice) {
                Some(category) => return Ok(Some(category)),
                None => writeln!(self.output, "Invalid room type option")?,
            }
        }
    }

    fn read_guest(
        &mut self,
        who: &str,
    ) -> Result<Option<GuestDetails>, InnkeepError> {
        let Some(name) = self.prompt(&format!("Enter {who} name: "))? else {
            return Ok(None);
        };
        let Some(contact) = self.prompt("Enter contact number: ")? else {
            return Ok(None);
        };
        let Some(gender) = self.prompt("Enter gender: ")? else {
            return Ok(None);
        };
        Ok(Some(GuestDetails::new(name, contact, gender)))
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Prints a prompt and reads one trimmed line. `None` at end of input.
    ///
    /// Bytes that aren't UTF-8 are replaced rather than rejected, so a
    /// garbled line reaches the normal validation and gets re-prompted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, InnkeepError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Prompts until the user enters something that parses as `T`.
    fn prompt_number<T: FromStr>(
        &mut self,
        text: &str,
    ) -> Result<Option<T>, InnkeepError> {
        loop {
            let Some(raw) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse_number(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Prints a recoverable error and goes back to the main menu.
    fn report(&mut self, error: InnkeepError) -> Result<Flow, InnkeepError> {
        tracing::debug!(%error, "front-desk request rejected");
        writeln!(self.output, "{error}")?;
        Ok(Flow::Continue)
    }
}

/// Parses console input as a number.
///
/// # Errors
/// [`InnkeepError::MalformedNumericInput`] carrying the raw text.
pub fn parse_number<T: FromStr>(raw: &str) -> Result<T, InnkeepError> {
    raw.trim()
        .parse()
        .map_err(|_| InnkeepError::MalformedNumericInput(raw.trim().to_string()))
}

fn is_yes(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
