use crate::core::inventory::SeatInventory;
use crate::errors::BookingError;
use crate::models::booking::BookingRecord;
use crate::models::passenger::PassengerDetails;
use crate::models::seat::SeatNumber;

/// Availability checks and booking on top of a `SeatInventory`.
///
/// Every successful booking is appended to an ordered log; a failed
/// call leaves both the inventory and the log untouched.
#[derive(Debug, Clone, Default)]
pub struct BookingService {
    inventory: SeatInventory,
    bookings: Vec<BookingRecord>,
}

impl BookingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the validated seat when it exists and is still free.
    pub fn check_availability(&self, seat_id: i64) -> Result<SeatNumber, BookingError> {
        let seat = SeatNumber::from_id(seat_id)
            .filter(|seat| self.inventory.contains(*seat))
            .ok_or(BookingError::SeatDoesNotExist(seat_id))?;

        if self.inventory.is_occupied(seat) {
            return Err(BookingError::SeatAlreadyOccupied(seat));
        }

        Ok(seat)
    }

    pub fn book_seat(
        &mut self,
        seat_id: i64,
        details: &PassengerDetails,
    ) -> Result<BookingRecord, BookingError> {
        // the seat may have been taken since it was selected
        let seat = self.check_availability(seat_id)?;

        let missing = details.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::IncompletePassengerDetails { missing });
        }

        self.inventory.mark_occupied(seat);

        let record = BookingRecord::new(seat, details);
        self.bookings.push(record.clone());

        Ok(record)
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn inventory(&self) -> &SeatInventory {
        &self.inventory
    }
}
