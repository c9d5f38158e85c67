//! Session state and the handlers driven by user actions.
//!
//! A `SessionState` is created when the operator opens a session and is
//! passed by `&mut` to each handler. Handlers never print: they return
//! an `Outcome` for the presentation layer to display.

use crate::core::booking::BookingService;
use crate::core::log::ActivityLog;
use crate::errors::BookingError;
use crate::models::booking::BookingRecord;
use crate::models::outcome::Outcome;
use crate::models::passenger::PassengerDetails;
use crate::models::seat::SeatNumber;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    service: BookingService,
    selected: Option<SeatNumber>,
    activity: ActivityLog,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(&self) -> &BookingService {
        &self.service
    }

    pub fn selected_seat(&self) -> Option<SeatNumber> {
        self.selected
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        self.service.bookings()
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Record a session-level event (start, export, end) in the activity log.
    pub fn note(&mut self, operation: &str, target: &str, message: &str) {
        self.activity.record(operation, target, message);
    }
}

fn describe(seat: SeatNumber) -> String {
    format!(
        "Selected Seat: {} (Column {}, Row {})",
        seat,
        seat.column(),
        seat.row()
    )
}

fn reject(state: &mut SessionState, target: &str, err: BookingError) -> Outcome {
    state.activity.record("reject", target, &err.to_string());
    Outcome::failure(err)
}

/// Choose a seat. A seat that does not exist or is taken leaves the
/// previous selection in place.
pub fn select_seat(state: &mut SessionState, seat_id: i64) -> Outcome {
    let target = seat_id.to_string();
    match state.service.check_availability(seat_id) {
        Ok(seat) => {
            state.selected = Some(seat);
            let message = describe(seat);
            state.activity.record("select", &target, &message);
            Outcome::success(message)
        }
        Err(err) => reject(state, &target, err),
    }
}

/// Abandon the current selection. Nothing is reserved until booked.
pub fn clear_selection(state: &mut SessionState) -> Outcome {
    match state.selected.take() {
        Some(seat) => {
            let message = format!("Selection of seat {seat} cleared.");
            state.activity.record("clear", &seat.to_string(), &message);
            Outcome::success(message)
        }
        None => {
            state.activity.record("clear", "", "No seat selected.");
            Outcome::success("No seat selected.")
        }
    }
}

/// Availability query for a single seat. Does not touch the selection.
pub fn check_seat(state: &mut SessionState, seat_id: i64) -> Outcome {
    let target = seat_id.to_string();
    match state.service.check_availability(seat_id) {
        Ok(_) => {
            state.activity.record("check", &target, "Seat available");
            Outcome::success("Seat available")
        }
        Err(err) => {
            state.activity.record("check", &target, &err.to_string());
            Outcome::failure(err)
        }
    }
}

/// Confirm the passenger form for the selected seat.
pub fn submit_booking(state: &mut SessionState, details: &PassengerDetails) -> Outcome {
    let Some(seat) = state.selected else {
        return reject(state, "", BookingError::NoSeatSelected);
    };

    let target = seat.to_string();
    match state.service.book_seat(i64::from(seat.value()), details) {
        Ok(record) => {
            state.selected = None;
            state.activity.record(
                "book",
                &target,
                &format!(
                    "{} ({} -> {})",
                    record.name, record.location, record.destination
                ),
            );
            Outcome::booked(record)
        }
        Err(err) => {
            // a seat taken in the meantime cannot stay selected
            if matches!(err, BookingError::SeatAlreadyOccupied(_)) {
                state.selected = None;
            }
            reject(state, &target, err)
        }
    }
}
