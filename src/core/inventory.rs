use crate::models::seat::{SeatNumber, SeatState};
use std::collections::BTreeMap;

/// Occupancy of every seat on the coach.
///
/// The set of valid seats is fixed when the inventory is built; after
/// that the only mutation is `mark_occupied`.
#[derive(Debug, Clone)]
pub struct SeatInventory {
    occupancy: BTreeMap<SeatNumber, SeatState>,
}

impl SeatInventory {
    /// Full 40-seat layout, all seats available.
    pub fn new() -> Self {
        Self {
            occupancy: SeatNumber::all()
                .map(|seat| (seat, SeatState::Available))
                .collect(),
        }
    }

    pub fn is_valid_seat(&self, id: i64) -> bool {
        SeatNumber::from_id(id).is_some_and(|seat| self.contains(seat))
    }

    pub fn contains(&self, seat: SeatNumber) -> bool {
        self.occupancy.contains_key(&seat)
    }

    pub fn is_occupied(&self, seat: SeatNumber) -> bool {
        self.state(seat).is_booked()
    }

    pub fn state(&self, seat: SeatNumber) -> SeatState {
        self.occupancy
            .get(&seat)
            .copied()
            .unwrap_or(SeatState::Available)
    }

    /// Flip a seat to booked. Callers validate the seat beforehand.
    pub fn mark_occupied(&mut self, seat: SeatNumber) {
        if let Some(state) = self.occupancy.get_mut(&seat) {
            *state = SeatState::Booked;
        }
    }

    /// Seats in ascending identifier order.
    pub fn seats(&self) -> impl Iterator<Item = (SeatNumber, SeatState)> + '_ {
        self.occupancy.iter().map(|(seat, state)| (*seat, *state))
    }

    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.occupancy.values().filter(|s| !s.is_booked()).count()
    }

    pub fn booked_count(&self) -> usize {
        self.occupancy.values().filter(|s| s.is_booked()).count()
    }
}

impl Default for SeatInventory {
    fn default() -> Self {
        Self::new()
    }
}
