use serde::Serialize;
use std::fmt;

/// Number of seat columns on the coach (1..=5, aisle between 3 and 4).
pub const COLUMNS: u8 = 5;
/// Number of seat rows on the coach (1..=8).
pub const ROWS: u8 = 8;

/// A seat identifier known to encode a real position on the coach.
///
/// The tens digit is the column, the units digit is the row: seat `34`
/// is column 3, row 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SeatNumber(u8);

impl SeatNumber {
    /// Validate a raw identifier coming from the user.
    pub fn from_id(id: i64) -> Option<Self> {
        if !(0..100).contains(&id) {
            return None;
        }
        let id = id as u8;
        Self::from_position(id / 10, id % 10)
    }

    pub fn from_position(column: u8, row: u8) -> Option<Self> {
        if (1..=COLUMNS).contains(&column) && (1..=ROWS).contains(&row) {
            Some(SeatNumber(column * 10 + row))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn column(self) -> u8 {
        self.0 / 10
    }

    pub fn row(self) -> u8 {
        self.0 % 10
    }

    /// Every seat of the layout, column by column (11..=18, 21..=28, ...).
    pub fn all() -> impl Iterator<Item = SeatNumber> {
        (1..=COLUMNS).flat_map(|c| (1..=ROWS).map(move |r| SeatNumber(c * 10 + r)))
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeatState {
    Available,
    Booked,
}

impl SeatState {
    pub fn is_booked(&self) -> bool {
        matches!(self, SeatState::Booked)
    }
}
