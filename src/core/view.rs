use crate::core::session::SessionState;
use crate::models::seat::{COLUMNS, ROWS, SeatNumber, SeatState};

/// Aisle sits after this column.
pub const AISLE_AFTER: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Available,
    Booked,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatCell {
    pub seat: SeatNumber,
    pub status: CellStatus,
}

/// Snapshot of the coach layout, one `Vec` per seat row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    pub rows: Vec<Vec<SeatCell>>,
    pub available: usize,
    pub booked: usize,
}

impl SeatGrid {
    pub fn cell(&self, seat: SeatNumber) -> Option<&SeatCell> {
        self.rows
            .get(usize::from(seat.row()) - 1)
            .and_then(|row| row.get(usize::from(seat.column()) - 1))
    }
}

pub fn seat_grid(state: &SessionState) -> SeatGrid {
    let inventory = state.service().inventory();
    let selected = state.selected_seat();

    let rows = (1..=ROWS)
        .map(|row| {
            (1..=COLUMNS)
                .filter_map(|column| SeatNumber::from_position(column, row))
                .map(|seat| {
                    let status = match inventory.state(seat) {
                        SeatState::Booked => CellStatus::Booked,
                        SeatState::Available if selected == Some(seat) => CellStatus::Selected,
                        SeatState::Available => CellStatus::Available,
                    };
                    SeatCell { seat, status }
                })
                .collect()
        })
        .collect();

    SeatGrid {
        rows,
        available: inventory.available_count(),
        booked: inventory.booked_count(),
    }
}
