//! Text rendering of the coach layout.

use crate::core::view::{AISLE_AFTER, CellStatus, SeatGrid};
use crate::models::seat::COLUMNS;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{bold, describe_status, pad_right};

const CELL_WIDTH: usize = 6;
const AISLE: &str = "  ||  ";

/// Legend line: one marker per seat status.
pub fn legend() -> String {
    [
        CellStatus::Available,
        CellStatus::Booked,
        CellStatus::Selected,
    ]
    .into_iter()
    .map(|s| {
        let (marker, label) = describe_status(s);
        format!("{marker} = {label}")
    })
    .collect::<Vec<_>>()
    .join(" ; ")
}

/// Render the grid. Rows go top to bottom, columns left to right with
/// the aisle between columns 3 and 4.
pub fn render_grid(grid: &SeatGrid, show_legend: bool) -> String {
    let mut out = String::new();

    out.push_str(&bold("Coach - Seat Layout"));
    out.push('\n');
    if show_legend {
        out.push_str(&legend());
        out.push('\n');
    }
    out.push('\n');

    // header: C1 C2 C3 || C4 C5
    out.push_str(&pad_right("", 4));
    for column in 1..=COLUMNS {
        out.push_str(&pad_right(&format!("C{column}"), CELL_WIDTH));
        if column == AISLE_AFTER {
            out.push_str(&" ".repeat(AISLE.len()));
        }
    }
    out.push('\n');

    for (i, row) in grid.rows.iter().enumerate() {
        out.push_str(&pad_right(&format!("R{}", i + 1), 4));
        for cell in row {
            let (marker, _) = describe_status(cell.status);
            out.push_str(&format!(
                "{}{}{}{}",
                color_for_status(cell.status),
                marker,
                pad_right(&cell.seat.to_string(), CELL_WIDTH - 2),
                RESET
            ));
            if cell.seat.column() == AISLE_AFTER {
                out.push_str(AISLE);
            }
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "Available: {} | Booked: {}\n",
        grid.available, grid.booked
    ));

    out
}
