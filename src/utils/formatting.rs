//! Formatting utilities used for CLI and export outputs.

use crate::core::view::CellStatus;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Short marker and label for a seat in the grid legend.
pub fn describe_status(status: CellStatus) -> (&'static str, &'static str) {
    match status {
        CellStatus::Available => ("🟩", "Available"),
        CellStatus::Booked => ("🟥", "Booked"),
        CellStatus::Selected => ("🟦", "Selected"),
    }
}
