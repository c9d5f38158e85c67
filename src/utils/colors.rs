/// ANSI color helper utilities for terminal output.
use crate::core::view::CellStatus;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";

/// Seat color:
/// available → green
/// booked → red
/// selected → blue
pub fn color_for_status(status: CellStatus) -> &'static str {
    match status {
        CellStatus::Available => GREEN,
        CellStatus::Booked => RED,
        CellStatus::Selected => BLUE,
    }
}
