pub mod booking;
pub mod outcome;
pub mod passenger;
pub mod seat;
