//! Unified application error type.
//! Booking failures live in their own enum so the core can be used
//! without the CLI; everything else (config, io, export) is an AppError.

use crate::models::seat::SeatNumber;
use std::io;
use thiserror::Error;

/// Recoverable, user-facing failures of the booking core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Seat {0} does not exist!")]
    SeatDoesNotExist(i64),

    #[error("Seat {0} is already occupied!")]
    SeatAlreadyOccupied(SeatNumber),

    #[error("Please fill in all passenger details (missing: {})", .missing.join(", "))]
    IncompletePassengerDetails { missing: Vec<&'static str> },

    /// Raised by the session before a booking is attempted.
    #[error("Please select a seat first.")]
    NoSeatSelected,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Booking
    // ---------------------------
    #[error("{0}")]
    Booking(#[from] BookingError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
