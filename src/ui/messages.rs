//! Console output for the booking session.
//!
//! Everything goes to stdout so a scripted session reads as one ordered
//! transcript; fatal errors are printed by `main`.

use crate::models::booking::BookingRecord;
use crate::models::outcome::Outcome;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    let (color, icon) = level.style();
    println!("{color}{BOLD}{icon} {RESET}{msg}");
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("\x1b[34m{BOLD}====================== {msg}{RESET}");
}

/// Result of a session handler: green when it went through, red otherwise.
pub fn outcome(outcome: &Outcome) {
    let level = if outcome.ok {
        Level::Success
    } else {
        Level::Error
    };
    emit(level, &outcome.message);
}

/// Confirmation card shown after a seat is booked.
pub fn booking_confirmed(record: &BookingRecord) {
    success("🎉 Booking Confirmed!");
    println!("Name:  {}", record.name);
    println!("Email: {}", record.email);
    println!("Phone: {}", record.phone);
    println!("From:  {}", record.location);
    println!("To:    {}", record.destination);
    println!(
        "Seat Booked: {} (Column {}, Row {})",
        record.seat_number, record.column, record.row
    );
    println!("Thank you for booking with us!");
}
