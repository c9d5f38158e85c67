use super::passenger::PassengerDetails;
use super::seat::SeatNumber;
use serde::Serialize;

/// A confirmed reservation. Field names follow the export header
/// `Name,phone_number,email_id,location,destination,seat_number,Column,Row`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "phone_number")]
    pub phone: String,
    #[serde(rename = "email_id")]
    pub email: String,
    pub location: String,
    pub destination: String,
    pub seat_number: u8,
    #[serde(rename = "Column")]
    pub column: u8,
    #[serde(rename = "Row")]
    pub row: u8,
}

impl BookingRecord {
    pub fn new(seat: SeatNumber, details: &PassengerDetails) -> Self {
        Self {
            name: details.name.trim().to_string(),
            phone: details.phone.trim().to_string(),
            email: details.email.trim().to_string(),
            location: details.location.trim().to_string(),
            destination: details.destination.trim().to_string(),
            seat_number: seat.value(),
            column: seat.column(),
            row: seat.row(),
        }
    }
}
