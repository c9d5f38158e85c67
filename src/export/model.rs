// src/export/model.rs

use crate::models::booking::BookingRecord;

/// Header per CSV / XLSX / tabella a video
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Name",
        "phone_number",
        "email_id",
        "location",
        "destination",
        "seat_number",
        "Column",
        "Row",
    ]
}

/// Convert a booking into a row of strings, same order as `get_headers`.
pub(crate) fn booking_to_row(b: &BookingRecord) -> Vec<String> {
    vec![
        b.name.clone(),
        b.phone.clone(),
        b.email.clone(),
        b.location.clone(),
        b.destination.clone(),
        b.seat_number.to_string(),
        b.column.to_string(),
        b.row.to_string(),
    ]
}

pub(crate) fn bookings_to_table(bookings: &[BookingRecord]) -> Vec<Vec<String>> {
    bookings.iter().map(booking_to_row).collect()
}
