use super::booking::BookingRecord;
use crate::errors::BookingError;
use serde::Serialize;

/// What a session handler hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<BookingRecord>,
    #[serde(skip)]
    pub error: Option<BookingError>,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            record: None,
            error: None,
        }
    }

    pub fn booked(record: BookingRecord) -> Self {
        Self {
            ok: true,
            message: "Booking Confirmed!".to_string(),
            record: Some(record),
            error: None,
        }
    }

    pub fn failure(err: BookingError) -> Self {
        Self {
            ok: false,
            message: err.to_string(),
            record: None,
            error: Some(err),
        }
    }
}
