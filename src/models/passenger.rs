use serde::{Deserialize, Serialize};

/// Data collected by the passenger form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub destination: String,
}

impl PassengerDetails {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            location: location.into(),
            destination: destination.into(),
        }
    }

    /// Names of the fields left blank (whitespace counts as blank).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("location", &self.location),
            ("destination", &self.destination),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}
