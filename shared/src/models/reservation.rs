//! Reservation Model

use serde::{Deserialize, Serialize};

/// Persisted reservation record.
///
/// Created once per successful submission and appended to the stored list;
/// never mutated or deleted afterwards. Later availability checks do not
/// read it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Confirmation code (6 uppercase base-36 chars)
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// 30-minute slot, HH:MM
    pub time: String,
    /// Guests, 1–10
    pub party_size: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Unix millis at submission
    pub created_at: i64,
}

/// Reservation form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Calendar date, YYYY-MM-DD (today or later)
    pub date: String,
    /// Requested slot, HH:MM
    pub time: String,
    pub party_size: u8,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Result of an availability estimate (ephemeral, computed per query)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub free_seats: u32,
    pub capacity: u32,
    pub bookable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_notes_are_optional_on_the_wire() {
        let json = r#"{
            "id": "A1B2C3",
            "name": "Samir Ben Ali",
            "email": "samir@exemple.com",
            "phone": "06 11 22 33 44",
            "date": "2099-01-10",
            "time": "19:30",
            "party_size": 2,
            "created_at": 1700000000000
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.id, "A1B2C3");
        assert!(reservation.notes.is_none());

        let out = serde_json::to_value(&reservation).unwrap();
        assert!(out.get("notes").is_none());
    }
}
