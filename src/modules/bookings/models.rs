use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::listings::Listing;

/// A reservation of one listing by a named guest.
///
/// `end_date` is expected to follow `start_date`, but nothing enforces it and
/// overlapping bookings on the same listing are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    /// Id of the booked listing
    #[sqlx(rename = "listing_id")]
    pub listing: i64,
    /// Free-text guest name
    pub user: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Booking {
    /// Human-readable label, e.g. `Booking for Beachfront Villa by Emma Johnson`.
    pub fn describe(&self, listing: &Listing) -> String {
        format!("Booking for {} by {}", listing.title, self.user)
    }
}

/// Writable fields of a booking. Any `id` in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInput {
    pub listing: i64,
    pub user: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BookingFilter {
    pub listing: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn booking() -> Booking {
        Booking {
            id: 3,
            listing: 9,
            user: "Emma Johnson".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 11, 9).unwrap(),
        }
    }

    #[test]
    fn describes_with_listing_title_and_user() {
        let listing = Listing {
            id: 9,
            title: "Beachfront Villa".to_string(),
            description: String::new(),
            price: Decimal::new(30000, 2),
            available: true,
        };
        assert_eq!(
            booking().describe(&listing),
            "Booking for Beachfront Villa by Emma Johnson"
        );
    }

    #[test]
    fn serializes_listing_as_foreign_key_and_iso_dates() {
        let value = serde_json::to_value(booking()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "listing": 9,
                "user": "Emma Johnson",
                "start_date": "2026-11-02",
                "end_date": "2026-11-09"
            })
        );
    }

    #[test]
    fn input_ignores_supplied_id() {
        let input: BookingInput = serde_json::from_value(json!({
            "id": 999,
            "listing": 9,
            "user": "Emma Johnson",
            "start_date": "2026-11-02",
            "end_date": "2026-11-09"
        }))
        .unwrap();

        assert_eq!(input.listing, 9);
        assert_eq!(input.end_date, NaiveDate::from_ymd_opt(2026, 11, 9).unwrap());
    }
}
