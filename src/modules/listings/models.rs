use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Number of fractional digits every stored price carries.
pub const PRICE_SCALE: u32 = 2;

/// A rentable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Assigned by the database on insert
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Nightly price, serialized as a decimal string such as `"150.00"`
    pub price: Decimal,
    pub available: bool,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

// Prices live in a TEXT column so that no precision is lost to REAL.
impl<'r> FromRow<'r, SqliteRow> for Listing {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let raw_price: String = row.try_get("price")?;
        let price = Decimal::from_str(&raw_price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            price,
            available: row.try_get("available")?,
        })
    }
}

/// Writable fields of a listing. Any `id` in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Query-string filter for listing collections.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListingFilter {
    pub available: Option<bool>,
}

/// Round to two fractional digits (half to even) and pad to exactly two, so
/// `150` is stored and emitted as `150.00`.
pub fn normalize_price(price: Decimal) -> Decimal {
    let mut rounded = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(PRICE_SCALE);
    rounded
}
