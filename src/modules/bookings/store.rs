//! SQLite queries for the `booking` table.

use anyhow::Context;
use sqlx::SqlitePool;

use super::models::{Booking, BookingFilter, BookingInput};

const SELECT_BOOKING: &str = "SELECT id, listing_id, user, start_date, end_date FROM booking";

/// Insert a booking. Fails if the referenced listing does not exist.
pub async fn create(pool: &SqlitePool, input: &BookingInput) -> anyhow::Result<Booking> {
    let id = sqlx::query(
        "INSERT INTO booking (listing_id, user, start_date, end_date) VALUES (?, ?, ?, ?)",
    )
    .bind(input.listing)
    .bind(&input.user)
    .bind(input.start_date)
    .bind(input.end_date)
    .execute(pool)
    .await
    .with_context(|| format!("failed to insert booking for listing {}", input.listing))?
    .last_insert_rowid();

    Ok(Booking {
        id,
        listing: input.listing,
        user: input.user.clone(),
        start_date: input.start_date,
        end_date: input.end_date,
    })
}

pub async fn get(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<Booking>> {
    sqlx::query_as::<_, Booking>(&format!("{SELECT_BOOKING} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("failed to load booking {id}"))
}

pub async fn list(pool: &SqlitePool, filter: BookingFilter) -> anyhow::Result<Vec<Booking>> {
    sqlx::query_as::<_, Booking>(&format!(
        "{SELECT_BOOKING} WHERE (?1 IS NULL OR listing_id = ?1) ORDER BY id"
    ))
    .bind(filter.listing)
    .fetch_all(pool)
    .await
    .context("failed to list bookings")
}

pub async fn delete_all(pool: &SqlitePool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM booking")
        .execute(pool)
        .await
        .context("failed to clear bookings")?;
    Ok(result.rows_affected())
}
