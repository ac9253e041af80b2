use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roamstay_http::error::AppError;
use serde_json::json;
use sqlx::SqlitePool;

use super::models::{Booking, BookingFilter, BookingInput};
use super::store;
use crate::modules::listings;

pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/{id}", get(retrieve_booking))
        .with_state(pool)
}

async fn list_bookings(
    State(pool): State<SqlitePool>,
    filter: Result<Query<BookingFilter>, QueryRejection>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let Query(filter) = filter?;
    Ok(Json(store::list(&pool, filter).await?))
}

async fn create_booking(
    State(pool): State<SqlitePool>,
    input: Result<Json<BookingInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let Json(input) = input?;
    let Some(listing) = listings::store::get(&pool, input.listing).await? else {
        return Err(AppError::bad_request(
            vec![json!({"field": "listing", "error": "does not exist"})],
            format!("listing {} does not exist", input.listing),
        ));
    };

    let booking = store::create(&pool, &input).await?;
    tracing::info!(
        booking_id = booking.id,
        listing_id = listing.id,
        "{}",
        booking.describe(&listing)
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn retrieve_booking(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Booking>, AppError> {
    let Path(id) = id?;
    store::get(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("booking {id} not found")))
}
