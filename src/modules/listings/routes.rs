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
use sqlx::SqlitePool;

use super::models::{Listing, ListingFilter, ListingInput};
use super::store;

/// HTTP routes for the listings module, relative to its mount point.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(list_listings).post(create_listing))
        .route("/{id}", get(retrieve_listing).delete(destroy_listing))
        .with_state(pool)
}

async fn list_listings(
    State(pool): State<SqlitePool>,
    filter: Result<Query<ListingFilter>, QueryRejection>,
) -> Result<Json<Vec<Listing>>, AppError> {
    let Query(filter) = filter?;
    Ok(Json(store::list(&pool, filter).await?))
}

async fn create_listing(
    State(pool): State<SqlitePool>,
    input: Result<Json<ListingInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    let Json(input) = input?;
    let listing = store::create(&pool, &input).await?;
    tracing::info!(listing_id = listing.id, title = %listing.title, "listing created");
    Ok((StatusCode::CREATED, Json(listing)))
}

async fn retrieve_listing(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Listing>, AppError> {
    let Path(id) = id?;
    store::get(&pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("listing {id} not found")))
}

async fn destroy_listing(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    if store::delete(&pool, id).await? {
        tracing::info!(listing_id = id, "listing deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("listing {id} not found")))
    }
}
