//! SQLite queries for the `listing` table.

use anyhow::Context;
use sqlx::SqlitePool;

use super::models::{normalize_price, Listing, ListingFilter, ListingInput};

const SELECT_LISTING: &str = "SELECT id, title, description, price, available FROM listing";

/// Insert a listing and return it with its assigned id.
pub async fn create(pool: &SqlitePool, input: &ListingInput) -> anyhow::Result<Listing> {
    let price = normalize_price(input.price);

    let id = sqlx::query(
        "INSERT INTO listing (title, description, price, available) VALUES (?, ?, ?, ?)",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(price.to_string())
    .bind(input.available)
    .execute(pool)
    .await
    .with_context(|| format!("failed to insert listing '{}'", input.title))?
    .last_insert_rowid();

    Ok(Listing {
        id,
        title: input.title.clone(),
        description: input.description.clone(),
        price,
        available: input.available,
    })
}

pub async fn get(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<Listing>> {
    sqlx::query_as::<_, Listing>(&format!("{SELECT_LISTING} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("failed to load listing {id}"))
}

/// All listings matching `filter`, oldest first.
pub async fn list(pool: &SqlitePool, filter: ListingFilter) -> anyhow::Result<Vec<Listing>> {
    sqlx::query_as::<_, Listing>(&format!(
        "{SELECT_LISTING} WHERE (?1 IS NULL OR available = ?1) ORDER BY id"
    ))
    .bind(filter.available)
    .fetch_all(pool)
    .await
    .context("failed to list listings")
}

pub async fn list_available(pool: &SqlitePool) -> anyhow::Result<Vec<Listing>> {
    list(
        pool,
        ListingFilter {
            available: Some(true),
        },
    )
    .await
}

/// Delete one listing; its bookings go with it. Returns whether a row existed.
pub async fn delete(pool: &SqlitePool, id: i64) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM listing WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .with_context(|| format!("failed to delete listing {id}"))?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_all(pool: &SqlitePool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM listing")
        .execute(pool)
        .await
        .context("failed to clear listings")?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use rust_decimal::Decimal;

    fn input(title: &str, available: bool) -> ListingInput {
        ListingInput {
            title: title.to_string(),
            description: format!("{title} description"),
            price: Decimal::new(1995, 1),
            available,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_normalizes_price() {
        let pool = testing::pool().await;

        let created = create(&pool, &input("Beachfront Villa", true)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.price.to_string(), "199.50");

        let loaded = get(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn list_filters_on_availability() {
        let pool = testing::pool().await;
        create(&pool, &input("Open", true)).await.unwrap();
        create(&pool, &input("Closed", false)).await.unwrap();

        let all = list(&pool, ListingFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let available = list_available(&pool).await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].title, "Open");

        let closed = list(
            &pool,
            ListingFilter {
                available: Some(false),
            },
        )
        .await
        .unwrap();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].title, "Closed");
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let pool = testing::pool().await;
        let listing = create(&pool, &input("Loft", true)).await.unwrap();

        assert!(delete(&pool, listing.id).await.unwrap());
        assert!(!delete(&pool, listing.id).await.unwrap());
        assert!(get(&pool, listing.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_all_empties_table() {
        let pool = testing::pool().await;
        create(&pool, &input("A", true)).await.unwrap();
        create(&pool, &input("B", false)).await.unwrap();

        assert_eq!(delete_all(&pool).await.unwrap(), 2);
        assert!(list(&pool, ListingFilter::default()).await.unwrap().is_empty());
    }
}
