pub mod models;
pub mod routes;
pub mod store;

use async_trait::async_trait;
use axum::Router;
use once_cell::sync::OnceCell;
use roamstay_kernel::{InitCtx, Migration, Module};
use serde_json::json;
use sqlx::SqlitePool;

pub use models::{Booking, BookingFilter, BookingInput};

/// Bookings module. Must be registered after the listings module, whose
/// table it references.
pub struct BookingsModule {
    pool: OnceCell<SqlitePool>,
}

impl BookingsModule {
    pub const fn new() -> Self {
        Self {
            pool: OnceCell::new(),
        }
    }
}

#[async_trait]
impl Module for BookingsModule {
    fn name(&self) -> &'static str {
        "bookings"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if self.pool.set(ctx.db.clone()).is_err() {
            tracing::warn!(
                module = self.name(),
                "module already initialized; keeping the original pool"
            );
        }
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "bookings module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        match self.pool.get() {
            Some(pool) => routes::router(pool.clone()),
            None => {
                tracing::warn!(module = self.name(), "routes requested before init");
                Router::new()
            }
        }
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let booking_ref = json!({ "$ref": "#/components/schemas/Booking" });
        let error_ref = json!({ "$ref": "#/components/schemas/ErrorResponse" });

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List bookings",
                        "tags": ["Bookings"],
                        "parameters": [{
                            "name": "listing",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "integer" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Bookings in creation order",
                                "content": { "application/json": { "schema": { "type": "array", "items": booking_ref } } }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a booking",
                        "tags": ["Bookings"],
                        "requestBody": {
                            "required": true,
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/BookingInput" } } }
                        },
                        "responses": {
                            "201": {
                                "description": "Created booking",
                                "content": { "application/json": { "schema": booking_ref } }
                            },
                            "400": {
                                "description": "Referenced listing does not exist",
                                "content": { "application/json": { "schema": error_ref } }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Retrieve a booking",
                        "tags": ["Bookings"],
                        "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "integer" } }],
                        "responses": {
                            "200": {
                                "description": "The booking",
                                "content": { "application/json": { "schema": booking_ref } }
                            },
                            "404": {
                                "description": "Booking not found",
                                "content": { "application/json": { "schema": error_ref } }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Booking": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "readOnly": true },
                            "listing": { "type": "integer", "description": "Id of the booked listing" },
                            "user": { "type": "string", "maxLength": 100 },
                            "start_date": { "type": "string", "format": "date" },
                            "end_date": { "type": "string", "format": "date" }
                        },
                        "required": ["id", "listing", "user", "start_date", "end_date"]
                    },
                    "BookingInput": {
                        "type": "object",
                        "properties": {
                            "listing": { "type": "integer" },
                            "user": { "type": "string", "maxLength": 100 },
                            "start_date": { "type": "string", "format": "date" },
                            "end_date": { "type": "string", "format": "date" }
                        },
                        "required": ["listing", "user", "start_date", "end_date"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE booking (
                    id         INTEGER PRIMARY KEY AUTOINCREMENT,
                    listing_id INTEGER NOT NULL REFERENCES listing (id) ON DELETE CASCADE,
                    user       TEXT    NOT NULL,
                    start_date DATE    NOT NULL,
                    end_date   DATE    NOT NULL
                );
                CREATE INDEX booking_listing_idx ON booking (listing_id);
                "#,
        }]
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "bookings module stopped");
        Ok(())
    }
}

/// Create a new instance of the bookings module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BookingsModule::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use roamstay_kernel::settings::Settings;

    #[tokio::test]
    async fn repeated_init_is_not_an_error() {
        let settings = Settings::default();
        let pool = testing::pool().await;
        let module = BookingsModule::new();
        let ctx = InitCtx {
            settings: &settings,
            db: &pool,
        };

        module.init(&ctx).await.unwrap();
        module.init(&ctx).await.unwrap();
        assert!(module.pool.get().is_some());
    }
}
