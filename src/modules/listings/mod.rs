pub mod models;
pub mod routes;
pub mod store;

use async_trait::async_trait;
use axum::Router;
use once_cell::sync::OnceCell;
use roamstay_kernel::{InitCtx, Migration, Module};
use serde_json::json;
use sqlx::SqlitePool;

pub use models::{Listing, ListingFilter, ListingInput};

/// Listings module: the `listing` table and its REST resource.
pub struct ListingsModule {
    pool: OnceCell<SqlitePool>,
}

impl ListingsModule {
    pub const fn new() -> Self {
        Self {
            pool: OnceCell::new(),
        }
    }
}

#[async_trait]
impl Module for ListingsModule {
    fn name(&self) -> &'static str {
        "listings"
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
            "listings module initialized"
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
        let listing_ref = json!({ "$ref": "#/components/schemas/Listing" });
        let error_ref = json!({ "$ref": "#/components/schemas/ErrorResponse" });

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List listings",
                        "tags": ["Listings"],
                        "parameters": [{
                            "name": "available",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "boolean" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Listings in creation order",
                                "content": { "application/json": { "schema": { "type": "array", "items": listing_ref } } }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a listing",
                        "tags": ["Listings"],
                        "requestBody": {
                            "required": true,
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ListingInput" } } }
                        },
                        "responses": {
                            "201": {
                                "description": "Created listing",
                                "content": { "application/json": { "schema": listing_ref } }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Retrieve a listing",
                        "tags": ["Listings"],
                        "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "integer" } }],
                        "responses": {
                            "200": {
                                "description": "The listing",
                                "content": { "application/json": { "schema": listing_ref } }
                            },
                            "404": {
                                "description": "Listing not found",
                                "content": { "application/json": { "schema": error_ref } }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete a listing and its bookings",
                        "tags": ["Listings"],
                        "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "integer" } }],
                        "responses": {
                            "204": { "description": "Deleted" },
                            "404": {
                                "description": "Listing not found",
                                "content": { "application/json": { "schema": error_ref } }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Listing": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "readOnly": true },
                            "title": { "type": "string", "maxLength": 200 },
                            "description": { "type": "string" },
                            "price": { "type": "string", "format": "decimal", "example": "150.00" },
                            "available": { "type": "boolean" }
                        },
                        "required": ["id", "title", "description", "price", "available"]
                    },
                    "ListingInput": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string", "maxLength": 200 },
                            "description": { "type": "string" },
                            "price": { "type": "string", "format": "decimal" },
                            "available": { "type": "boolean", "default": true }
                        },
                        "required": ["title", "description", "price"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE listing (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    title       TEXT    NOT NULL,
                    description TEXT    NOT NULL,
                    price       TEXT    NOT NULL,
                    available   BOOLEAN NOT NULL DEFAULT 1
                );
                CREATE INDEX listing_available_idx ON listing (available);
                "#,
        }]
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "listings module stopped");
        Ok(())
    }
}

/// Create a new instance of the listings module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(ListingsModule::new())
}
