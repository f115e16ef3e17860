// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::*;
use crate::web_app::repository::{ProductRepository, RepositoryError};

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use crate::web_app::api::db;
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use sqlx::PgPool;

    // First try to get from context (for testing or if manually set)
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    // Try global pool (most reliable fallback)
    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }

            if let Some(pool) = req.app_data::<PgPool>() {
                return Ok(pool.clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Database pool not available"))
}

/// List products for the admin grid
///
/// Narrows by category when the filter has one, then keeps the products
/// whose name or description contains the search term.
#[server(ListProducts, "/api")]
pub async fn list_products(filter: ProductFilter) -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("List products request: filter={:?}", filter);

    let pool = pool().await?;
    let results = queries::list_products(&pool, &filter).await;

    match &results {
        Ok(products) => tracing::info!("Listed {} products", products.len()),
        Err(e) => tracing::error!("Listing products failed: {}", e),
    }

    results.map_err(|e| ServerFnError::new(format!("Failed to list products: {}", e)))
}

/// List every category for the filter selector
#[server(ListCategories, "/api")]
pub async fn list_categories() -> Result<Vec<Category>, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::list_categories(&pool)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to list categories: {}", e)))
}

/// Delete a product inside a transaction
///
/// A missing product is a regular outcome (`DeleteOutcome::NotFound`), not
/// a transport error.
#[server(DeleteProduct, "/api")]
pub async fn delete_product(id: String) -> Result<DeleteOutcome, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Delete request: id='{}'", id);

    let pool = pool().await?;
    match queries::delete_product(&pool, &id).await {
        Ok(()) => Ok(DeleteOutcome::Deleted),
        Err(RepositoryError::NotFound(_)) => {
            tracing::warn!("Delete failed: product '{}' does not exist", id);
            Ok(DeleteOutcome::NotFound)
        }
        Err(e) => {
            tracing::error!("Delete failed: {}", e);
            Err(ServerFnError::new(format!("Transaction failed: {}", e)))
        }
    }
}

/// `ProductRepository` used by the page: every call goes through the
/// server functions above.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnRepository;

impl ProductRepository for ServerFnRepository {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        list_products(filter.clone())
            .await
            .map_err(RepositoryError::backend)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        list_categories().await.map_err(RepositoryError::backend)
    }

    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        match delete_product(id.to_string()).await {
            Ok(DeleteOutcome::Deleted) => Ok(()),
            Ok(DeleteOutcome::NotFound) => Err(RepositoryError::NotFound(id.to_string())),
            Err(e) => Err(RepositoryError::backend(e)),
        }
    }
}
