// web_app/api/queries.rs - Catalog queries against Postgres
//
// Plain async functions taking a pool (and optionally a schema, so tests can
// run in isolated schemas), plus `PgProductRepository`, which plugs them into
// the `ProductRepository` seam.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::fixtures;
use crate::web_app::model::*;
use crate::web_app::repository::{ProductRepository, RepositoryError};

/// Products in the filter's category whose name or description contains the
/// search term. The category narrows the SQL query; the search term is
/// applied to the fetched rows.
pub async fn list_products(
    pool: &PgPool,
    filter: &ProductFilter,
) -> Result<Vec<Product>, RepositoryError> {
    list_products_with_schema(pool, filter, fixtures::SCHEMA).await
}

pub async fn list_products_with_schema(
    pool: &PgPool,
    filter: &ProductFilter,
    schema: &str,
) -> Result<Vec<Product>, RepositoryError> {
    let sql = format!(
        r#"
        SELECT id, name, description, category, price, image_url, created_at
        FROM {}.products
        WHERE ($1::text IS NULL OR category = $1)
        ORDER BY name, id
    "#,
        schema
    );

    let rows = sqlx::query_as::<_, Product>(&sql)
        .bind(filter.category_id())
        .fetch_all(pool)
        .await?;

    Ok(filter.retain_matching(rows))
}

/// Every category, ordered by name
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, RepositoryError> {
    list_categories_with_schema(pool, fixtures::SCHEMA).await
}

pub async fn list_categories_with_schema(
    pool: &PgPool,
    schema: &str,
) -> Result<Vec<Category>, RepositoryError> {
    let sql = format!("SELECT id, name FROM {}.categories ORDER BY name, id", schema);

    let categories = sqlx::query_as::<_, Category>(&sql).fetch_all(pool).await?;
    Ok(categories)
}

/// Delete one product in a transaction
///
/// The row is locked with `FOR UPDATE` before the delete; a missing row rolls
/// the transaction back and yields `NotFound`.
pub async fn delete_product(pool: &PgPool, id: &str) -> Result<(), RepositoryError> {
    delete_product_with_schema(pool, id, fixtures::SCHEMA).await
}

pub async fn delete_product_with_schema(
    pool: &PgPool,
    id: &str,
    schema: &str,
) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    let select_sql = format!("SELECT id FROM {}.products WHERE id = $1 FOR UPDATE", schema);
    let existing: Option<(String,)> = sqlx::query_as(&select_sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    if existing.is_none() {
        tx.rollback().await?;
        return Err(RepositoryError::NotFound(id.to_string()));
    }

    let delete_sql = format!("DELETE FROM {}.products WHERE id = $1", schema);
    sqlx::query(&delete_sql).bind(id).execute(&mut *tx).await?;

    tx.commit().await?;
    Ok(())
}

/// Create the schema and tables if they do not exist yet
pub async fn create_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in fixtures::schema_statements() {
        sqlx::query(&statement).execute(pool).await?;
    }
    Ok(())
}

pub async fn count_products(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}.products", fixtures::SCHEMA);
    let count: (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(count.0)
}

/// Import a catalog seed
///
/// Categories without an id get a generated one. A product's `category` may
/// name a category by id or by name. Individual failures are collected in
/// the returned status instead of aborting the import.
pub async fn import_catalog(
    pool: &PgPool,
    catalog: &CatalogImport,
) -> Result<ImportStatus, sqlx::Error> {
    let mut status = ImportStatus {
        total: catalog.categories.len() + catalog.products.len(),
        ..ImportStatus::default()
    };

    let category_sql = format!(
        "INSERT INTO {}.categories (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        fixtures::SCHEMA
    );

    // name -> id, so products can reference categories by name
    let mut category_ids: HashMap<String, String> = HashMap::new();

    for category in &catalog.categories {
        let id = category
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        match sqlx::query(&category_sql)
            .bind(&id)
            .bind(&category.name)
            .execute(pool)
            .await
        {
            Ok(_) => {
                status.succeeded += 1;
                category_ids.insert(category.name.clone(), id);
            }
            Err(e) => {
                status.failed += 1;
                status.errors.push(format!("{}: {}", category.name, e));
            }
        }
    }

    let product_sql = format!(
        r#"
        INSERT INTO {}.products (id, name, description, category, price, image_url)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            description = EXCLUDED.description,
            category = EXCLUDED.category,
            price = EXCLUDED.price,
            image_url = EXCLUDED.image_url
    "#,
        fixtures::SCHEMA
    );

    for product in &catalog.products {
        let price = match Decimal::try_from(product.price) {
            Ok(price) => price.round_dp(2),
            Err(e) => {
                status.failed += 1;
                status.errors.push(format!("{}: invalid price: {}", product.name, e));
                continue;
            }
        };

        let id = product
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let category = category_ids
            .get(&product.category)
            .cloned()
            .unwrap_or_else(|| product.category.clone());

        let result = sqlx::query(&product_sql)
            .bind(&id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(&category)
            .bind(price)
            .bind(&product.image_url)
            .execute(pool)
            .await;

        match result {
            Ok(_) => status.succeeded += 1,
            Err(e) => {
                status.failed += 1;
                status.errors.push(format!("{}: {}", product.name, e));
            }
        }
    }

    Ok(status)
}

/// `ProductRepository` backed by a Postgres pool
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
    schema: String,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_schema(pool, fixtures::SCHEMA)
    }

    pub fn with_schema(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        list_products_with_schema(&self.pool, filter, &self.schema).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        list_categories_with_schema(&self.pool, &self.schema).await
    }

    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        delete_product_with_schema(&self.pool, id, &self.schema).await
    }
}
