// common/mod.rs - Shared test utilities for database setup and teardown
//
// This module provides reusable test fixtures and helpers to ensure:
// 1. Idempotent test execution (tests can run multiple times)
// 2. Clean setup and teardown for each test
// 3. Consistent test data across test suites

#![allow(dead_code)]

use shop_admin::fixtures;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::time::Duration;

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Drop a test schema and everything in it
pub async fn teardown_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    let query = format!("DROP SCHEMA IF EXISTS {} CASCADE", schema);
    sqlx::query(&query).execute(pool).await?;
    Ok(())
}

/// Create `schema` from scratch with the fixture tables and rows
///
/// Drops any previous copy first, so it can be called repeatedly.
pub async fn setup_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    teardown_test_db(pool, schema).await?;

    for statement in fixtures::setup_statements(schema) {
        sqlx::query(&statement).execute(pool).await?;
    }

    Ok(())
}

/// Generate a unique schema name for a test
pub fn generate_test_schema_name(test_name: &str) -> String {
    // Sanitize test name to be a valid schema name (alphanumeric + underscore)
    let sanitized = test_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect::<String>();

    // Truncate to avoid excessively long names (PostgreSQL limit is 63 chars)
    let truncated = if sanitized.len() > 50 {
        &sanitized[..50]
    } else {
        &sanitized
    };

    format!("test_{}", truncated)
}

/// Full setup and teardown wrapper for tests with isolated schema
///
/// # Arguments
/// * `test_name` - Unique test name (used to generate schema name)
/// * `test_fn` - Test function that receives (pool, schema_name)
pub async fn with_test_db<F, Fut>(test_name: &str, test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool, String) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<()>>,
{
    let pool = create_test_pool().await?;
    let schema_name = generate_test_schema_name(test_name);

    setup_test_db(&pool, &schema_name).await?;

    let result = test_fn(pool.clone(), schema_name.clone()).await;

    // Always cleanup, even if test fails
    teardown_test_db(&pool, &schema_name).await?;

    result
}
