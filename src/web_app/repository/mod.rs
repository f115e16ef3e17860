// web_app/repository/mod.rs - Backend seam for the admin screen
//
// The screen never talks to a database client directly. It goes through
// `ProductRepository`, which has three implementations:
// - memory::InMemoryRepository: fake backend for tests
// - api::queries::PgProductRepository: sqlx/Postgres (server side)
// - server_fns::ServerFnRepository: browser side, calls the server functions

use std::future::Future;

use thiserror::Error;

use crate::web_app::model::{Category, Product, ProductFilter};

pub mod memory;

pub use memory::InMemoryRepository;

/// Errors surfaced by a repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The product to delete does not exist (any more)
    #[error("document not found: {0}")]
    NotFound(String),

    /// Delete was requested without a selected product
    #[error("no product selected")]
    NoSelection,

    /// Transport or storage failure
    #[error("backend error: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        RepositoryError::Backend(err.to_string())
    }
}

#[cfg(feature = "db-tools")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Backend(err.to_string())
    }
}

/// Read and delete access to the product catalog
///
/// The futures are not required to be `Send`: the browser implementation
/// runs on the single-threaded WASM executor.
pub trait ProductRepository {
    /// Products in the filter's category (all when absent) whose name or
    /// description contains the search term, case-insensitively.
    fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> impl Future<Output = Result<Vec<Product>, RepositoryError>>;

    /// Every category, unfiltered.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, RepositoryError>>;

    /// Delete one product inside a transaction: read it, fail with
    /// `NotFound` if it is missing, otherwise delete it.
    fn delete_product(&self, id: &str) -> impl Future<Output = Result<(), RepositoryError>>;
}
