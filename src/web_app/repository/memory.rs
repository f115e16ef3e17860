// web_app/repository/memory.rs - In-memory product repository
//
// Fake backend used by the tests. Keeps insertion order, supports switching
// reads and deletes into a failing mode to exercise the error paths.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::{ProductRepository, RepositoryError};
use crate::web_app::model::{Category, Product, ProductFilter};

#[derive(Default)]
struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// Product repository backed by a `Vec` behind a mutex
#[derive(Default)]
pub struct InMemoryRepository {
    catalog: Mutex<Catalog>,
    fail_reads: AtomicBool,
    fail_deletes: AtomicBool,
    product_reads: AtomicUsize,
}

impl InMemoryRepository {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            catalog: Mutex::new(Catalog {
                products,
                categories,
            }),
            ..Self::default()
        }
    }

    /// Make every read fail with a backend error
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every delete fail with a backend error
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Number of `list_products` calls that reached the backend
    pub fn product_reads(&self) -> usize {
        self.product_reads.load(Ordering::SeqCst)
    }

    pub fn insert_product(&self, product: Product) -> Result<(), RepositoryError> {
        self.lock()?.products.push(product);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock()
            .map(|c| c.products.iter().any(|p| p.id == id))
            .unwrap_or(false)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Catalog>, RepositoryError> {
        self.catalog
            .lock()
            .map_err(|_| RepositoryError::Backend("catalog lock poisoned".to_string()))
    }
}

impl ProductRepository for InMemoryRepository {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        self.product_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("products unavailable".to_string()));
        }

        let catalog = self.lock()?;
        let scoped: Vec<Product> = match filter.category_id() {
            Some(category) => catalog
                .products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
            None => catalog.products.clone(),
        };

        Ok(filter.retain_matching(scoped))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("categories unavailable".to_string()));
        }
        Ok(self.lock()?.categories.clone())
    }

    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("transaction aborted".to_string()));
        }

        // Read and delete under one lock, so nothing can slip in between.
        let mut catalog = self.lock()?;
        let position = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| {
                tracing::debug!(id, "delete of unknown product");
                RepositoryError::NotFound(id.to_string())
            })?;
        catalog.products.remove(position);
        tracing::debug!(id, remaining = catalog.products.len(), "product removed");
        Ok(())
    }
}
