// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the browser and the server functions, and
// between the screen state and the repositories.

use serde::{Deserialize, Serialize};

#[cfg(feature = "db-tools")]
use sqlx::FromRow;

/// Product row (matches the shop.products schema)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Id of the owning category
    pub category: String,
    pub price: rust_decimal::Decimal,
    pub image_url: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// Category used to populate the filter selector
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Filter for the next product load
///
/// `None` and the empty string mean the same thing for both fields: no
/// category restriction and no search term.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductFilter {
    /// Category id to narrow the backend query with, if any
    pub fn category_id(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Lowercased search term, if any
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether a product passes the free-text part of the filter
    ///
    /// A product matches when the term is a case-insensitive substring of
    /// its name or of its description. No term matches everything.
    pub fn matches(&self, product: &Product) -> bool {
        match self.search_term() {
            None => true,
            Some(term) => {
                product.name.to_lowercase().contains(&term)
                    || product.description.to_lowercase().contains(&term)
            }
        }
    }

    /// Keep only the products that match the search term
    pub fn retain_matching(&self, products: Vec<Product>) -> Vec<Product> {
        if self.search_term().is_none() {
            return products;
        }
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Which modal is currently shown on top of the listing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Popup {
    #[default]
    None,
    DeleteProduct,
}

/// Visible state of the result grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    Loading,
    Empty,
    Populated,
}

impl std::fmt::Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridState::Loading => write!(f, "Loading"),
            GridState::Empty => write!(f, "No results found"),
            GridState::Populated => write!(f, "Populated"),
        }
    }
}

/// Result of the delete server function
///
/// Kept separate from transport errors so the browser can tell a missing
/// product apart from a failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Category entry of a catalog seed file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryImport {
    pub id: Option<String>,
    pub name: String,
}

/// Product entry of a catalog seed file (flexible schema)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductImport {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category id or category name
    pub category: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// Whole catalog seed file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogImport {
    #[serde(default)]
    pub categories: Vec<CategoryImport>,
    #[serde(default)]
    pub products: Vec<ProductImport>,
}

/// Import status tracking
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImportStatus {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}
