// fixtures/tables/mod.rs
//
// Table templates for the admin catalog. Categories come first because
// products reference them.

pub mod categories;
pub mod products;

pub use categories::CategoriesTable;
pub use products::ProductsTable;
