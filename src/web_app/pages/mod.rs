// web_app/pages/mod.rs - Page components module
//
// - AdminProductsPage: product listing with filters and delete dialog

pub mod products;

// Re-export page components
pub use products::AdminProductsPage;
