// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - filters.rs: Filter bar (category selector + search field)
// - product.rs: Product grid, cards and the delete confirmation

pub mod common;
pub mod filters;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use filters::*;
pub use product::*;
