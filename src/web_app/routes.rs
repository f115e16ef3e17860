// web_app/routes.rs - Paths owned by the admin product screens

/// Listing page
pub const PRODUCTS_PATH: &str = "/admin/products";

/// Add form (rendered by another screen)
pub const ADD_PRODUCT_PATH: &str = "/admin/products/add";

/// Edit form for one product (rendered by another screen)
pub fn edit_product_path(id: &str) -> String {
    format!("{PRODUCTS_PATH}/edit/{id}")
}
