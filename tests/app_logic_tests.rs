// tests/app_logic_tests.rs - Routing paths used by the admin app
//
// The listing links to the add and edit forms, which live on other screens;
// these paths are the contract with them.

use shop_admin::web_app::routes::{edit_product_path, ADD_PRODUCT_PATH, PRODUCTS_PATH};

#[test]
fn test_products_path() {
    assert_eq!(PRODUCTS_PATH, "/admin/products");
}

#[test]
fn test_add_product_path() {
    assert_eq!(ADD_PRODUCT_PATH, "/admin/products/add");
}

#[test]
fn test_edit_product_path() {
    assert_eq!(edit_product_path("p1"), "/admin/products/edit/p1");
    assert_eq!(
        edit_product_path("3f2c9a1e-0000-4000-8000-000000000000"),
        "/admin/products/edit/3f2c9a1e-0000-4000-8000-000000000000"
    );
}

#[test]
fn test_edit_paths_are_distinct_per_product() {
    assert_ne!(edit_product_path("p1"), edit_product_path("p2"));
    assert!(edit_product_path("p1").starts_with(PRODUCTS_PATH));
}
