// memory/mod.rs - In-memory catalog shared by the feature-free test suites
//
// Mirrors the rows of the Postgres fixtures so both backends can be
// checked against the same expectations.

#![allow(dead_code)]

use rust_decimal::Decimal;
use shop_admin::web_app::model::{Category, Product, ProductFilter};
use shop_admin::web_app::repository::InMemoryRepository;

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn product(id: &str, name: &str, description: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price: Decimal::new(450, 2),
        image_url: None,
        created_at: chrono::NaiveDateTime::default(),
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category("drinks", "Drinks"),
        category("snacks", "Snacks"),
        category("bakery", "Bakery"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        product("p1", "Cola Zero", "Sugar free cola, 350ml can", "drinks"),
        product("p2", "Orange Soda", "Fizzy orange drink, 350ml can", "drinks"),
        product("p3", "Mineral Water", "Still water, 500ml bottle", "drinks"),
        product("p4", "Salted Crisps", "Potato crisps, goes well with a cola", "snacks"),
        product("p5", "Peanuts", "Roasted and salted", "snacks"),
    ]
}

pub fn repository() -> InMemoryRepository {
    InMemoryRepository::new(categories(), products())
}

pub fn filter(category: Option<&str>, search: Option<&str>) -> ProductFilter {
    ProductFilter {
        category: category.map(str::to_string),
        search: search.map(str::to_string),
    }
}

pub fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}
