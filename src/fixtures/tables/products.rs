// fixtures/tables/products.rs
//
// Product rows with stable ids, so tests can refer to "p1" and friends.
// The "bakery" category intentionally has no products.

use crate::fixtures::TestTable;

pub struct ProductsTable;

impl TestTable for ProductsTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            r#"
            CREATE TABLE IF NOT EXISTS shop.products (
                id TEXT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL,
                price NUMERIC(10, 2) NOT NULL,
                image_url TEXT,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            r#"
            CREATE INDEX IF NOT EXISTS products_category_idx ON shop.products (category)
            "#,
            r#"
            INSERT INTO shop.products (id, name, description, category, price)
            VALUES
                ('p1', 'Cola Zero', 'Sugar free cola, 350ml can', 'drinks', 4.50),
                ('p2', 'Orange Soda', 'Fizzy orange drink, 350ml can', 'drinks', 4.00),
                ('p3', 'Mineral Water', 'Still water, 500ml bottle', 'drinks', 2.50),
                ('p4', 'Salted Crisps', 'Potato crisps, goes well with a cola', 'snacks', 6.90),
                ('p5', 'Peanuts', 'Roasted and salted', 'snacks', 5.00)
            "#,
        ]
    }

    fn schema_sql() -> &'static [&'static str] {
        &Self::setup_sql()[..2]
    }
}
