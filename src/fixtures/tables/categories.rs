// fixtures/tables/categories.rs
//
// Category reference data shown in the filter selector.

use crate::fixtures::TestTable;

pub struct CategoriesTable;

impl TestTable for CategoriesTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            r#"
            CREATE TABLE IF NOT EXISTS shop.categories (
                id TEXT PRIMARY KEY,
                name VARCHAR(100) NOT NULL
            )
            "#,
            r#"
            INSERT INTO shop.categories (id, name)
            VALUES
                ('drinks', 'Drinks'),
                ('snacks', 'Snacks'),
                ('bakery', 'Bakery')
            "#,
        ]
    }
}
