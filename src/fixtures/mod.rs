// fixtures/mod.rs - Schema and seed data for the Postgres backend
//
// Each table is a struct implementing `TestTable`. The server binary uses
// the schema statements on startup; the Postgres tests run the full setup
// (schema + rows) inside an isolated schema.

pub mod tables;

/// Name of the schema holding the admin tables
pub const SCHEMA: &str = "shop";

/// A table that can be created and populated from static SQL
pub trait TestTable {
    /// The SQL commands to create and populate this table
    /// Returns a slice of SQL strings that should be executed in order
    fn setup_sql() -> &'static [&'static str];

    /// Only the statements that create the table (no rows)
    fn schema_sql() -> &'static [&'static str] {
        &Self::setup_sql()[..1]
    }
}

/// Setup statements for every table, in dependency order, rewritten to
/// target `schema` instead of the default one.
pub fn setup_statements(schema: &str) -> Vec<String> {
    use tables::{CategoriesTable, ProductsTable};

    let mut statements = vec![format!("CREATE SCHEMA IF NOT EXISTS {schema}")];
    statements.extend(
        CategoriesTable::setup_sql()
            .iter()
            .chain(ProductsTable::setup_sql())
            .map(|sql| sql.replace("shop.", &format!("{schema}."))),
    );
    statements
}

/// Schema-only statements (no rows) for the default schema
pub fn schema_statements() -> Vec<String> {
    use tables::{CategoriesTable, ProductsTable};

    let mut statements = vec![format!("CREATE SCHEMA IF NOT EXISTS {SCHEMA}")];
    statements.extend(
        CategoriesTable::schema_sql()
            .iter()
            .chain(ProductsTable::schema_sql())
            .map(|sql| sql.to_string()),
    );
    statements
}
