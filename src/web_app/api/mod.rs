// web_app/api/mod.rs - Postgres access for the server side
//
// - db.rs: pool configuration and the global pool used by server functions
// - queries.rs: catalog queries and the Postgres `ProductRepository`

pub mod db;
pub mod queries;
