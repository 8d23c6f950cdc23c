pub mod memory_store;
pub mod models;
pub mod postgres_store;

pub use memory_store::InMemoryDocumentStore;
pub use postgres_store::PostgresDocumentStore;
