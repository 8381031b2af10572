pub mod initialize;
pub mod pool;
pub mod product_repository;
pub mod queries;

pub use pool::{ConnectionProvider, SqliteFileProvider};
pub use product_repository::{ProductDao, ProductRepository};
