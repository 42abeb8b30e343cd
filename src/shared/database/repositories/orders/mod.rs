// Order repositories
pub mod memory_order_repository;
pub mod order_repository;
pub mod pg_order_repository;

pub use memory_order_repository::*;
pub use order_repository::*;
pub use pg_order_repository::*;
