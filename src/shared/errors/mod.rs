// Shared errors
pub mod order_error;

pub use order_error::*;
