// All repositories module
pub mod orders;

// Re-export all repositories for convenience
pub use orders::*;
