// Domain modules
pub mod orders;
