// Orders domain models
pub mod order;
pub mod payment_code;
pub mod report;
pub mod status;

pub use order::*;
pub use payment_code::*;
pub use report::*;
pub use status::*;
