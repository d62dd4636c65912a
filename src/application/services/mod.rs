pub mod date_dimension_service;
pub mod holiday_service;

pub use date_dimension_service::*;
pub use holiday_service::*;
