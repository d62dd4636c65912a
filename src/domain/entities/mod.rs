pub mod date_dimension;
pub mod holiday;

pub use date_dimension::*;
pub use holiday::*;
