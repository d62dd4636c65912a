pub mod date_dimension;
pub mod holiday;
