pub mod calendar;
pub mod date_dimension;
