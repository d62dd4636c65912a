pub mod holiday_source;
