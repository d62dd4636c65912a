pub mod app_helpers;

pub use app_helpers::*;
