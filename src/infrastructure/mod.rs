pub mod export;
pub mod http;
pub mod observability;
pub mod persistence;
