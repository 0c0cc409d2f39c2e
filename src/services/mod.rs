// Service exports
pub mod catalog;
pub mod postgres;

pub use catalog::CatalogCache;
pub use postgres::{PostgresClient, PostgresError, Timeframe};
