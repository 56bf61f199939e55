pub mod bootstrap;
pub mod config;
pub mod database;
pub mod infrastructure;
pub mod telemetry;

pub use bootstrap::build_record_service;
pub use config::FmsConfig;
