//! Core state and AI boundary for the MarketDeck marketing dashboard.
//! The store in this crate is the single source of truth for dashboard data.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod seed;
pub mod service;
pub mod toast;

pub use config::{AppConfig, ConfigError, ConfigResult};
pub use gateway::{AiGateway, GatewayError, GatewayResult, GenerativeModel, ModelRequest};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::Keyed;
pub use repo::EntityCollection;
pub use seed::SeedData;
pub use service::app_store::AppStore;
pub use service::events::{Collection, StoreEvent};
pub use toast::ToastCenter;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
