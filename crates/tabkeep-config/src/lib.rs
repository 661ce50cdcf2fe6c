//! tabkeep-config
//!
//! The access configuration document (`config.json`) and its persistence.
//! Owns the AccessConfig data structure plus disk helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::AccessConfig;
