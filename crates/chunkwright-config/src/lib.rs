pub mod build;
pub mod config;
pub mod discovery;
pub mod error;
pub mod validation;

// Re-export main types
pub use build::*;
pub use config::*;
pub use error::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, ENV_PREFIX};
pub use validation::{validate, ConfigValidator, SchemaValidator};
