//! External service connectors.
//!
//! All identity-provider traffic goes through the [`IdentityConnector`]
//! trait so routes and middleware never depend on the HTTP implementation
//! and tests can swap in a mock.

pub mod config;
pub mod errors;
pub mod identity;

pub use config::IdentityServiceConfig;
pub use errors::ConnectorError;
pub use identity::{IdentityConnector, IdentityServiceClient};
