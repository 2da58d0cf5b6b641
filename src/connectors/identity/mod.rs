mod client;
mod connector;
pub mod mock;
pub mod types;

pub use client::IdentityServiceClient;
pub use connector::IdentityConnector;
