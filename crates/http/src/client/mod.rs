//! Portal HTTP client

pub mod error;
pub mod reports;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedPortalClient, TypedClientBuilder};
