//! Client configuration and initialization

use crate::config::PortalConfig;
pub use portal_http::ClientError;
use portal_http::{AuthenticatedPortalClient, TypedClientBuilder};

/// Build a client that sends `token` as its bearer credential
pub fn create_authenticated_client(
    config: &PortalConfig,
    token: &str,
) -> Result<AuthenticatedPortalClient, ClientError> {
    TypedClientBuilder::new()
        .base_url(config.api_base_url.clone())
        .build_authenticated(token)
}
