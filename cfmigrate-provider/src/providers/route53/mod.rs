//! AWS Route 53 DNS Provider

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 API-specific XML response types.
pub(crate) mod types;

use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};
use crate::providers::common::{create_http_client, first_blank};
use crate::utils::log_sanitizer::mask_secret;

/// Global Route 53 API endpoint.
pub(crate) const ROUTE53_ENDPOINT: &str = "https://route53.amazonaws.com";
/// API version path segment.
pub(crate) const ROUTE53_API_VERSION: &str = "2013-04-01";
/// Route 53 is a global service signed against `us-east-1`.
pub(crate) const ROUTE53_REGION: &str = "us-east-1";
pub(crate) const ROUTE53_SERVICE: &str = "route53";

/// AWS Route 53 DNS provider implementation.
///
/// Authenticates with static access keys via Signature Version 4 request signing.
///
/// # Construction
///
/// ```rust,no_run
/// use cfmigrate_provider::Route53Provider;
///
/// let provider = Route53Provider::new(
///     "your-access-key-id".to_string(),
///     "your-secret-access-key".to_string(),
/// )?;
/// # Ok::<(), cfmigrate_provider::ProviderError>(())
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    /// `scheme://host[:port]` used to build request URLs.
    pub(crate) origin: String,
    /// Value of the signed `host` header.
    pub(crate) host: String,
    /// Path prefix of every API call, e.g. `/2013-04-01`.
    pub(crate) api_path: String,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
}

/// Builder for [`Route53Provider`] with a configurable endpoint.
pub struct Route53ProviderBuilder {
    access_key_id: String,
    secret_access_key: String,
    endpoint: String,
}

impl Route53ProviderBuilder {
    fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            endpoint: ROUTE53_ENDPOINT.to_string(),
        }
    }

    /// Override the endpoint (default: `https://route53.amazonaws.com`).
    ///
    /// A path on the endpoint is kept as a prefix in front of the API version.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the [`Route53Provider`] instance.
    ///
    /// Fails with [`ProviderError::ClientInit`] on blank keys, an unparsable
    /// endpoint, or when the HTTP client cannot be created.
    pub fn build(self) -> Result<Route53Provider> {
        let init_error = |detail: String| ProviderError::ClientInit {
            provider: "route53".to_string(),
            detail,
        };

        if let Some(field) = first_blank(&[
            ("access key id", &self.access_key_id),
            ("secret access key", &self.secret_access_key),
        ]) {
            return Err(init_error(format!("{field} must not be empty")));
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| init_error(format!("invalid endpoint '{}': {e}", self.endpoint)))?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(init_error(format!("endpoint '{}' has no host", self.endpoint))),
        };
        let api_path = format!("{}/{ROUTE53_API_VERSION}", url.path().trim_end_matches('/'));

        let client = create_http_client().map_err(|e| init_error(e.to_string()))?;

        log::debug!(
            "[route53] Client ready for key {} at {host}",
            mask_secret(&self.access_key_id)
        );

        Ok(Route53Provider {
            client,
            origin: url.origin().ascii_serialization(),
            host,
            api_path,
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
        })
    }
}

impl Route53Provider {
    /// Creates a new Route 53 provider against the global endpoint.
    pub fn new(access_key_id: String, secret_access_key: String) -> Result<Self> {
        Self::builder(access_key_id, secret_access_key).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, secret_access_key: String) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(access_key_id, secret_access_key)
    }
}
