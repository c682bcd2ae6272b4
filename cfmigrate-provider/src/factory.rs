//! Provider factory.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "cloudflare")]
use crate::providers::CloudflareProvider;
#[cfg(feature = "route53")]
use crate::providers::Route53Provider;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks. Construction does not touch the network.
///
/// # Examples
///
/// ```rust,no_run
/// use cfmigrate_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Cloudflare {
///     email: "ops@example.com".to_string(),
///     api_key: "your-global-api-key".to_string(),
/// })?;
/// # Ok::<(), cfmigrate_provider::ProviderError>(())
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    log::debug!("Creating {} provider", credentials.provider_type());
    match credentials {
        #[cfg(feature = "cloudflare")]
        ProviderCredentials::Cloudflare { email, api_key } => {
            Ok(Arc::new(CloudflareProvider::new(email, api_key)?))
        }
        #[cfg(feature = "route53")]
        ProviderCredentials::Route53 {
            access_key_id,
            secret_access_key,
        } => Ok(Arc::new(Route53Provider::new(
            access_key_id,
            secret_access_key,
        )?)),
    }
}
