//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::providers::common::{create_http_client, first_blank};
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::{CloudflareDnsRecord, CloudflareResponse, CloudflareResultInfo, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Cloudflare DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare DNS provider implementation.
///
/// Authenticates with the account email and global API key
/// (`X-Auth-Email` / `X-Auth-Key`).
///
/// # Construction
///
/// ```rust,no_run
/// use cfmigrate_provider::CloudflareProvider;
///
/// let provider = CloudflareProvider::new(
///     "ops@example.com".to_string(),
///     "your-global-api-key".to_string(),
/// )?;
/// # Ok::<(), cfmigrate_provider::ProviderError>(())
/// ```
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_base: String,
    pub(crate) email: String,
    pub(crate) api_key: String,
}

/// Builder for [`CloudflareProvider`] with a configurable API endpoint.
pub struct CloudflareProviderBuilder {
    email: String,
    api_key: String,
    api_base: String,
}

impl CloudflareProviderBuilder {
    fn new(email: String, api_key: String) -> Self {
        Self {
            email,
            api_key,
            api_base: CF_API_BASE.to_string(),
        }
    }

    /// Override the API base URL (default: `https://api.cloudflare.com/client/v4`).
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the [`CloudflareProvider`] instance.
    ///
    /// Fails with [`ProviderError::ClientInit`] when the email or key is blank,
    /// or when the HTTP client cannot be created.
    pub fn build(self) -> Result<CloudflareProvider> {
        if let Some(field) = first_blank(&[("email", &self.email), ("api key", &self.api_key)]) {
            return Err(ProviderError::ClientInit {
                provider: "cloudflare".to_string(),
                detail: format!("{field} must not be empty"),
            });
        }

        let client = create_http_client().map_err(|e| ProviderError::ClientInit {
            provider: "cloudflare".to_string(),
            detail: e.to_string(),
        })?;

        log::debug!(
            "[cloudflare] Client ready for {} (key {}) at {}",
            self.email,
            mask_secret(&self.api_key),
            self.api_base
        );

        Ok(CloudflareProvider {
            client,
            api_base: self.api_base,
            email: self.email,
            api_key: self.api_key,
        })
    }
}

impl CloudflareProvider {
    /// Creates a new Cloudflare provider against the public API.
    pub fn new(email: String, api_key: String) -> Result<Self> {
        Self::builder(email, api_key).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(email: String, api_key: String) -> CloudflareProviderBuilder {
        CloudflareProviderBuilder::new(email, api_key)
    }
}
