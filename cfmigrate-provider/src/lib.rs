//! # cfmigrate-provider
//!
//! Read-only DNS provider clients used to compare a domain's records between
//! Cloudflare and AWS Route 53.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | `cloudflare` | Email + Global API Key |
//! | [AWS Route 53](https://aws.amazon.com/route53/) | `route53` | AWS Signature Version 4 |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)*: enable both providers.
//! - **`cloudflare`**: enable only the Cloudflare provider.
//! - **`route53`**: enable only the Route 53 provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cfmigrate_provider::{create_provider, DnsProvider, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Route53 {
//!         access_key_id: "AKIA...".to_string(),
//!         secret_access_key: "...".to_string(),
//!     })?;
//!
//!     let zone_id = provider.find_zone_id("example.com").await?;
//!     for record in provider.list_records(&zone_id).await? {
//!         println!("{} {}", record.name, record.record_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::ClientInit`]: credentials blank or client setup failed
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::DomainNotFound`]: no zone for the domain
//! - [`ProviderError::AmbiguousDomain`]: several zones for the domain
//!
//! Nothing is retried. See [`ProviderError`] for the full list.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{NormalizedRecord, ProviderCredentials, ProviderType};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "cloudflare")]
pub use providers::{CloudflareProvider, CloudflareProviderBuilder};

#[cfg(feature = "route53")]
pub use providers::{Route53Provider, Route53ProviderBuilder};
