//! The comparison run: resolve both zones, then fetch both record sets.

use std::sync::Arc;

use cfmigrate_provider::{
    DnsProvider, NormalizedRecord, ProviderCredentials, ProviderType, create_provider,
};

use crate::config::Credentials;
use crate::error::AppError;

/// The two provider clients of one run.
pub struct Providers {
    pub route53: Arc<dyn DnsProvider>,
    pub cloudflare: Arc<dyn DnsProvider>,
}

impl Providers {
    /// Build both clients. No network traffic happens here.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self, AppError> {
        let route53 = create_provider(ProviderCredentials::Route53 {
            access_key_id: credentials.aws_key.clone(),
            secret_access_key: credentials.aws_secret.clone(),
        })
        .map_err(|source| AppError::ClientInit {
            provider: ProviderType::Route53,
            source,
        })?;

        let cloudflare = create_provider(ProviderCredentials::Cloudflare {
            email: credentials.cf_email.clone(),
            api_key: credentials.cf_key.clone(),
        })
        .map_err(|source| AppError::ClientInit {
            provider: ProviderType::Cloudflare,
            source,
        })?;

        Ok(Self {
            route53,
            cloudflare,
        })
    }
}

/// Result of one run. Both collections are kept as fetched; nothing compares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub route53_zone_id: String,
    pub cloudflare_zone_id: String,
    pub route53: Vec<NormalizedRecord>,
    pub cloudflare: Vec<NormalizedRecord>,
}

/// Resolve the Route 53 zone, then the Cloudflare zone, then fetch Route 53
/// records, then Cloudflare records. The first failure ends the run.
pub async fn compare(providers: &Providers, domain: &str) -> Result<Comparison, AppError> {
    let route53_zone_id =
        resolve_zone(providers.route53.as_ref(), ProviderType::Route53, domain).await?;
    let cloudflare_zone_id =
        resolve_zone(providers.cloudflare.as_ref(), ProviderType::Cloudflare, domain).await?;

    let route53 =
        fetch_records(providers.route53.as_ref(), ProviderType::Route53, &route53_zone_id).await?;
    let cloudflare = fetch_records(
        providers.cloudflare.as_ref(),
        ProviderType::Cloudflare,
        &cloudflare_zone_id,
    )
    .await?;

    Ok(Comparison {
        route53_zone_id,
        cloudflare_zone_id,
        route53,
        cloudflare,
    })
}

async fn resolve_zone(
    provider: &dyn DnsProvider,
    provider_type: ProviderType,
    domain: &str,
) -> Result<String, AppError> {
    let zone_id = provider
        .find_zone_id(domain)
        .await
        .map_err(|source| AppError::ZoneNotFound {
            provider: provider_type,
            domain: domain.to_string(),
            source,
        })?;
    tracing::info!("{provider_type} zone for {domain}: {zone_id}");
    Ok(zone_id)
}

async fn fetch_records(
    provider: &dyn DnsProvider,
    provider_type: ProviderType,
    zone_id: &str,
) -> Result<Vec<NormalizedRecord>, AppError> {
    let records = provider
        .list_records(zone_id)
        .await
        .map_err(|source| AppError::Fetch {
            provider: provider_type,
            source,
        })?;
    tracing::debug!("{provider_type}: {} records in zone {zone_id}", records.len());
    Ok(records)
}
