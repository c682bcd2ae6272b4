//! 共享测试工具：内存中的 DnsProvider 替身

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cfmigrate::Providers;
use cfmigrate_provider::{DnsProvider, NormalizedRecord, ProviderError, Result};

/// Scripted provider that counts its calls.
pub struct MockProvider {
    id: &'static str,
    zone: std::result::Result<String, ProviderError>,
    records: std::result::Result<Vec<NormalizedRecord>, ProviderError>,
    pub zone_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(id: &'static str, zone_id: &str, records: Vec<NormalizedRecord>) -> Self {
        Self {
            id,
            zone: Ok(zone_id.to_string()),
            records: Ok(records),
            zone_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Zone lookup fails with `DomainNotFound`.
    pub fn without_zone(id: &'static str, domain: &str) -> Self {
        Self::failing_zone(
            id,
            ProviderError::DomainNotFound {
                provider: id.to_string(),
                domain: domain.to_string(),
                raw_message: Some("no public hosted zone matches".to_string()),
            },
        )
    }

    /// Zone lookup fails with the given error.
    pub fn failing_zone(id: &'static str, error: ProviderError) -> Self {
        Self {
            zone: Err(error),
            ..Self::new(id, "", Vec::new())
        }
    }

    /// Record listing fails with the given error.
    pub fn failing_fetch(id: &'static str, zone_id: &str, error: ProviderError) -> Self {
        Self {
            records: Err(error),
            ..Self::new(id, zone_id, Vec::new())
        }
    }

    pub fn zone_calls(&self) -> usize {
        self.zone_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn find_zone_id(&self, _domain: &str) -> Result<String> {
        self.zone_calls.fetch_add(1, Ordering::SeqCst);
        self.zone.clone()
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<NormalizedRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(
            self.zone.as_deref().ok(),
            Some(zone_id),
            "records requested for a zone that was never resolved"
        );
        self.records.clone()
    }
}

/// Wrap two mocks, keeping handles for call-count assertions.
pub fn providers(
    route53: MockProvider,
    cloudflare: MockProvider,
) -> (Providers, Arc<MockProvider>, Arc<MockProvider>) {
    let route53 = Arc::new(route53);
    let cloudflare = Arc::new(cloudflare);
    let providers = Providers {
        route53: route53.clone(),
        cloudflare: cloudflare.clone(),
    };
    (providers, route53, cloudflare)
}

/// Three Route 53 record sets as the provider reports them (name and type only).
pub fn route53_records() -> Vec<NormalizedRecord> {
    vec![
        NormalizedRecord::name_and_type("example.com.", "A"),
        NormalizedRecord::name_and_type("www.example.com.", "CNAME"),
        NormalizedRecord::name_and_type("example.com.", "MX"),
    ]
}

/// Three Cloudflare records.
pub fn cloudflare_records() -> Vec<NormalizedRecord> {
    vec![
        NormalizedRecord {
            name: "example.com".to_string(),
            record_type: "A".to_string(),
            ttl: 300,
            values: vec!["192.0.2.1".to_string()],
        },
        NormalizedRecord {
            name: "www.example.com".to_string(),
            record_type: "CNAME".to_string(),
            ttl: 1,
            values: vec!["example.com".to_string()],
        },
        NormalizedRecord {
            name: "example.com".to_string(),
            record_type: "MX".to_string(),
            ttl: 3600,
            values: vec!["mail.example.com".to_string()],
        },
    ]
}
