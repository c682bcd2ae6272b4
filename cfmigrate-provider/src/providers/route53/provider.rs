//! Route 53 DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::NormalizedRecord;

use super::Route53Provider;
use super::types::{HostedZone, ListHostedZonesByNameResponse, ListResourceRecordSetsResponse};

const HOSTED_ZONE_PREFIX: &str = "/hostedzone/";

/// First public zone whose name equals `fqdn` exactly.
pub(crate) fn select_public_zone(zones: Vec<HostedZone>, fqdn: &str) -> Option<String> {
    zones
        .into_iter()
        .find(|zone| !zone.config.private_zone && zone.name == fqdn)
        .map(|zone| zone.id)
}

/// Query parameters for the next record page, `None` on the last page.
fn next_page_params(page: &ListResourceRecordSetsResponse) -> Option<Vec<(&'static str, String)>> {
    if !page.is_truncated {
        return None;
    }
    let Some(name) = page.next_record_name.clone() else {
        log::warn!("[route53] Truncated record page without NextRecordName, stopping");
        return None;
    };

    let mut params = vec![("name", name)];
    if let Some(record_type) = &page.next_record_type {
        params.push(("type", record_type.clone()));
    }
    if let Some(identifier) = &page.next_record_identifier {
        params.push(("identifier", identifier.clone()));
    }
    Some(params)
}

/// Records keep their name and type only.
fn to_normalized(page: ListResourceRecordSetsResponse) -> Vec<NormalizedRecord> {
    page.resource_record_sets
        .items
        .into_iter()
        .map(|set| NormalizedRecord::name_and_type(set.name, set.record_type))
        .collect()
}

#[async_trait]
impl DnsProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn find_zone_id(&self, domain: &str) -> Result<String> {
        let fqdn = format!("{domain}.");
        let response: ListHostedZonesByNameResponse = self
            .get(
                "/hostedzonesbyname",
                &[("dnsname", fqdn.clone())],
                ErrorContext::for_domain(domain),
            )
            .await?;

        log::debug!(
            "[route53] {} zones listed from {:?} (truncated: {})",
            response.hosted_zones.items.len(),
            response.dns_name,
            response.is_truncated
        );

        select_public_zone(response.hosted_zones.items, &fqdn).ok_or_else(|| {
            ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: domain.to_string(),
                raw_message: Some("no public hosted zone matches".to_string()),
            }
        })
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<NormalizedRecord>> {
        let bare_id = zone_id.trim_start_matches(HOSTED_ZONE_PREFIX);
        let path = format!("/hostedzone/{}/rrset", urlencoding::encode(bare_id));

        let mut records = Vec::new();
        let mut params: Vec<(&str, String)> = Vec::new();

        loop {
            let page: ListResourceRecordSetsResponse = self
                .get(&path, &params, ErrorContext::for_domain(zone_id))
                .await?;

            let next = next_page_params(&page);
            records.extend(to_normalized(page));
            log::debug!("[route53] Zone {bare_id}: {} records so far", records.len());

            match next {
                Some(next) => params = next,
                None => break,
            }
        }

        Ok(records)
    }
}
