//! Cloudflare DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::NormalizedRecord;

use super::{
    CloudflareDnsRecord, CloudflareProvider, CloudflareResponse, CloudflareResultInfo,
    CloudflareZone, MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES,
};

impl CloudflareProvider {
    /// 从按名称查询到的 zone 列表中选出唯一的 zone id
    ///
    /// Only zones whose name equals `domain` (ignoring ASCII case) count.
    pub(crate) fn select_zone_id(&self, zones: Vec<CloudflareZone>, domain: &str) -> Result<String> {
        let mut named: Vec<CloudflareZone> = zones
            .into_iter()
            .filter(|zone| zone.name.eq_ignore_ascii_case(domain))
            .collect();
        match named.len() {
            0 => Err(ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: domain.to_string(),
                raw_message: Some("zone could not be found".to_string()),
            }),
            1 => {
                let zone = named.remove(0);
                log::debug!("[cloudflare] Zone {} resolved to {}", zone.name, zone.id);
                Ok(zone.id)
            }
            matches => Err(ProviderError::AmbiguousDomain {
                provider: self.provider_name().to_string(),
                domain: domain.to_string(),
                matches,
            }),
        }
    }

    /// 将 Cloudflare 记录转换为 `NormalizedRecord`
    pub(crate) fn to_normalized(cf_record: CloudflareDnsRecord) -> NormalizedRecord {
        NormalizedRecord {
            name: cf_record.name,
            record_type: cf_record.record_type,
            ttl: cf_record.ttl,
            values: vec![cf_record.content],
        }
    }
}

/// 是否还有下一页
///
/// An empty page ends the walk even when `total_pages` claims otherwise.
fn has_more_pages(info: Option<&CloudflareResultInfo>, page: u32, page_len: usize) -> bool {
    page_len > 0 && info.is_some_and(|info| page < info.total_pages)
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn find_zone_id(&self, domain: &str) -> Result<String> {
        let path = format!(
            "/zones?name={}&per_page={MAX_PAGE_SIZE_ZONES}",
            urlencoding::encode(domain)
        );
        let zones: Vec<CloudflareZone> = self.get(&path, ErrorContext::for_domain(domain)).await?;
        self.select_zone_id(zones, domain)
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<NormalizedRecord>> {
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let path = format!(
                "/zones/{}/dns_records?page={page}&per_page={MAX_PAGE_SIZE_RECORDS}",
                urlencoding::encode(zone_id)
            );
            let response: CloudflareResponse<Vec<CloudflareDnsRecord>> = self
                .get_envelope(&path, ErrorContext::for_domain(zone_id))
                .await?;

            let batch = response.result.unwrap_or_default();
            let batch_len = batch.len();
            records.extend(batch.into_iter().map(Self::to_normalized));

            log::debug!(
                "[cloudflare] Zone {zone_id} page {page}: {batch_len} records ({} so far)",
                records.len()
            );

            if !has_more_pages(response.result_info.as_ref(), page, batch_len) {
                break;
            }
            page += 1;
        }

        Ok(records)
    }
}
