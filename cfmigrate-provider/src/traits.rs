use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::NormalizedRecord;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名或 zone id（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
    /// HTTP 状态码（部分 Provider 的错误码不足以区分）
    pub status: Option<u16>,
}

impl ErrorContext {
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            status: None,
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read-only view of a DNS provider: resolve a domain to a zone, list its records.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Resolve a domain name to this provider's opaque zone identifier.
    ///
    /// Fails with [`ProviderError::DomainNotFound`] when no suitable zone exists.
    async fn find_zone_id(&self, domain: &str) -> Result<String>;

    /// Fetch every record of a zone, following the provider's pagination to the end.
    ///
    /// Records come back in provider order, normalized; nothing is merged or deduplicated.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<NormalizedRecord>>;
}
