//! Route 53 HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::Route53Provider;
use super::sign::canonical_query;
use super::types::ErrorResponse;

impl Route53Provider {
    /// 执行签名后的 GET 请求并解析 XML 响应
    ///
    /// `path` is relative to the API version, e.g. `/hostedzonesbyname`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<T> {
        let canonical_uri = format!("{}{path}", self.api_path);
        let query = canonical_query(params);
        let url = if query.is_empty() {
            format!("{}{canonical_uri}", self.origin)
        } else {
            format!("{}{canonical_uri}?{query}", self.origin)
        };

        let amz_date = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let headers = vec![
            ("host".to_string(), self.host.clone()),
            ("x-amz-date".to_string(), amz_date.clone()),
        ];
        let authorization =
            self.signer()
                .sign("GET", &canonical_uri, &query, &headers, "", &amz_date);

        let request = self
            .client
            .get(&url)
            .header("X-Amz-Date", &amz_date)
            .header("Authorization", authorization);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        if !(200..300).contains(&status) {
            return Err(self.error_from_body(status, &response_text, context));
        }

        HttpUtils::parse_xml(&response_text, self.provider_name())
    }

    /// 将非 2xx 响应体映射为统一错误
    pub(crate) fn error_from_body(
        &self,
        status: u16,
        body: &str,
        context: ErrorContext,
    ) -> ProviderError {
        let raw = match quick_xml::de::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse { error }) => {
                let message = error.message.unwrap_or_else(|| format!("HTTP {status}"));
                match error.code {
                    Some(code) => RawApiError::with_code(code, message),
                    None => RawApiError::new(message),
                }
            }
            Err(_) => RawApiError::new(format!("HTTP {status}: {}", truncate_for_log(body))),
        };

        log::error!(
            "[route53] API error {}: {}",
            raw.code.as_deref().unwrap_or("-"),
            raw.message
        );

        self.map_error(
            raw,
            ErrorContext {
                status: Some(status),
                ..context
            },
        )
    }
}
