//! Cloudflare HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    /// 执行 GET 请求，返回完整响应信封（含 `result_info`）
    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{}{path}", self.api_base);

        let request = self
            .client
            .get(&url)
            .header("X-Auth-Email", &self.email)
            .header("X-Auth-Key", &self.api_key)
            .header("Content-Type", "application/json");

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        let cf_response: CloudflareResponse<T> =
            match HttpUtils::parse_json(&response_text, self.provider_name()) {
                Ok(parsed) => parsed,
                // Non-JSON error pages (proxies, maintenance) carry no error code
                Err(_) if !(200..300).contains(&status) => {
                    return Err(self.unknown_error(RawApiError::new(format!(
                        "HTTP {status}: {}",
                        truncate_for_log(&response_text)
                    ))));
                }
                Err(e) => return Err(e),
            };

        if !cf_response.success {
            let (code, message) = cf_response
                .errors
                .as_ref()
                .and_then(|errors| {
                    errors
                        .first()
                        .map(|e| (e.code.to_string(), e.message.clone()))
                })
                .unwrap_or_else(|| (status.to_string(), format!("HTTP {status}")));
            log::error!("[cloudflare] API error {code}: {message}");
            return Err(self.map_error(
                RawApiError::with_code(code, message),
                ErrorContext {
                    status: Some(status),
                    ..context
                },
            ));
        }

        Ok(cf_response)
    }

    /// 执行 GET 请求，只取 `result` 字段
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        self.get_envelope(path, context)
            .await?
            .result
            .ok_or_else(|| self.parse_error("response is missing the result field"))
    }
}
