//! Application error taxonomy
//!
//! Every failure aborts the run. `main` prints the error chain to stdout and
//! exits with [`AppError::EXIT_CODE`].

use std::error::Error as _;

use cfmigrate_provider::{ProviderError, ProviderType};
use thiserror::Error;

use crate::config::ConfigField;

/// Config file could not be read or merged.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to load configuration")]
    Load(#[source] Box<figment::Error>),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A mandatory setting is absent from every source.
    #[error("No {0} supplied")]
    MissingField(ConfigField),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unable to create {provider} client")]
    ClientInit {
        provider: ProviderType,
        #[source]
        source: ProviderError,
    },

    #[error("Unable to find domain '{domain}' in {provider}")]
    ZoneNotFound {
        provider: ProviderType,
        domain: String,
        #[source]
        source: ProviderError,
    },

    #[error("Unable to fetch {provider} records")]
    Fetch {
        provider: ProviderType,
        #[source]
        source: ProviderError,
    },

    #[error("Unable to write output")]
    Output(#[source] std::io::Error),
}

impl AppError {
    /// Process exit code for every failed run.
    pub const EXIT_CODE: u8 = 1;

    /// 是否为预期行为（配置缺失、域名不存在等），用于日志分级。
    ///
    /// Provider failures defer to [`ProviderError::is_expected`].
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingField(_) => true,
            Self::ClientInit { source, .. }
            | Self::ZoneNotFound { source, .. }
            | Self::Fetch { source, .. } => source.is_expected(),
            Self::Config(_) | Self::Output(_) => false,
        }
    }

    /// The error and each of its causes, joined with `": "`.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_has_no_cause() {
        let e = AppError::MissingField(ConfigField::AwsSecret);
        assert_eq!(e.report(), "No AWS Secret Key supplied");
        assert!(e.is_expected());
    }

    #[test]
    fn zone_not_found_reports_cause() {
        let e = AppError::ZoneNotFound {
            provider: ProviderType::Route53,
            domain: "example.com".to_string(),
            source: ProviderError::DomainNotFound {
                provider: "route53".to_string(),
                domain: "example.com".to_string(),
                raw_message: None,
            },
        };
        assert_eq!(e.to_string(), "Unable to find domain 'example.com' in route53");
        assert_eq!(
            e.report(),
            "Unable to find domain 'example.com' in route53: [route53] Domain 'example.com' not found"
        );
    }

    #[test]
    fn fetch_error_names_provider() {
        let e = AppError::Fetch {
            provider: ProviderType::Cloudflare,
            source: ProviderError::Timeout {
                provider: "cloudflare".to_string(),
                detail: "operation timed out".to_string(),
            },
        };
        assert_eq!(
            e.report(),
            "Unable to fetch cloudflare records: [cloudflare] Request timeout: operation timed out"
        );
    }

    #[test]
    fn output_error_reports_cause() {
        let e = AppError::Output(std::io::Error::other("broken pipe"));
        assert_eq!(e.report(), "Unable to write output: broken pipe");
        assert!(!e.is_expected());
    }

    #[test]
    fn provider_causes_pick_expectedness() {
        let missing = AppError::ZoneNotFound {
            provider: ProviderType::Cloudflare,
            domain: "example.com".to_string(),
            source: ProviderError::AmbiguousDomain {
                provider: "cloudflare".to_string(),
                domain: "example.com".to_string(),
                matches: 2,
            },
        };
        assert!(missing.is_expected());

        let timeout = AppError::Fetch {
            provider: ProviderType::Route53,
            source: ProviderError::Timeout {
                provider: "route53".to_string(),
                detail: "operation timed out".to_string(),
            },
        };
        assert!(!timeout.is_expected());
    }
}
